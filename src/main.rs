//! doclint CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use doclint::cli::Cli;
use doclint::output::{HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter};
use doclint::registry;
use doclint::results::Severity;
use doclint::{run, RunOptions};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("doclint=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("doclint=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn list_validators() {
    for descriptor in registry::all() {
        println!("{}", descriptor.name);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if cli.list_validators {
        list_validators();
        return ExitCode::SUCCESS;
    }

    let use_color = !cli.no_color && std::env::var_os("NO_COLOR").is_none();

    let paths = if cli.paths.is_empty() {
        vec![".".to_string()]
    } else {
        cli.paths.clone()
    };

    let fail_on = match cli.fail_on.as_deref() {
        Some(value) => match value.parse::<Severity>() {
            Ok(severity) => Some(severity),
            Err(()) => {
                eprintln!("Error: invalid --fail-on value: {value}");
                return ExitCode::from(2);
            }
        },
        None => None,
    };

    let mut options = RunOptions {
        config_file: cli.config.clone(),
        progress: cli.progress,
        ..Default::default()
    };

    // --fail-on overrides whatever the config documents say.
    if let Some(severity) = fail_on {
        let mut config = match load_config(&cli) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        };
        config.set_fail_on_severity(severity);
        options.config = Some(config);
    }

    match run(&paths, options) {
        Ok(result) => {
            let mut stdout = std::io::stdout().lock();
            let rendered = match cli.format {
                OutputFormat::Human => {
                    HumanFormatter::new(use_color).format(&result, &mut stdout)
                }
                OutputFormat::Json => JsonFormatter::new(true).format(&result, &mut stdout),
            };
            if let Err(e) = rendered {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }

            ExitCode::from(result.exit_code() as u8)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> doclint::Result<doclint::config::EffectiveConfig> {
    use doclint::config::{ConfigLoader, EffectiveConfig};

    match &cli.config {
        Some(path) => ConfigLoader::from_file(path),
        None => {
            let cwd = std::env::current_dir()?;
            Ok(ConfigLoader::discover(&cwd)?.unwrap_or_else(EffectiveConfig::empty))
        }
    }
}
