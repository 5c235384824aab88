//! One-line warning parsing.
//!
//! The tool reports documentation warnings as single lines:
//!
//! ```text
//! [warn]: @param tag has unknown parameter name: bad_param in file `lib/code.rb` near line 31
//! ```
//!
//! Each warning family supplies a `general` gate regex selecting its own
//! lines; the message, location, and line extractors are shared. Lines the
//! gate does not match are someone else's problem (or nobody's), never an
//! error.

use regex::Regex;
use std::sync::LazyLock;

use super::OffenseCandidate;

static MESSAGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[warn\]: (.*) in file").unwrap());
static LOCATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"in file `(.*)`").unwrap());
static LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"line (\d+)").unwrap());

/// Extract all warnings matched by `general`, tagging candidates with the
/// family's offense name.
pub fn parse(text: &str, general: &Regex, offense_name: &str) -> Vec<OffenseCandidate> {
    text.lines()
        .map(str::trim)
        .filter(|line| general.is_match(line))
        .map(|line| {
            let message = MESSAGE
                .captures(line)
                .map(|c| c[1].to_string())
                .unwrap_or_else(|| line.trim_start_matches("[warn]: ").to_string());
            let location = LOCATION
                .captures(line)
                .map(|c| c[1].to_string())
                .unwrap_or_default();
            let line_no = LINE
                .captures(line)
                .and_then(|c| c[1].parse().ok())
                .unwrap_or(0);

            OffenseCandidate {
                location,
                line: line_no,
                name: Some(offense_name.to_string()),
                message: Some(message),
                ..Default::default()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate(pattern: &str) -> Regex {
        Regex::new(pattern).unwrap()
    }

    #[test]
    fn parses_warning_line() {
        let input = "[warn]: @param tag has unknown parameter name: bad_param in file `lib/code.rb` near line 31";
        let gate = gate(r"^\[warn\]: @param tag has unknown parameter name");

        let result = parse(input, &gate, "UnknownParameterName");

        assert_eq!(result.len(), 1);
        let c = &result[0];
        assert_eq!(c.name.as_deref(), Some("UnknownParameterName"));
        assert_eq!(
            c.message.as_deref(),
            Some("@param tag has unknown parameter name: bad_param")
        );
        assert_eq!(c.location, "lib/code.rb");
        assert_eq!(c.line, 31);
    }

    #[test]
    fn parses_multiple_warnings() {
        let line = "[warn]: Unknown tag @wat in file `a.rb` near line 2";
        let input = format!("{line}\n{line}");
        let gate = gate(r"^\[warn\]: Unknown tag");

        assert_eq!(parse(&input, &gate, "UnknownTag").len(), 2);
    }

    #[test]
    fn ignores_lines_outside_the_gate() {
        let input = "Files: 3\n[warn]: Unknown tag @wat in file `a.rb` near line 2\ndone";
        let gate = gate(r"^\[warn\]: @param tag has duplicate parameter name");

        assert!(parse(input, &gate, "DuplicatedParameterName").is_empty());
    }

    #[test]
    fn missing_line_number_defaults_to_zero() {
        let input = "[warn]: Unknown tag @wat in file `a.rb`";
        let gate = gate(r"^\[warn\]: Unknown tag");

        let result = parse(input, &gate, "UnknownTag");
        assert_eq!(result[0].line, 0);
        assert_eq!(result[0].location, "a.rb");
    }

    #[test]
    fn empty_input_yields_nothing() {
        let gate = gate(r"^\[warn\]: Unknown tag");
        assert!(parse("", &gate, "UnknownTag").is_empty());
    }
}
