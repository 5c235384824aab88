//! Command-line interface for doclint.
//!
//! Argument parsing lives in [`args`]; the binary entry point in
//! `src/main.rs` wires parsed arguments into the library pipeline.

pub mod args;

pub use args::Cli;
