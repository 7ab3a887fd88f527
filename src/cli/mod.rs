//! CLI command handlers.
//!
//! Each handler takes a validated config, runs the pipeline stages and
//! returns the process exit code. Argument parsing lives in `main.rs`.

mod diff;

pub use diff::run_diff;
