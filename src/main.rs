//! legidiff: structural changeset tool for legal-text trees
//!
//! Compares two snapshots of a LEGI code or KALI convention and reports
//! which sections and articles were added, removed or modified.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use legidiff::{
    cli,
    config::{BehaviorConfig, DiffConfig, DiffPaths, OutputConfig},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Build long version string
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nSupported snapshot format:",
        "\n  unist JSON trees (LEGI codes, KALI conventions)",
        "\n\nOutput Formats:",
        "\n  json, summary"
    )
}

#[derive(Parser)]
#[command(name = "legidiff")]
#[command(version, long_version = build_long_version())]
#[command(about = "Structural changeset tool for legal-text trees", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  No changes detected (or no --fail-on-change)
    1  Changes detected (with --fail-on-change)
    2  Error occurred

EXAMPLES:
    # Human-readable summary of what changed
    legidiff diff 2026-01.json 2026-02.json

    # JSON changeset for the rendering layer
    legidiff diff 2026-01.json 2026-02.json -o json > changes.json

    # CI gate: non-zero exit when the code changed
    legidiff diff 2026-01.json 2026-02.json --fail-on-change -o summary")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `diff` subcommand
#[derive(Parser)]
struct DiffArgs {
    /// Path to the old/baseline snapshot
    old: PathBuf,

    /// Path to the new snapshot
    new: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "summary")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 if any changes are detected
    #[arg(long)]
    fail_on_change: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two snapshots and report the changeset
    Diff(DiffArgs),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("legidiff={default_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli_args: Cli) -> Result<i32> {
    match cli_args.command {
        Commands::Diff(args) => {
            let config = DiffConfig {
                paths: DiffPaths {
                    old: args.old,
                    new: args.new,
                },
                output: OutputConfig {
                    format: args.output,
                    file: args.output_file,
                },
                behavior: BehaviorConfig {
                    quiet: cli_args.quiet,
                    fail_on_change: args.fail_on_change,
                },
            };
            cli::run_diff(&config)
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "legidiff", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn main() {
    let cli_args = Cli::parse();
    init_tracing(cli_args.verbose, cli_args.quiet);

    let code = match run(cli_args) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err:#}");
            exit_codes::ERROR
        }
    };
    if code != exit_codes::SUCCESS {
        std::process::exit(code);
    }
}
