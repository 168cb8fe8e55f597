//! pack-tools: Semantic context pack diff tool
//!
//! Compares two versions of a feature context pack and recommends the next
//! semantic version based on the impact of the changes.

#![allow(clippy::needless_pass_by_value)]

use clap::{Parser, Subcommand};
use pack_tools::{
    cli,
    config::{BehaviorConfig, DiffConfig, DiffPaths, OutputConfig},
    diff::EngineConfig,
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pack-tools")]
#[command(version)]
#[command(about = "Semantic context pack diff tool", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  No breaking changes (or --no-fail-on-breaking)
    1  Breaking changes detected
    2  Error occurred

EXAMPLES:
    # Compare two pack versions
    pack-tools diff checkout-1.2.0.yaml checkout-next.yaml

    # CI/CD gate with shell-friendly output
    pack-tools diff base.yaml head.yaml -o summary

    # Export JSON for release tooling
    pack-tools diff base.yaml head.yaml -o json -O diff.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `diff` subcommand
#[derive(Parser)]
struct DiffArgs {
    /// Path to the base (older) context pack
    base: PathBuf,

    /// Path to the head (newer) context pack
    head: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "json")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Do not exit with code 1 when breaking changes are detected
    #[arg(long)]
    no_fail_on_breaking: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two context packs and classify the changes
    Diff(DiffArgs),
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let exit_code = match cli.command {
        Commands::Diff(args) => {
            let config = DiffConfig {
                paths: DiffPaths {
                    base: args.base,
                    head: args.head,
                },
                output: OutputConfig {
                    format: args.output,
                    file: args.output_file,
                    no_color: cli.no_color,
                },
                engine: EngineConfig::default(),
                behavior: BehaviorConfig {
                    fail_on_breaking: !args.no_fail_on_breaking,
                    quiet: cli.quiet,
                },
            };

            match cli::run_diff(config) {
                Ok(code) => code,
                Err(err) => {
                    tracing::error!("{err:#}");
                    exit_codes::ERROR
                }
            }
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}
