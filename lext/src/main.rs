//! Lext CLI - command-line front end for the lexc lexical analyzer.
//!
//! This is the main entry point for the lext CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    analyze::AnalyzeCommand,
    common::{OutputFormat, StyleChoice},
    init::InitCommand,
    run_analyze, run_init,
    traits::CommandDescription,
    AnalyzeArgs, InitArgs,
};
use config::Config;
use error::{LextError, Result};

/// Lext - lexical analysis from the command line
///
/// Lext splits a source program into tokens and reports the identifier
/// table, the constant table, the token stream, and any lexical errors.
#[derive(Parser, Debug)]
#[command(name = "lext")]
#[command(author = "Lexc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical analysis from the command line", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LEXT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LEXT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "LEXT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the lext CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = AnalyzeCommand::description(), long_about = AnalyzeCommand::help())]
    Analyze(AnalyzeOpts),

    #[command(about = InitCommand::description(), long_about = InitCommand::help())]
    Init(InitOpts),
}

/// Arguments for the analyze subcommand.
#[derive(Parser, Debug)]
struct AnalyzeOpts {
    /// Source file to analyze, or `-` for stdin
    input: PathBuf,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Token line style (default: from config)
    #[arg(short, long, value_enum)]
    style: Option<StyleChoice>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Exit with an error if the source has lexical errors
    #[arg(long)]
    fail_on_errors: bool,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitOpts {
    /// Directory to write lext.toml into (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing lext.toml
    #[arg(short, long)]
    force: bool,
}

/// Main entry point for the lext CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Initialize logging
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    // Execute the selected command
    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so reports on stdout stay machine-readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| LextError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze(opts) => execute_analyze(opts, config),
        Commands::Init(opts) => execute_init(opts),
    }
}

/// Execute the analyze command.
fn execute_analyze(opts: AnalyzeOpts, config: Config) -> Result<()> {
    let analyze_args = AnalyzeArgs {
        input: opts.input,
        output: opts.output,
        style: opts.style,
        format: opts.format,
        fail_on_errors: opts.fail_on_errors,
        config: config.report,
    };
    run_analyze(analyze_args).map(|_| ())
}

/// Execute the init command.
fn execute_init(opts: InitOpts) -> Result<()> {
    let init_args = InitArgs {
        force: opts.force,
        path: opts.path,
    };
    run_init(init_args).map(|_| ())
}
