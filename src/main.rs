//! Periodic Samples - sample tracker rendered as a periodic table
//!
//! Fetches the sample sheet published by a spreadsheet endpoint (or reads a
//! dumped payload) and writes a single interactive HTML page.

use clap::{Parser, Subcommand};
use periodic_samples::cli::{CliError, CliResult, ConfigArgs, ExitCode, GenerateArgs};
use periodic_samples::config::Config;
use periodic_samples::constants::{APP_BINARY_NAME, APP_NAME};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Periodic Samples - render a sample-tracking sheet as an interactive periodic table
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this config file instead of the default location
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the HTML periodic table
    Generate(GenerateArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> CliResult<()> {
    let config_path = Config::resolve_path(cli.config.as_deref())
        .map_err(|e| CliError::validation(format!("{e:#}")))?;
    debug!(path = %config_path.display(), "Using config file");

    match cli.command {
        Command::Generate(args) => {
            let config = Config::load_from(&config_path).map_err(|e| {
                CliError::validation(format!("Failed to load configuration: {e:#}"))
            })?;
            args.execute(&config).await
        }
        Command::Config(args) => args.execute(&config_path),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    let code = match run(cli).await {
        Ok(()) => ExitCode::Success,
        Err(err) => {
            eprintln!("Error: {}", err.message);
            err.exit_code
        }
    };

    std::process::exit(code.code());
}
