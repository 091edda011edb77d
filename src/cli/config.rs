//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::models::RgbColor;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the config file location
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Default)]
pub struct ConfigSetArgs {
    /// Apps Script endpoint URL
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Spreadsheet id passed as ?id=
    #[arg(long, value_name = "SHEET_ID")]
    sheet_id: Option<String>,

    /// Document title
    #[arg(long, value_name = "TEXT")]
    title: Option<String>,

    /// Output HTML file
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Neutral quarter color (#RGB or #RRGGBB)
    #[arg(long, value_name = "HEX")]
    empty_color: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    source: SourceOutput,
    output: OutputOutput,
    render: RenderOutput,
}

#[derive(Serialize, Debug)]
struct SourceOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sheet_id: Option<String>,
    timeout_secs: u64,
}

#[derive(Serialize, Debug)]
struct OutputOutput {
    path: String,
    title: String,
}

#[derive(Serialize, Debug)]
struct RenderOutput {
    empty_color: String,
}

impl ConfigArgs {
    /// Execute config subcommand against the config file at `path`
    pub fn execute(&self, path: &Path) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(path),
            ConfigCommand::Set(args) => args.execute(path),
            ConfigCommand::Path => {
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, path: &Path) -> CliResult<()> {
        let config = Config::load_from(path)
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config, path);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.api_url.is_none()
            && self.sheet_id.is_none()
            && self.title.is_none()
            && self.output.is_none()
            && self.empty_color.is_none()
            && self.timeout.is_none()
    }

    /// Execute set command
    pub fn execute(&self, path: &Path) -> CliResult<()> {
        // At least one argument must be provided
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --api-url, --sheet-id, --title, --output, --empty-color, or --timeout",
            ));
        }

        let mut config = Config::load_from(path)
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        self.apply(&mut config)?;

        config
            .validate()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        config
            .save_to(path)
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }

    fn apply(&self, config: &mut Config) -> CliResult<()> {
        if let Some(url) = &self.api_url {
            config.source.api_url = Some(url.clone());
        }

        if let Some(id) = &self.sheet_id {
            config.source.sheet_id = Some(id.clone());
        }

        if let Some(title) = &self.title {
            config.output.title.clone_from(title);
        }

        if let Some(output) = &self.output {
            config.output.path.clone_from(output);
        }

        if let Some(color) = &self.empty_color {
            // Store the canonical form
            let parsed =
                RgbColor::from_hex(color).map_err(|e| CliError::validation(e.to_string()))?;
            config.render.empty_color = parsed.to_hex();
        }

        if let Some(timeout) = self.timeout {
            config.source.timeout_secs = timeout;
        }

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        source: SourceOutput {
            api_url: config.source.api_url.clone(),
            sheet_id: config.source.sheet_id.clone(),
            timeout_secs: config.source.timeout_secs,
        },
        output: OutputOutput {
            path: config.output.path.to_string_lossy().to_string(),
            title: config.output.title.clone(),
        },
        render: RenderOutput {
            empty_color: config.render.empty_color.clone(),
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config, path: &Path) {
    println!("Periodic Samples Configuration");
    println!("==============================");
    println!("File: {}", path.display());
    println!();

    println!("Source:");
    println!(
        "  API URL: {}",
        config.source.api_url.as_deref().unwrap_or("(not configured)")
    );
    println!(
        "  Sheet ID: {}",
        config.source.sheet_id.as_deref().unwrap_or("(not configured)")
    );
    println!("  Timeout: {}s", config.source.timeout_secs);
    println!();

    println!("Output:");
    println!("  Path: {}", config.output.path.display());
    println!("  Title: {}", config.output.title);
    println!();

    println!("Render:");
    println!("  Empty Color: {}", config.render.empty_color);
    println!();
}
