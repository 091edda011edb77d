//! Generate command: fetch or load a payload and write the HTML table.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::export::{render_sheet, RenderOptions};
use crate::models::element::{elements, validate_table};
use crate::services::{self, SourceError, SourcePayload};
use clap::Args;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Generate the interactive periodic table document
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Apps Script endpoint returning the sheet payload (overrides config)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Spreadsheet id passed to the endpoint as ?id= (overrides config)
    #[arg(long = "id", value_name = "SHEET_ID")]
    pub sheet_id: Option<String>,

    /// Render a previously dumped JSON payload instead of fetching
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Document title (overrides config)
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Output HTML file (overrides config)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Save the raw JSON payload to FILE before rendering
    #[arg(long, value_name = "FILE")]
    pub dump_json: Option<PathBuf>,

    /// HTTP timeout in seconds (overrides config)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// Where the payload is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PayloadSource {
    File(PathBuf),
    Remote {
        api_url: String,
        sheet_id: Option<String>,
        timeout: Duration,
    },
}

impl GenerateArgs {
    /// Execute the generate command
    pub async fn execute(&self, config: &Config) -> CliResult<()> {
        validate_table(elements())
            .map_err(|e| CliError::validation(format!("Element table is invalid: {e}")))?;

        let source = self.resolve_source(config)?;
        let options = self.render_options(config)?;
        let output_path = self.output.clone().unwrap_or_else(|| config.output.path.clone());

        let payload = load(&source).await?;

        if let Some(dump_path) = &self.dump_json {
            services::dump_json(dump_path, &payload.raw)
                .map_err(|e| CliError::io(format!("Failed to dump JSON payload: {e}")))?;
            info!(path = %dump_path.display(), "Saved raw payload");
        }

        let html = render_sheet(&payload.sheet, &options)
            .to_html()
            .map_err(|e| CliError::io(format!("Failed to serialize document: {e}")))?;

        services::write_atomic(&output_path, &html)
            .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;

        println!("Generated {} successfully.", output_path.display());

        Ok(())
    }

    /// Picks exactly one payload source. Flags win over the config file.
    fn resolve_source(&self, config: &Config) -> CliResult<PayloadSource> {
        if let Some(input) = &self.input {
            if self.api_url.is_some() || self.sheet_id.is_some() {
                return Err(CliError::validation(
                    "--input cannot be combined with --api-url or --id",
                ));
            }
            return Ok(PayloadSource::File(input.clone()));
        }

        let api_url = self
            .api_url
            .clone()
            .or_else(|| config.source.api_url.clone())
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                CliError::validation(
                    "No payload source. Use --input FILE or --api-url URL (or set source.api_url in the config)",
                )
            })?;

        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(CliError::validation(format!(
                "API URL must start with http:// or https://: {api_url}"
            )));
        }

        let timeout = self
            .timeout
            .map_or_else(|| config.source.timeout(), Duration::from_secs);
        if timeout.is_zero() {
            return Err(CliError::validation("Timeout must be at least 1 second"));
        }

        Ok(PayloadSource::Remote {
            api_url,
            sheet_id: self.sheet_id.clone().or_else(|| config.source.sheet_id.clone()),
            timeout,
        })
    }

    fn render_options(&self, config: &Config) -> CliResult<RenderOptions> {
        let title = self.title.clone().unwrap_or_else(|| config.output.title.clone());
        if title.trim().is_empty() {
            return Err(CliError::validation("Title cannot be empty"));
        }

        let empty_color = config
            .empty_color()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        Ok(RenderOptions { title, empty_color })
    }
}

async fn load(source: &PayloadSource) -> CliResult<SourcePayload> {
    let result = match source {
        PayloadSource::File(path) => services::load_payload_file(path),
        PayloadSource::Remote {
            api_url,
            sheet_id,
            timeout,
        } => services::fetch_payload(api_url, sheet_id.as_deref(), *timeout).await,
    };

    result.map_err(|e| match e {
        SourceError::File { .. } => CliError::io(e.to_string()),
        other => CliError::fetch(format!("Failed to load payload: {other}")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::common::ExitCode;

    #[test]
    fn test_source_requires_input_or_url() {
        let args = GenerateArgs::default();
        let err = args.resolve_source(&Config::default()).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::Validation);
        assert!(err.message.contains("--input"));
    }

    #[test]
    fn test_source_flags_override_config() {
        let mut config = Config::default();
        config.source.api_url = Some("https://config.example/exec".to_string());
        config.source.sheet_id = Some("from-config".to_string());

        let args = GenerateArgs {
            api_url: Some("https://flag.example/exec".to_string()),
            timeout: Some(5),
            ..GenerateArgs::default()
        };

        assert_eq!(
            args.resolve_source(&config).unwrap(),
            PayloadSource::Remote {
                api_url: "https://flag.example/exec".to_string(),
                sheet_id: Some("from-config".to_string()),
                timeout: Duration::from_secs(5),
            }
        );
    }

    #[test]
    fn test_source_timeout_falls_back_to_config() {
        let mut config = Config::default();
        config.source.api_url = Some("https://config.example/exec".to_string());
        config.source.timeout_secs = 12;

        let source = GenerateArgs::default().resolve_source(&config).unwrap();
        assert_eq!(
            source,
            PayloadSource::Remote {
                api_url: "https://config.example/exec".to_string(),
                sheet_id: None,
                timeout: Duration::from_secs(12),
            }
        );
    }

    #[test]
    fn test_source_input_wins_over_config_url() {
        let mut config = Config::default();
        config.source.api_url = Some("https://config.example/exec".to_string());

        let args = GenerateArgs {
            input: Some(PathBuf::from("dump.json")),
            ..GenerateArgs::default()
        };
        assert_eq!(
            args.resolve_source(&config).unwrap(),
            PayloadSource::File(PathBuf::from("dump.json"))
        );
    }

    #[test]
    fn test_source_input_conflicts_with_url_flag() {
        let args = GenerateArgs {
            input: Some(PathBuf::from("dump.json")),
            api_url: Some("https://flag.example/exec".to_string()),
            ..GenerateArgs::default()
        };
        assert!(args.resolve_source(&Config::default()).is_err());
    }

    #[test]
    fn test_source_rejects_bad_url_and_timeout() {
        let args = GenerateArgs {
            api_url: Some("script.google.com".to_string()),
            ..GenerateArgs::default()
        };
        assert!(args.resolve_source(&Config::default()).is_err());

        let args = GenerateArgs {
            api_url: Some("https://flag.example/exec".to_string()),
            timeout: Some(0),
            ..GenerateArgs::default()
        };
        assert!(args.resolve_source(&Config::default()).is_err());
    }

    #[test]
    fn test_render_options() {
        let args = GenerateArgs {
            title: Some("Lab".to_string()),
            ..GenerateArgs::default()
        };
        let options = args.render_options(&Config::default()).unwrap();
        assert_eq!(options.title, "Lab");
        assert_eq!(options.empty_color.to_hex(), "#eaeaea");

        let args = GenerateArgs {
            title: Some(" ".to_string()),
            ..GenerateArgs::default()
        };
        assert!(args.render_options(&Config::default()).is_err());
    }
}
