//! Sheet payload source.
//!
//! Fetches the JSON payload published by the spreadsheet endpoint, or reads a
//! previously dumped payload from disk. Either way the result is validated
//! into a [`SheetPayload`] before anything downstream sees it.

use crate::parser::{PayloadError, SheetPayload};
use reqwest::Client;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Maximum number of characters of an error body quoted in messages.
const STATUS_PREVIEW_CHARS: usize = 200;
/// Number of leading lines quoted when the body is not JSON.
const JSON_PREVIEW_LINES: usize = 5;

/// Failures while obtaining a payload.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Transport failure (DNS, connect, timeout, ...).
    #[error("HTTP request to {url} failed: {source}")]
    Request {
        /// Requested endpoint
        url: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },
    /// The endpoint answered with a non-200 status.
    #[error("endpoint returned status {status}: {preview}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Start of the response body
        preview: String,
    },
    /// The body is not JSON.
    #[error("failed to parse JSON from endpoint, response begins: {preview:?}")]
    Json {
        /// First lines of the body
        preview: Vec<String>,
    },
    /// A local payload file could not be read.
    #[error("failed to read payload file {}: {source}", path.display())]
    File {
        /// File that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The JSON does not match the payload schema.
    #[error(transparent)]
    Schema(#[from] PayloadError),
}

/// A validated payload together with the JSON it was decoded from.
#[derive(Debug, Clone)]
pub struct SourcePayload {
    /// Untouched JSON document, kept for `--dump-json`
    pub raw: Value,
    /// Typed view used by merge and render
    pub sheet: SheetPayload,
}

impl SourcePayload {
    /// Validates a decoded JSON document.
    pub fn from_raw(raw: Value) -> Result<Self, SourceError> {
        let sheet = SheetPayload::from_value(&raw)?;
        debug!(
            rows = sheet.elements.len(),
            legend = sheet.legend.as_ref().map_or(0, Vec::len),
            label_colors = sheet.label_colors.len(),
            "Validated sheet payload"
        );
        Ok(Self { raw, sheet })
    }
}

/// Fetches the payload with `GET <api_url>[?id=<sheet_id>]`.
///
/// # Errors
///
/// Returns [`SourceError::Request`] on transport failure and the errors of
/// [`decode_response`] otherwise.
pub async fn fetch_payload(
    api_url: &str,
    sheet_id: Option<&str>,
    timeout: Duration,
) -> Result<SourcePayload, SourceError> {
    let request_error = |source| SourceError::Request {
        url: api_url.to_string(),
        source,
    };

    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(request_error)?;

    let mut request = client.get(api_url);
    if let Some(id) = sheet_id.filter(|id| !id.is_empty()) {
        request = request.query(&[("id", id)]);
    }

    info!(url = api_url, sheet_id = sheet_id.unwrap_or(""), "Fetching sheet payload");
    let response = request.send().await.map_err(request_error)?;
    let status = response.status().as_u16();
    let body = response.text().await.map_err(request_error)?;
    debug!(status, bytes = body.len(), "Received response");

    decode_response(status, &body)
}

/// Reads a payload previously saved with `--dump-json`.
pub fn load_payload_file(path: &Path) -> Result<SourcePayload, SourceError> {
    let body = std::fs::read_to_string(path).map_err(|source| SourceError::File {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "Loaded sheet payload from file");
    let raw = decode_json(&body)?;
    SourcePayload::from_raw(raw)
}

/// Turns an HTTP `(status, body)` pair into a validated payload.
///
/// Only status 200 is accepted.
pub fn decode_response(status: u16, body: &str) -> Result<SourcePayload, SourceError> {
    if status != 200 {
        return Err(SourceError::Status {
            status,
            preview: body.chars().take(STATUS_PREVIEW_CHARS).collect(),
        });
    }
    let raw = decode_json(body)?;
    SourcePayload::from_raw(raw)
}

fn decode_json(body: &str) -> Result<Value, SourceError> {
    serde_json::from_str(body).map_err(|_| SourceError::Json {
        preview: body
            .trim()
            .lines()
            .take(JSON_PREVIEW_LINES)
            .map(str::to_string)
            .collect(),
    })
}
