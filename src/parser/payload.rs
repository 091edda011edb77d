//! Sheet payload parser.
//!
//! The Apps Script endpoint returns loosely-typed JSON. This module validates
//! its shape once and produces a strongly-typed [`SheetPayload`] so that the
//! merge and render stages never see arbitrary JSON.
//!
//! Expected structure:
//!
//! ```json
//! {
//!   "elements": [
//!     {"row": 1, "symbol": "H", "samples": [{"value": "A1", "state": "in arrivo", "color": ""}]}
//!   ],
//!   "legend": {"#ff0000": "da comprare"},
//!   "labelColors": {"da comprare": "#ff0000"}
//! }
//! ```

use crate::models::LabelColors;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Schema violations in a sheet payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// The payload does not have the expected overall structure.
    #[error("unexpected payload structure: {0}")]
    Shape(String),
    /// A field holds a value of the wrong JSON type.
    #[error("invalid value at {path}: expected {expected}")]
    Field {
        /// Location of the field (e.g. `elements[3].samples[0].state`)
        path: String,
        /// Accepted JSON types
        expected: &'static str,
    },
}

/// Validated sheet payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetPayload {
    /// Rows with a non-blank symbol, in source order
    pub elements: Vec<SheetRow>,
    /// Explicit legend as (color, label) pairs in display order, when supplied
    pub legend: Option<Vec<(String, String)>>,
    /// State label to color mapping
    pub label_colors: LabelColors,
}

/// One sheet row keyed by element symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    /// Element symbol, trimmed
    pub symbol: String,
    /// Samples as supplied (any length)
    pub samples: Vec<SampleInput>,
}

/// A raw sample; `None` means the field was absent or null.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleInput {
    /// Cell value, stringified
    pub value: Option<String>,
    /// State label, stringified (untrimmed)
    pub state: Option<String>,
    /// Color, stringified (untrimmed)
    pub color: Option<String>,
}

impl SampleInput {
    /// Convenience constructor used by callers building payloads in code.
    pub fn new(value: &str, state: &str, color: &str) -> Self {
        Self {
            value: Some(value.to_string()),
            state: Some(state.to_string()),
            color: Some(color.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawPayload {
    elements: Vec<RawElement>,
    #[serde(default)]
    legend: Option<Map<String, Value>>,
    #[serde(default, rename = "labelColors")]
    label_colors: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
struct RawElement {
    #[serde(default)]
    symbol: Value,
    #[serde(default)]
    samples: Option<Vec<RawSample>>,
}

#[derive(Debug, Deserialize)]
struct RawSample {
    #[serde(default)]
    value: Value,
    #[serde(default)]
    state: Value,
    #[serde(default)]
    color: Value,
}

impl SheetPayload {
    /// Parses and validates a payload from JSON text.
    pub fn parse(text: &str) -> Result<Self, PayloadError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| PayloadError::Shape(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Validates an already-decoded JSON value.
    pub fn from_value(value: &Value) -> Result<Self, PayloadError> {
        if !value.is_object() {
            return Err(PayloadError::Shape(
                "expected an object with an 'elements' key".to_string(),
            ));
        }

        let raw =
            RawPayload::deserialize(value).map_err(|e| PayloadError::Shape(e.to_string()))?;

        let mut elements = Vec::with_capacity(raw.elements.len());
        for (idx, element) in raw.elements.into_iter().enumerate() {
            let path = format!("elements[{idx}]");
            let symbol = scalar_text(&element.symbol, &format!("{path}.symbol"))?
                .map(|s| s.trim().to_string())
                .unwrap_or_default();

            // Rows without a symbol cannot be joined to the table
            if symbol.is_empty() {
                continue;
            }

            let mut samples = Vec::new();
            let raw_samples = element.samples.unwrap_or_default();
            for (sample_idx, sample) in raw_samples.iter().enumerate() {
                let sample_path = format!("{path}.samples[{sample_idx}]");
                samples.push(SampleInput {
                    value: scalar_text(&sample.value, &format!("{sample_path}.value"))?,
                    state: scalar_text(&sample.state, &format!("{sample_path}.state"))?,
                    color: scalar_text(&sample.color, &format!("{sample_path}.color"))?,
                });
            }

            elements.push(SheetRow { symbol, samples });
        }

        let legend = raw
            .legend
            .as_ref()
            .map(|map| string_pairs(map, "legend"))
            .transpose()?;

        let label_colors = match raw.label_colors.as_ref() {
            Some(map) => string_pairs(map, "labelColors")?.into_iter().collect(),
            None => LabelColors::new(),
        };

        Ok(Self {
            elements,
            legend,
            label_colors,
        })
    }
}

/// Converts a JSON scalar to text. `null` yields `None`.
///
/// Booleans come from checkbox cells and read `True`/`False`, as the sheet
/// shows them.
fn scalar_text(value: &Value, path: &str) -> Result<Option<String>, PayloadError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(if *b { "True" } else { "False" }.to_string())),
        Value::Array(_) | Value::Object(_) => Err(PayloadError::Field {
            path: path.to_string(),
            expected: "string, number, boolean or null",
        }),
    }
}

/// Converts a JSON object into (key, text) pairs in source order.
fn string_pairs(
    map: &Map<String, Value>,
    field: &str,
) -> Result<Vec<(String, String)>, PayloadError> {
    map.iter()
        .map(|(key, value)| {
            let text = scalar_text(value, &format!("{field}.{key}"))?.unwrap_or_default();
            Ok((key.clone(), text))
        })
        .collect()
}
