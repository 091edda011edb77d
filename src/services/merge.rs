//! Record merger.
//!
//! Joins the static element table with the sparse per-symbol sample rows of a
//! sheet payload. Every element of the table yields exactly one
//! [`EnrichedEntity`] with exactly [`SAMPLE_SLOTS`] samples, whether or not
//! the sheet mentions it.

use crate::models::element::GeometryEntry;
use crate::models::{EnrichedEntity, LabelColors, SampleRecord, SAMPLE_SLOTS};
use crate::parser::{SampleInput, SheetRow};
use std::collections::HashMap;
use tracing::debug;

/// Merges sheet rows into the geometry table.
///
/// - Rows are matched by symbol (trimmed, case-sensitive). When a symbol
///   appears twice, the later row wins.
/// - Up to [`SAMPLE_SLOTS`] samples are taken in order; extra samples are
///   dropped and short lists are padded with empty samples.
/// - A sample with a state but no color takes its color from `label_colors`.
///
/// The output follows the order of `table` (ascending atomic number for the
/// built-in table), never the order of `rows`.
pub fn merge(
    table: &[GeometryEntry],
    rows: &[SheetRow],
    label_colors: &LabelColors,
) -> Vec<EnrichedEntity> {
    let by_symbol: HashMap<&str, &SheetRow> =
        rows.iter().map(|row| (row.symbol.trim(), row)).collect();

    let mut matched = 0usize;
    let mut truncated = 0usize;

    let entities: Vec<EnrichedEntity> = table
        .iter()
        .map(|entry| {
            let mut samples: [SampleRecord; SAMPLE_SLOTS] = Default::default();

            if let Some(row) = by_symbol.get(entry.symbol) {
                matched += 1;
                if row.samples.len() > SAMPLE_SLOTS {
                    truncated += 1;
                }
                for (slot, input) in samples.iter_mut().zip(&row.samples) {
                    *slot = normalize_sample(input, label_colors);
                }
            }

            EnrichedEntity {
                number: entry.number,
                symbol: entry.symbol,
                name: entry.name,
                samples,
            }
        })
        .collect();

    let mut unknown: Vec<&str> = by_symbol
        .keys()
        .copied()
        .filter(|symbol| !table.iter().any(|e| e.symbol == *symbol))
        .collect();
    unknown.sort_unstable();
    if !unknown.is_empty() {
        debug!(symbols = ?unknown, "Ignoring rows with unknown symbols");
    }

    debug!(
        elements = entities.len(),
        matched,
        truncated,
        unknown = unknown.len(),
        "Merged sheet rows into element table"
    );

    entities
}

/// Normalizes one raw sample and back-fills its color from the legend.
fn normalize_sample(input: &SampleInput, label_colors: &LabelColors) -> SampleRecord {
    let value = input.value.clone().unwrap_or_default();
    let state = input.state.as_deref().map(str::trim).unwrap_or_default().to_string();
    let mut color = input.color.as_deref().map(str::trim).unwrap_or_default().to_string();

    if !state.is_empty() && color.is_empty() {
        color = label_colors.get(&state).unwrap_or_default().to_string();
    }

    SampleRecord {
        value,
        state,
        color,
    }
}
