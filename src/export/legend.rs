//! Legend builder.

use super::filter_tag::normalize_tag;
use crate::models::{LabelColors, LegendEntry};
use tracing::debug;

/// Builds the visual legend.
///
/// When `explicit` (color to label pairs in display order) is supplied it
/// defines the legend, inverted to label to color. Otherwise the entries of
/// `label_colors` are used in their stored order. Entries whose label is
/// empty or whitespace are dropped.
///
/// An explicit but empty legend yields an empty result; `label_colors` is
/// not consulted in that case.
pub fn build_legend(
    label_colors: &LabelColors,
    explicit: Option<&[(String, String)]>,
) -> Vec<LegendEntry> {
    let pairs: Vec<(&str, &str)> = match explicit {
        Some(ordered) => ordered
            .iter()
            .map(|(color, label)| (label.as_str(), color.as_str()))
            .collect(),
        None => label_colors.iter().collect(),
    };

    let entries: Vec<LegendEntry> = pairs
        .into_iter()
        .filter(|(label, _)| !label.trim().is_empty())
        .map(|(label, color)| LegendEntry {
            label: label.to_string(),
            color: color.trim().to_string(),
            filter_tag: normalize_tag(label),
        })
        .collect();

    debug!(
        entries = entries.len(),
        explicit = explicit.is_some(),
        "Built legend"
    );
    entries
}
