//! Filter tag normalization.
//!
//! Legend entries and sample quarters are linked through a tag derived from
//! the state label. Both sides must go through [`normalize_tag`] so that a
//! legend click finds every quarter carrying the same state.

use regex::Regex;
use std::sync::LazyLock;

static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("separator pattern is valid"));

/// Converts a state label into a CSS-friendly tag.
///
/// The label is lowercased, every run of characters that are neither
/// letters nor digits becomes a single `-`, and leading or trailing dashes
/// are removed. The result is stable: normalizing a tag again returns it
/// unchanged.
///
/// # Examples
///
/// ```
/// use periodic_samples::export::normalize_tag;
///
/// assert_eq!(normalize_tag("Da Comprare!"), "da-comprare");
/// assert_eq!(normalize_tag("da   comprare"), "da-comprare");
/// ```
pub fn normalize_tag(label: &str) -> String {
    let lowered = label.to_lowercase();
    SEPARATOR_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
