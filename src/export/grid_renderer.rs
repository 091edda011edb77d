//! Grid renderer for the periodic table document.
//!
//! Lays merged entities out on a fixed 10 x 18 grid:
//!
//! ```text
//! rows 1-7   main block (periods 1-7, groups 1-18)
//! row  8     spacer
//! row  9     lanthanides, columns 4-18
//! row  10    actinides, columns 4-18
//! ```
//!
//! The result is a [`TableDocument`], a structured description of every
//! cell that [`TableDocument::to_html`] serializes.

use super::filter_tag::normalize_tag;
use crate::constants::{DEFAULT_EMPTY_COLOR, DEFAULT_TITLE};
use crate::models::element::GROUP_COUNT;
use crate::models::{
    resolve_auxiliary_rows, resolve_main_grid, EnrichedEntity, LegendEntry, RgbColor,
    SampleRecord, SAMPLE_SLOTS,
};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Number of rows in the rendered grid.
pub const GRID_ROWS: u8 = 10;
/// Number of columns in the rendered grid.
pub const GRID_COLUMNS: u8 = GROUP_COUNT;
/// Row number of the spacer between the main block and the auxiliary rows.
pub const SPACER_ROW: u8 = 8;
/// Row number of the first auxiliary row.
pub const FIRST_AUXILIARY_ROW: u8 = 9;

/// Separator between state and value in a quarter tooltip.
const QUARTER_TIP_SEPARATOR: &str = " | ";
/// Separator between state and value in a cell tooltip line.
const CELL_TIP_SEPARATOR: &str = "; ";

/// Rendering options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Document title, also used as page heading
    pub title: String,
    /// Background for quarters without a usable color
    pub empty_color: RgbColor,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            empty_color: DEFAULT_EMPTY_COLOR,
        }
    }
}

/// One position of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCell {
    /// Nothing to show at this position
    Empty,
    /// Half-height separator of the spacer row
    Spacer,
    /// A populated element cell
    Element(ElementCell),
}

/// A populated cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementCell {
    /// Atomic number
    pub number: u8,
    /// Element symbol
    pub symbol: String,
    /// Aggregate tooltip: name, number and one line per non-empty sample
    pub tooltip: String,
    /// Sample sub-cells in reading order (top-left, top-right, bottom-left, bottom-right)
    pub quarters: [Quarter; SAMPLE_SLOTS],
}

/// One sample sub-cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quarter {
    /// Visible 1-based slot index
    pub index: usize,
    /// CSS background color, always a valid hex color
    pub background: String,
    /// Normalized state tag, empty for unclassified samples
    pub filter_tag: String,
    /// Hover text built from state and value
    pub tooltip: String,
}

/// Immutable per-element data embedded for the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotEntry {
    /// Atomic number
    pub z: u8,
    /// Element symbol
    pub symbol: String,
    /// Display name
    pub name: String,
    /// Exactly four samples
    pub samples: Vec<SnapshotSample>,
}

/// Sample data shown in the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotSample {
    /// State label
    pub state: String,
    /// Cell value
    pub value: String,
}

/// Structured, fully resolved document ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDocument {
    /// Page title
    pub title: String,
    /// `GRID_ROWS` rows of `GRID_COLUMNS` cells
    pub rows: Vec<Vec<GridCell>>,
    /// Legend items with display-safe colors
    pub legend: Vec<LegendEntry>,
    /// Detail-view data keyed by atomic number
    pub snapshot: BTreeMap<u8, SnapshotEntry>,
}

impl TableDocument {
    /// Iterates over the populated cells in row-major order.
    pub fn element_cells(&self) -> impl Iterator<Item = &ElementCell> {
        self.rows.iter().flatten().filter_map(|cell| match cell {
            GridCell::Element(element) => Some(element),
            _ => None,
        })
    }
}

/// Renders merged entities and a legend into a [`TableDocument`].
///
/// Entities are looked up by atomic number; a table position whose entity is
/// missing from `entities` renders as an empty cell.
pub fn render(
    entities: &[EnrichedEntity],
    legend: &[LegendEntry],
    options: &RenderOptions,
) -> TableDocument {
    let by_number: HashMap<u8, &EnrichedEntity> =
        entities.iter().map(|e| (e.number, e)).collect();
    let main = resolve_main_grid();
    let auxiliary = resolve_auxiliary_rows();
    let fallback = options.empty_color.to_hex();

    let rows: Vec<Vec<GridCell>> = (1..=GRID_ROWS)
        .map(|row| {
            (1..=GRID_COLUMNS)
                .map(|column| {
                    let number = match row {
                        SPACER_ROW => return GridCell::Spacer,
                        r if r < SPACER_ROW => main.get(r, column),
                        r => auxiliary.at(usize::from(r - FIRST_AUXILIARY_ROW), column),
                    };
                    number
                        .and_then(|n| by_number.get(&n))
                        .map_or(GridCell::Empty, |entity| {
                            GridCell::Element(element_cell(entity, &fallback))
                        })
                })
                .collect()
        })
        .collect();

    let legend: Vec<LegendEntry> = legend
        .iter()
        .map(|entry| LegendEntry {
            color: css_color(&entry.color).unwrap_or_else(|| fallback.clone()),
            ..entry.clone()
        })
        .collect();

    let snapshot: BTreeMap<u8, SnapshotEntry> = entities
        .iter()
        .map(|entity| (entity.number, snapshot_entry(entity)))
        .collect();

    let document = TableDocument {
        title: options.title.clone(),
        rows,
        legend,
        snapshot,
    };

    debug!(
        cells = document.element_cells().count(),
        legend = document.legend.len(),
        "Rendered table grid"
    );
    document
}

fn element_cell(entity: &EnrichedEntity, fallback: &str) -> ElementCell {
    let quarters = std::array::from_fn(|slot| quarter(&entity.samples[slot], slot, fallback));

    ElementCell {
        number: entity.number,
        symbol: entity.symbol.to_string(),
        tooltip: cell_tooltip(entity),
        quarters,
    }
}

fn quarter(sample: &SampleRecord, slot: usize, fallback: &str) -> Quarter {
    Quarter {
        index: slot + 1,
        background: css_color(&sample.color).unwrap_or_else(|| fallback.to_string()),
        filter_tag: normalize_tag(&sample.state),
        tooltip: sample.summary(QUARTER_TIP_SEPARATOR),
    }
}

/// Builds `Name\nZ=n` followed by `i: state; value` for each non-empty sample.
fn cell_tooltip(entity: &EnrichedEntity) -> String {
    let mut lines = vec![entity.name.to_string(), format!("Z={}", entity.number)];
    for (idx, sample) in entity.samples.iter().enumerate() {
        let summary = sample.summary(CELL_TIP_SEPARATOR);
        if !summary.is_empty() {
            lines.push(format!("{}: {}", idx + 1, summary));
        }
    }
    lines.join("\n")
}

fn snapshot_entry(entity: &EnrichedEntity) -> SnapshotEntry {
    SnapshotEntry {
        z: entity.number,
        symbol: entity.symbol.to_string(),
        name: entity.name.to_string(),
        samples: entity
            .samples
            .iter()
            .map(|s| SnapshotSample {
                state: s.state.clone(),
                value: s.value.clone(),
            })
            .collect(),
    }
}

/// Returns the trimmed color if it is a valid hex color.
fn css_color(color: &str) -> Option<String> {
    let color = color.trim();
    RgbColor::from_hex(color).ok().map(|_| color.to_string())
}
