//! Document export.
//!
//! Turns merged entities into the interactive HTML periodic table: legend
//! construction, grid layout and final serialization with embedded assets.

pub mod document;
pub mod filter_tag;
pub mod grid_renderer;
pub mod legend;

pub use filter_tag::normalize_tag;
pub use grid_renderer::{render, GridCell, RenderOptions, TableDocument};
pub use legend::build_legend;

use crate::models::element::elements;
use crate::parser::SheetPayload;
use crate::services::merge;

/// Runs merge, legend construction and layout for a validated payload.
pub fn render_sheet(sheet: &SheetPayload, options: &RenderOptions) -> TableDocument {
    let entities = merge(elements(), &sheet.elements, &sheet.label_colors);
    let legend = build_legend(&sheet.label_colors, sheet.legend.as_deref());
    render(&entities, &legend, options)
}
