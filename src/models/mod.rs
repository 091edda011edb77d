//! Data models for the periodic table geometry and per-element samples.
//!
//! This module contains the core data structures shared by the merge and
//! rendering stages. Models are independent of I/O and presentation.

pub mod element;
pub mod legend;
pub mod periodic_grid;
pub mod rgb;
pub mod sample;

// Re-export all model types
pub use element::{GeometryEntry, GeometryError, ELEMENTS, ELEMENT_COUNT};
pub use legend::{LabelColors, LegendEntry};
pub use periodic_grid::{resolve_auxiliary_rows, resolve_main_grid, AuxiliaryRows, MainGrid};
pub use rgb::RgbColor;
pub use sample::{EnrichedEntity, SampleRecord, SAMPLE_SLOTS};
