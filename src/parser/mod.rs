//! Parsers for external input.
//!
//! Currently this covers the JSON payload served by the sample-tracking sheet.

pub mod payload;

pub use payload::{PayloadError, SampleInput, SheetPayload, SheetRow};
