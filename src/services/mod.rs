//! Service layer.
//!
//! Pipeline stages that sit between the typed models and the document
//! renderer: obtaining the payload, merging it into the element table and
//! writing artifacts to disk.

pub mod fetch;
pub mod merge;
pub mod output;

// Re-export commonly used types and functions
pub use fetch::{decode_response, fetch_payload, load_payload_file, SourceError, SourcePayload};
pub use merge::merge;
pub use output::{dump_json, write_atomic, OutputError};
