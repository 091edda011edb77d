//! Periodic Samples Library
//!
//! This library turns a sample-tracking spreadsheet into an interactive
//! periodic table: it validates the sheet payload, merges it into the
//! built-in element table and renders a self-contained HTML document.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod parser;
pub mod services;

// Re-export commonly used types
pub use config::Config;
pub use export::{render_sheet, RenderOptions, TableDocument};
pub use parser::SheetPayload;
