//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the built-in defaults.

use crate::models::RgbColor;

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Periodic Samples";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "periodic-samples";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "PeriodicSamples";

/// Config file name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "PERIODIC_SAMPLES_CONFIG_DIR";

/// Default output file.
pub const DEFAULT_OUTPUT_PATH: &str = "periodic_table.html";

/// Default document title.
pub const DEFAULT_TITLE: &str = "Periodic Table - Sample tracker";

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Neutral background for quarters without a usable color (`#eaeaea`).
pub const DEFAULT_EMPTY_COLOR: RgbColor = RgbColor::new(0xea, 0xea, 0xea);
