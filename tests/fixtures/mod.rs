//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the periodic-samples binary
pub fn periodic_samples_bin() -> &'static str {
    env!("CARGO_BIN_EXE_periodic-samples")
}

/// Creates a Command with an isolated config directory.
///
/// Pass the same directory to several commands to share config between them.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(periodic_samples_bin());
    cmd.env("PERIODIC_SAMPLES_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs a command and returns its output.
pub fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("Failed to execute command")
}

/// Payload with one hydrogen sample, an explicit legend and label colors.
pub fn payload_basic() -> Value {
    json!({
        "elements": [
            {
                "row": 2,
                "symbol": "H",
                "samples": [
                    {"value": "A1", "state": "in arrivo", "color": ""}
                ]
            },
            {
                "row": 3,
                "symbol": "Fe",
                "samples": [
                    {"value": "B2", "state": "da comprare", "color": ""},
                    {"value": 17, "state": null, "color": null}
                ]
            }
        ],
        "legend": {"#00ff00": "in arrivo", "#ff0000": "da comprare", "#ffffff": ""},
        "labelColors": {"in arrivo": "#00ff00", "da comprare": "#ff0000"}
    })
}

/// Payload with no elements and no legend.
pub fn payload_empty() -> Value {
    json!({"elements": [], "legend": {}, "labelColors": {}})
}

/// Writes a JSON payload into a fresh temp directory.
///
/// The TempDir must be kept alive for the file to exist.
pub fn create_temp_payload_file(payload: &Value) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("payload.json");
    let content = serde_json::to_string_pretty(payload).expect("Failed to serialize payload");
    fs::write(&path, content).expect("Failed to write payload file");
    (path, temp_dir)
}

/// Writes arbitrary text as a payload file.
pub fn create_temp_text_file(text: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("payload.json");
    fs::write(&path, text).expect("Failed to write payload file");
    (path, temp_dir)
}

/// Creates an empty config directory.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp config dir")
}

/// Reads a file to string, panicking with the path on failure.
pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()))
}
