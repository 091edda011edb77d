//! Output file writes.
//!
//! Files are written to a temporary sibling and renamed into place, so a
//! failed run never leaves a truncated document behind.

use serde_json::Value;
use std::fs::{self, Permissions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::info;

/// Failure writing an output artifact.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The file could not be written or moved into place.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The payload could not be serialized.
    #[error("failed to encode JSON: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Atomically replaces `path` with `contents`.
///
/// The parent directory must exist. An existing file keeps its permissions;
/// a new file is created world-readable (`0644` on Unix).
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), OutputError> {
    let write_error = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut tmp = NamedTempFile::new_in(&parent).map_err(write_error)?;
    tmp.write_all(contents.as_bytes()).map_err(write_error)?;
    tmp.flush().map_err(write_error)?;
    if let Some(permissions) = target_permissions(path) {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(write_error)?;
    }
    tmp.persist(path).map_err(|e| write_error(e.error))?;

    info!(path = %path.display(), bytes = contents.len(), "Wrote file");
    Ok(())
}

/// Permissions the written file should end up with.
fn target_permissions(path: &Path) -> Option<Permissions> {
    match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}

/// Writes the untouched payload as pretty-printed JSON.
///
/// Key order and non-ASCII text are preserved as received.
pub fn dump_json(path: &Path, raw: &Value) -> Result<(), OutputError> {
    let text = serde_json::to_string_pretty(raw)?;
    write_atomic(path, &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_creates_and_replaces() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("table.html");

        write_atomic(&path, "first").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first");

        write_atomic(&path, "second").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");

        // No temporary files left behind
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_keeps_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let mode = |path: &Path| std::fs::metadata(path).unwrap().permissions().mode() & 0o777;

        let fresh = dir.path().join("fresh.html");
        write_atomic(&fresh, "new").unwrap();
        assert_eq!(mode(&fresh), 0o644);

        let shared = dir.path().join("table.html");
        std::fs::write(&shared, "old").unwrap();
        std::fs::set_permissions(&shared, Permissions::from_mode(0o664)).unwrap();
        write_atomic(&shared, "replaced").unwrap();
        assert_eq!(mode(&shared), 0o664);
        assert_eq!(std::fs::read_to_string(&shared).unwrap(), "replaced");
    }

    #[test]
    fn test_write_atomic_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("table.html");

        let err = write_atomic(&path, "x").unwrap_err();
        assert!(matches!(err, OutputError::Write { .. }));
        assert!(err.to_string().contains("table.html"));
        assert!(!path.exists());
    }

    #[test]
    fn test_dump_json_preserves_order_and_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dump.json");
        let raw = json!({"zeta": 1, "alpha": "già", "elements": []});

        dump_json(&path, &raw).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();

        let zeta = text.find("zeta").unwrap();
        let alpha = text.find("alpha").unwrap();
        assert!(zeta < alpha);
        assert!(text.contains("già"));
        assert!(text.contains("\n  \"zeta\": 1"));
    }
}
