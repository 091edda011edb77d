//! Shared CLI error handling.

use std::fmt;

/// Process exit codes used by all commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Invalid arguments or configuration
    Validation = 1,
    /// File system failure
    Io = 2,
    /// Payload could not be fetched or was malformed
    Fetch = 3,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process terminates with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Invalid arguments or configuration.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// File system failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::Io,
            message: message.into(),
        }
    }

    /// Fetch-stage failure (transport, status, JSON or schema).
    pub fn fetch(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::Fetch,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI handlers.
pub type CliResult<T> = Result<T, CliError>;
