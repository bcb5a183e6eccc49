//! Error types for the Zowe client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when invoking the Zowe CLI
///
/// Both variants are terminal for the operation that raised them; nothing at
/// this layer retries.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The invocation mechanism itself failed: the process could not be
    /// spawned, or it exited with a non-zero status
    #[error("command failed: {command}\n{reason}")]
    ExecutionFailed {
        /// The full command line that was attempted
        command: String,
        /// Spawn error or exit status plus captured stderr
        reason: String,
    },

    /// The process exited cleanly but reported text on its error channel
    #[error("command reported diagnostics: {command}\n{stderr}")]
    DiagnosticOutput {
        /// The full command line that was run
        command: String,
        /// The diagnostic text, for operator visibility
        stderr: String,
    },
}

impl ClientError {
    /// Create an execution failure from a command line and reason
    pub fn execution_failed(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ExecutionFailed {
            command: command.into(),
            reason: reason.into(),
        }
    }

    /// Create a diagnostic-output error from a command line and stderr text
    pub fn diagnostic_output(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::DiagnosticOutput {
            command: command.into(),
            stderr: stderr.into(),
        }
    }

    /// Check if this error carries diagnostic output from a clean exit
    pub fn is_diagnostic(&self) -> bool {
        matches!(self, Self::DiagnosticOutput { .. })
    }
}
