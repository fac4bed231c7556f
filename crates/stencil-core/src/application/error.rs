//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while orchestrating tasks and the post-generation hook.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A filesystem operation failed. During cleanup this is fatal for the
    /// generation run: already-deleted paths stay deleted, the rest are left
    /// in place.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// An external tool could not be started at all (missing binary,
    /// permission problem).
    #[error("failed to start '{command}': {reason}")]
    SpawnFailed { command: String, reason: String },

    /// An external tool ran and exited non-zero. The exit status is
    /// propagated unchanged; `code` is `None` when the tool was terminated
    /// by a signal.
    #[error("command '{command}' failed{}", exit_code_suffix(.code))]
    ExternalTool {
        command: String,
        code: Option<i32>,
    },
}

fn exit_code_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {code}"),
        None => " (terminated by signal)".to_string(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::SpawnFailed { command, .. } => vec![
                format!("Could not start: {}", command),
                "Ensure the tool is installed and in your PATH".into(),
            ],
            Self::ExternalTool { command, .. } => vec![
                format!("External command failed: {}", command),
                "Check the command output above for details".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Filesystem { .. } | Self::SpawnFailed { .. } => ErrorCategory::Internal,
            Self::ExternalTool { .. } => ErrorCategory::External,
        }
    }
}
