//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stencil-adapters` crate provides implementations.

use std::path::Path;

use crate::error::StencilResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stencil_adapters::filesystem::LocalFilesystem` (production)
/// - `stencil_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Only the operations the cleanup sweeps need: existence checks and
/// recursive removal. Callers check existence before removing, which is
/// what makes the sweeps idempotent.
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory (or file) and all contents.
    fn remove_dir_all(&self, path: &Path) -> StencilResult<()>;
}

/// Port for external command execution.
///
/// Implemented by:
/// - `stencil_adapters::runner::ProcessRunner` (production, via duct)
/// - `stencil_adapters::runner::RecordingRunner` (testing)
///
/// ## Design Notes
///
/// - argv vectors, never a shell string: nothing to quote, nothing to inject
/// - the tool's own stdout/stderr stream straight through to the operator
/// - a non-zero exit is NOT an `Err` at this level; the service decides that
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, blocking until it exits.
    ///
    /// Returns the exit code, or `None` if the process was terminated by a
    /// signal. `Err` means the process could not be started at all.
    fn run(&self, program: &str, args: &[String]) -> StencilResult<Option<i32>>;
}

/// Port for operator-visible reporting from the post-generation hook.
///
/// Implemented by:
/// - `stencil_adapters::reporter::TracingReporter` (production)
/// - `stencil_adapters::reporter::BufferReporter` (testing)
///
/// Injected rather than reaching for a process-global logger so tests can
/// capture what the hook reported.
pub trait Reporter: Send + Sync {
    /// Emit an informational message.
    fn info(&self, message: &str);
}
