//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use stencil_core::{application::ports::Filesystem, error::StencilResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> StencilResult<()> {
        // Files occasionally end up on the cleanup lists too (the ports
        // treat "path" uniformly), so fall back to remove_file for them.
        let result = if path.is_dir() {
            std::fs::remove_dir_all(path)
        } else {
            std::fs::remove_file(path)
        };
        result.map_err(|e| map_io_error(path, e, "remove"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> stencil_core::error::StencilError {
    use stencil_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("failed to {}: {}", operation, e),
    }
    .into()
}
