//! In-memory filesystem adapter for testing.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use stencil_core::{
    application::{ApplicationError, ports::Filesystem},
    error::StencilResult,
};

/// In-memory filesystem for testing.
///
/// Tracks a set of existing paths and records removals. Individual paths can
/// be armed to fail removal, for exercising the fatal mid-cleanup path.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    paths: HashSet<PathBuf>,
    removed: Vec<PathBuf>,
    failing: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Register an existing path (testing helper).
    pub fn add_path(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.write().unwrap();
        inner.paths.insert(path.into());
    }

    /// Make removal of `path` fail with a permission-style error.
    pub fn fail_removal_at(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.write().unwrap();
        inner.failing.insert(path.into());
    }

    /// Paths removed so far, in removal order.
    pub fn removed(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.removed.clone()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.paths.clear();
        inner.removed.clear();
        inner.failing.clear();
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.paths.contains(path) || inner.paths.iter().any(|p| p.starts_with(path))
    }

    fn remove_dir_all(&self, path: &Path) -> StencilResult<()> {
        let mut inner = self.inner.write().unwrap();

        if inner.failing.contains(path) {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into());
        }

        // Recursive removal: the path itself and everything under it.
        inner.paths.retain(|p| !p.starts_with(path));
        inner.removed.push(path.to_path_buf());
        Ok(())
    }
}
