//! Post-generation hook service: parameter validation and variant cleanup.
//!
//! The template engine invokes this as its final generation step, with the
//! substituted values and the freshly generated project root. Either every
//! parameter validates and the variant cleanup runs, or the first violated
//! rule aborts the run before any path is touched. Rollback of the partially
//! generated tree is the engine's business, not this service's.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::ports::{Filesystem, Reporter},
    domain::{GenerationParams, StructureVariant},
    error::{StencilError, StencilResult},
};

/// Relative paths removed from a `simple`-variant project, in order.
///
/// Removal is existence-checked per path, so a template that never produced
/// one of these is fine.
pub const SIMPLE_CLEANUP_PATHS: &[&str] = &[".github", ".devcontainer", "dockerfiles", "docs"];

/// Parameter validator and post-generation cleaner.
pub struct PostGenService {
    filesystem: Box<dyn Filesystem>,
    reporter: Box<dyn Reporter>,
}

impl PostGenService {
    pub fn new(filesystem: Box<dyn Filesystem>, reporter: Box<dyn Reporter>) -> Self {
        Self {
            filesystem,
            reporter,
        }
    }

    /// Run the hook against a generated project root.
    ///
    /// Reports the three inputs, validates them in order, then removes the
    /// variant-specific paths for `simple` projects. A failed removal is
    /// fatal: already-deleted paths stay deleted, the rest are left alone.
    #[instrument(skip_all, fields(project = %params.project_name, root = %project_root.display()))]
    pub fn run(&self, params: &GenerationParams, project_root: &Path) -> StencilResult<()> {
        self.reporter
            .info(&format!("Project name: {}", params.project_name));
        self.reporter
            .info(&format!("Python version: {}", params.python_version));
        self.reporter
            .info(&format!("Project structure: {}", params.structure));

        params.validate().map_err(StencilError::Domain)?;

        if params.structure == StructureVariant::Simple {
            self.remove_advanced_extras(project_root)?;
        }

        debug!("Post-generation hook completed");
        Ok(())
    }

    /// Delete the directories the simple variant does not keep.
    fn remove_advanced_extras(&self, project_root: &Path) -> StencilResult<()> {
        self.reporter
            .info("Removing unnecessary files and folders for the simple template.");

        for rel in SIMPLE_CLEANUP_PATHS {
            let path = project_root.join(rel);
            if !self.filesystem.exists(&path) {
                debug!(path = %path.display(), "Cleanup path absent, skipping");
                continue;
            }
            self.filesystem.remove_dir_all(&path)?;
            debug!(path = %path.display(), "Removed");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use std::{
        collections::HashSet,
        path::PathBuf,
        sync::{Arc, Mutex},
    };

    /// Minimal in-crate test doubles; the full-featured adapters live in
    /// `stencil-adapters` and are exercised by that crate's tests.
    #[derive(Clone, Default)]
    struct StubFs {
        present: Arc<Mutex<HashSet<PathBuf>>>,
        removed: Arc<Mutex<Vec<PathBuf>>>,
        fail_on: Arc<Mutex<HashSet<PathBuf>>>,
    }

    impl StubFs {
        fn with_paths(paths: &[&str]) -> Self {
            let fs = Self::default();
            for p in paths {
                fs.present.lock().unwrap().insert(PathBuf::from(p));
            }
            fs
        }

        fn fail_removal_at(&self, path: &str) {
            self.fail_on.lock().unwrap().insert(PathBuf::from(path));
        }

        fn removed(&self) -> Vec<PathBuf> {
            self.removed.lock().unwrap().clone()
        }
    }

    impl Filesystem for StubFs {
        fn exists(&self, path: &Path) -> bool {
            self.present.lock().unwrap().contains(path)
        }

        fn remove_dir_all(&self, path: &Path) -> StencilResult<()> {
            if self.fail_on.lock().unwrap().contains(path) {
                return Err(ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "permission denied".into(),
                }
                .into());
            }
            self.present.lock().unwrap().remove(path);
            self.removed.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct StubReporter {
        lines: Arc<Mutex<Vec<String>>>,
    }

    impl StubReporter {
        fn lines(&self) -> Vec<String> {
            self.lines.lock().unwrap().clone()
        }
    }

    impl Reporter for StubReporter {
        fn info(&self, message: &str) {
            self.lines.lock().unwrap().push(message.to_string());
        }
    }

    fn service(fs: &StubFs, reporter: &StubReporter) -> PostGenService {
        PostGenService::new(Box::new(fs.clone()), Box::new(reporter.clone()))
    }

    fn simple_params() -> GenerationParams {
        GenerationParams::new("my_app", "3.11", StructureVariant::Simple)
    }

    #[test]
    fn simple_variant_removes_all_present_cleanup_paths() {
        let fs = StubFs::with_paths(&["/p/.github", "/p/.devcontainer", "/p/dockerfiles", "/p/docs"]);
        let reporter = StubReporter::default();

        service(&fs, &reporter)
            .run(&simple_params(), Path::new("/p"))
            .unwrap();

        for rel in SIMPLE_CLEANUP_PATHS {
            assert!(!fs.exists(&Path::new("/p").join(rel)), "{rel} should be gone");
        }
        assert_eq!(fs.removed().len(), 4);
    }

    #[test]
    fn simple_variant_skips_absent_paths_without_error() {
        let fs = StubFs::with_paths(&["/p/docs"]);
        let reporter = StubReporter::default();

        service(&fs, &reporter)
            .run(&simple_params(), Path::new("/p"))
            .unwrap();

        assert_eq!(fs.removed(), vec![PathBuf::from("/p/docs")]);
    }

    #[test]
    fn advanced_variant_touches_nothing() {
        let fs = StubFs::with_paths(&["/p/.github", "/p/docs"]);
        let reporter = StubReporter::default();
        let params = GenerationParams::new("my_app", "3.11", StructureVariant::Advanced);

        service(&fs, &reporter).run(&params, Path::new("/p")).unwrap();

        assert!(fs.removed().is_empty());
        assert!(fs.exists(Path::new("/p/.github")));
        assert!(fs.exists(Path::new("/p/docs")));
    }

    #[test]
    fn inputs_are_reported_before_validation_fails() {
        let fs = StubFs::default();
        let reporter = StubReporter::default();
        let params = GenerationParams::new("My-App", "3.11", StructureVariant::Simple);

        let err = service(&fs, &reporter)
            .run(&params, Path::new("/p"))
            .unwrap_err();

        assert!(matches!(
            err,
            StencilError::Domain(crate::domain::DomainError::InvalidName { .. })
        ));
        let lines = reporter.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("My-App"));
        assert!(lines[1].contains("3.11"));
        assert!(lines[2].contains("simple"));
    }

    #[test]
    fn validation_failure_prevents_cleanup() {
        let fs = StubFs::with_paths(&["/p/.github"]);
        let reporter = StubReporter::default();
        let params = GenerationParams::new("my_app", "3.14", StructureVariant::Simple);

        assert!(service(&fs, &reporter).run(&params, Path::new("/p")).is_err());
        assert!(fs.removed().is_empty());
        assert!(fs.exists(Path::new("/p/.github")));
    }

    #[test]
    fn mid_cleanup_failure_halts_remaining_deletions() {
        let fs = StubFs::with_paths(&["/p/.github", "/p/.devcontainer", "/p/dockerfiles"]);
        fs.fail_removal_at("/p/.devcontainer");
        let reporter = StubReporter::default();

        let err = service(&fs, &reporter)
            .run(&simple_params(), Path::new("/p"))
            .unwrap_err();

        assert!(matches!(
            err,
            StencilError::Application(ApplicationError::Filesystem { .. })
        ));
        // .github went first and stays deleted; dockerfiles was never reached.
        assert_eq!(fs.removed(), vec![PathBuf::from("/p/.github")]);
        assert!(fs.exists(Path::new("/p/dockerfiles")));
    }

    #[test]
    fn end_to_end_happy_path_reports_and_cleans() {
        let fs = StubFs::with_paths(&["/p/.github", "/p/.devcontainer", "/p/dockerfiles", "/p/docs"]);
        let reporter = StubReporter::default();

        service(&fs, &reporter)
            .run(&simple_params(), Path::new("/p"))
            .unwrap();

        let lines = reporter.lines();
        assert!(lines.iter().any(|l| l.contains("my_app")));
        assert!(lines.iter().any(|l| l.contains("3.11")));
        assert!(lines.iter().any(|l| l.contains("simple")));
        assert_eq!(fs.removed().len(), 4);
    }
}
