//! Service-level tests: core services wired to the adapter implementations.

use std::path::{Path, PathBuf};

use stencil_adapters::{BufferReporter, LocalFilesystem, MemoryFilesystem, RecordingRunner};
use stencil_core::{
    application::{PostGenService, TaskService, Toolchain, services::postgen::SIMPLE_CLEANUP_PATHS},
    domain::{GenerationParams, StructureVariant},
    prelude::Filesystem,
};

fn hook(fs: &MemoryFilesystem, reporter: &BufferReporter) -> PostGenService {
    PostGenService::new(Box::new(fs.clone()), Box::new(reporter.clone()))
}

#[test]
fn simple_generation_reports_then_cleans() {
    let fs = MemoryFilesystem::new();
    for rel in SIMPLE_CLEANUP_PATHS {
        fs.add_path(Path::new("/work/my_app").join(rel));
    }
    let reporter = BufferReporter::new();

    let params = GenerationParams::new("my_app", "3.11", StructureVariant::Simple);
    hook(&fs, &reporter)
        .run(&params, Path::new("/work/my_app"))
        .unwrap();

    let lines = reporter.lines();
    assert_eq!(lines[0], "Project name: my_app");
    assert_eq!(lines[1], "Python version: 3.11");
    assert_eq!(lines[2], "Project structure: simple");

    for rel in SIMPLE_CLEANUP_PATHS {
        assert!(!fs.exists(&Path::new("/work/my_app").join(rel)));
    }
}

#[test]
fn advanced_generation_keeps_everything() {
    let fs = MemoryFilesystem::new();
    fs.add_path("/work/my_app/.github/workflows/ci.yaml");
    fs.add_path("/work/my_app/docs");
    let reporter = BufferReporter::new();

    let params = GenerationParams::new("my_app", "3.10", StructureVariant::Advanced);
    hook(&fs, &reporter)
        .run(&params, Path::new("/work/my_app"))
        .unwrap();

    assert!(fs.removed().is_empty());
    assert!(fs.exists(Path::new("/work/my_app/.github")));
}

#[test]
fn failed_removal_aborts_and_leaves_remainder() {
    let fs = MemoryFilesystem::new();
    fs.add_path("/work/app/.github");
    fs.add_path("/work/app/dockerfiles");
    fs.fail_removal_at("/work/app/dockerfiles");
    let reporter = BufferReporter::new();

    let params = GenerationParams::new("app", "3.12", StructureVariant::Simple);
    let result = hook(&fs, &reporter).run(&params, Path::new("/work/app"));

    assert!(result.is_err());
    assert_eq!(fs.removed(), vec![PathBuf::from("/work/app/.github")]);
    assert!(fs.exists(Path::new("/work/app/dockerfiles")));
}

#[test]
fn hook_against_real_filesystem() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    std::fs::create_dir_all(root.join(".github/workflows")).unwrap();
    std::fs::create_dir_all(root.join("docs")).unwrap();
    std::fs::create_dir_all(root.join("src")).unwrap();

    let reporter = BufferReporter::new();
    let service = PostGenService::new(Box::new(LocalFilesystem::new()), Box::new(reporter.clone()));

    let params = GenerationParams::new("my_app", "3.13", StructureVariant::Simple);
    service.run(&params, root).unwrap();

    assert!(!root.join(".github").exists());
    assert!(!root.join("docs").exists());
    // Everything outside the cleanup set survives.
    assert!(root.join("src").exists());
    assert_eq!(reporter.lines().len(), 4);
}

#[test]
fn task_template_goes_through_the_runner() {
    let runner = RecordingRunner::new();
    let service = TaskService::new(
        Box::new(runner.clone()),
        Box::new(MemoryFilesystem::new()),
        Toolchain::default(),
    );

    service.template(StructureVariant::Simple).unwrap();

    let calls = runner.invocations();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "cookiecutter");
    assert!(calls[0].1.contains(&"--no-input".to_string()));
}

#[test]
fn task_clean_sweeps_real_directories() {
    let temp = tempfile::tempdir().unwrap();
    let old_cwd = std::env::current_dir().unwrap();
    std::env::set_current_dir(temp.path()).unwrap();

    std::fs::create_dir_all("simple_uv_repo/src").unwrap();
    std::fs::create_dir_all(".pytest_cache").unwrap();

    let service = TaskService::new(
        Box::new(RecordingRunner::new()),
        Box::new(LocalFilesystem::new()),
        Toolchain::default(),
    );
    let result = service.clean();

    // Restore before asserting so a failure doesn't poison other tests.
    std::env::set_current_dir(old_cwd).unwrap();
    result.unwrap();

    assert!(!temp.path().join("simple_uv_repo").exists());
    assert!(!temp.path().join(".pytest_cache").exists());
}
