//! Operator task definitions and their execution.
//!
//! Each task is a fixed, declarative command sequence wrapped around one
//! external tool (the template engine, the dependency manager, the local CI
//! emulator), except `clean`, which is a fixed list of paths to delete.
//! Tasks run sequentially, never retry, and propagate an external tool's
//! exit status unchanged.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, Filesystem},
    },
    domain::StructureVariant,
    error::StencilResult,
};

/// Generated-output and cache directories removed by `clean`, in order.
pub const CLEAN_PATHS: &[&str] = &[
    "repo_name",
    "simple_uv_repo",
    "advanced_uv_repo",
    ".pytest_cache",
    ".ruff_cache",
];

/// Where the local CI emulator writes its artifacts.
pub const ACTIONS_ARTIFACT_DIR: &str = "/tmp/artifacts";

/// External tool programs and template configuration paths.
///
/// Resolved once at startup from configuration; no runtime probing for
/// which tool happens to be installed.
#[derive(Debug, Clone)]
pub struct Toolchain {
    /// Template engine program.
    pub cookiecutter: String,
    /// Dependency manager program.
    pub uv: String,
    /// Local CI emulator program.
    pub act: String,
    /// Engine config file for the `simple` variant.
    pub simple_config: PathBuf,
    /// Engine config file for the `advanced` variant.
    pub advanced_config: PathBuf,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            cookiecutter: "cookiecutter".into(),
            uv: "uv".into(),
            act: "act".into(),
            simple_config: PathBuf::from("configs/simple_config.yaml"),
            advanced_config: PathBuf::from("configs/advanced_config.yaml"),
        }
    }
}

/// One external command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Display form for logs and error messages.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// The task command set.
pub struct TaskService {
    runner: Box<dyn CommandRunner>,
    filesystem: Box<dyn Filesystem>,
    tools: Toolchain,
}

impl TaskService {
    pub fn new(
        runner: Box<dyn CommandRunner>,
        filesystem: Box<dyn Filesystem>,
        tools: Toolchain,
    ) -> Self {
        Self {
            runner,
            filesystem,
            tools,
        }
    }

    /// Generate a new project from the template, non-interactively.
    #[instrument(skip(self))]
    pub fn template(&self, variant: StructureVariant) -> StencilResult<()> {
        let config = match variant {
            StructureVariant::Simple => &self.tools.simple_config,
            StructureVariant::Advanced => &self.tools.advanced_config,
        };
        let config = config.to_string_lossy();

        self.run_one(Invocation::new(
            &self.tools.cookiecutter,
            &["-f", "--config-file", &config, "--no-input", "--verbose", "."],
        ))
    }

    /// Install project requirements.
    #[instrument(skip(self))]
    pub fn requirements(&self) -> StencilResult<()> {
        self.run_one(Invocation::new(&self.tools.uv, &["sync"]))
    }

    /// Run the project's tests.
    #[instrument(skip(self))]
    pub fn test(&self) -> StencilResult<()> {
        self.run_one(Invocation::new(&self.tools.uv, &["test"]))
    }

    /// Delete generated output and tool caches.
    ///
    /// Existence-checked per path and idempotent: running `clean` twice in a
    /// row succeeds, the second pass removing nothing.
    #[instrument(skip(self))]
    pub fn clean(&self) -> StencilResult<()> {
        for rel in CLEAN_PATHS {
            let path = Path::new(rel);
            if !self.filesystem.exists(path) {
                debug!(path = rel, "Already absent");
                continue;
            }
            self.filesystem.remove_dir_all(path)?;
            info!(path = rel, "Removed");
        }
        Ok(())
    }

    /// Run the CI workflows locally: list the available jobs, then execute
    /// them with artifact output under a fixed temporary path.
    #[instrument(skip(self))]
    pub fn actions(&self) -> StencilResult<()> {
        self.run_one(Invocation::new(&self.tools.act, &["--list"]))?;
        self.run_one(Invocation::new(
            &self.tools.act,
            &["--artifact-server-path", ACTIONS_ARTIFACT_DIR],
        ))
    }

    /// Execute one invocation; a non-zero exit is fatal and carries the
    /// external exit status unchanged.
    fn run_one(&self, invocation: Invocation) -> StencilResult<()> {
        info!(command = %invocation.command_line(), "Running");

        match self.runner.run(&invocation.program, &invocation.args)? {
            Some(0) => Ok(()),
            code => Err(ApplicationError::ExternalTool {
                command: invocation.command_line(),
                code,
            }
            .into()),
        }
    }
}
