//! Real process execution via duct.

use tracing::debug;

use stencil_core::{
    application::{ApplicationError, ports::CommandRunner},
    error::StencilResult,
};

/// Production command runner.
///
/// Runs the program directly (no shell) with the operator's environment and
/// working directory, streaming the tool's own stdout/stderr through
/// untouched. Exit statuses are reported, never judged; the calling service
/// decides what a non-zero code means.
#[derive(Debug, Clone, Copy)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[String]) -> StencilResult<Option<i32>> {
        debug!(program, ?args, "Spawning");

        // unchecked(): a non-zero exit must come back as a status, not as
        // a duct error.
        let output = duct::cmd(program, args)
            .unchecked()
            .run()
            .map_err(|e| ApplicationError::SpawnFailed {
                command: program.to_string(),
                reason: e.to_string(),
            })?;

        Ok(output.status.code())
    }
}
