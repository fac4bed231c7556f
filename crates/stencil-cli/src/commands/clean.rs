//! Implementation of the `stencil clean` command.

use tracing::instrument;

use crate::{commands::task_service, config::AppConfig, error::CliResult, output::OutputManager};

/// Remove generated projects and tool caches from the working directory.
#[instrument(skip_all)]
pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    task_service(&config).clean()?;
    output.success("Cleaned up")?;
    Ok(())
}
