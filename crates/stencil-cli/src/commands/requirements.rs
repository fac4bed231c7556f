//! Implementation of the `stencil requirements` command.

use tracing::instrument;

use crate::{commands::task_service, config::AppConfig, error::CliResult, output::OutputManager};

/// Install project requirements through the dependency manager.
#[instrument(skip_all)]
pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    task_service(&config).requirements()?;
    output.success("Requirements installed")?;
    Ok(())
}
