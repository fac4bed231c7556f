//! Implementation of the `stencil actions` command.

use tracing::instrument;

use stencil_core::application::services::tasks::ACTIONS_ARTIFACT_DIR;

use crate::{commands::task_service, config::AppConfig, error::CliResult, output::OutputManager};

/// Run the CI workflows locally: list the jobs, then execute them.
#[instrument(skip_all)]
pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    output.header("Running CI workflows locally...")?;
    output.info(&format!("Artifacts will be written to {ACTIONS_ARTIFACT_DIR}"))?;
    task_service(&config).actions()?;
    output.success("Workflows completed")?;
    Ok(())
}
