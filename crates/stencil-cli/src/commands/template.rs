//! Implementation of the `stencil template` command.

use tracing::{info, instrument};

use stencil_core::domain::StructureVariant;

use crate::{
    cli::TemplateArgs, commands::task_service, config::AppConfig, error::CliResult,
    output::OutputManager,
};

/// Generate a new project from the template, non-interactively.
///
/// The engine's own post-generation hook calls back into `stencil hook`
/// inside the generated project, so validation and variant cleanup have
/// already happened by the time this returns successfully.
#[instrument(skip_all, fields(variant = %args.project_structure))]
pub fn execute(args: TemplateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let variant = StructureVariant::from(args.project_structure);

    output.header(&format!("Generating a {variant} project..."))?;
    info!(%variant, "Template generation started");

    task_service(&config).template(variant)?;

    output.success("Project generated!")?;
    Ok(())
}
