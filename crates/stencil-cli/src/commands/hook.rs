//! Implementation of the `stencil hook` command (the post-generation hook).
//!
//! The template ships a post-generation script that invokes this command
//! with the substituted variables, from inside the freshly generated
//! project root:
//!
//! ```text
//! stencil hook \
//!   --project-name {{ project_name }} \
//!   --python-version {{ python_version }} \
//!   --project-structure {{ project_structure }}
//! ```
//!
//! A non-zero exit is the only failure channel; the engine surfaces it and
//! marks the generation as failed.

use tracing::instrument;

use stencil_adapters::{LocalFilesystem, TracingReporter};
use stencil_core::{application::PostGenService, domain::GenerationParams};

use crate::{cli::HookArgs, error::CliResult, output::OutputManager};

/// Validate the substituted values, then trim simple-variant projects.
#[instrument(skip_all, fields(project = %args.project_name))]
pub fn execute(args: HookArgs, output: OutputManager) -> CliResult<()> {
    let params = GenerationParams::new(
        args.project_name,
        args.python_version,
        args.project_structure.into(),
    );

    // The engine runs the hook inside the generated project.
    let project_root = std::env::current_dir()?;

    let service = PostGenService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(TracingReporter::new()),
    );
    service.run(&params, &project_root)?;

    output.success(&format!("Project '{}' validated", params.project_name))?;
    Ok(())
}
