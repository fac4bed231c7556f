//! One thin handler per subcommand.
//!
//! Handlers translate CLI arguments into core service calls and display
//! results.  No business logic lives here.

pub mod actions;
pub mod clean;
pub mod completions;
pub mod hook;
pub mod requirements;
pub mod template;

use stencil_adapters::{LocalFilesystem, ProcessRunner};
use stencil_core::application::TaskService;

use crate::config::AppConfig;

/// Wire the production task service: real process execution, real
/// filesystem, tool names from configuration.
pub(crate) fn task_service(config: &AppConfig) -> TaskService {
    TaskService::new(
        Box::new(ProcessRunner::new()),
        Box::new(LocalFilesystem::new()),
        config.toolchain(),
    )
}
