//! Application layer: orchestration of validation, cleanup, and task
//! execution through driven ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{PostGenService, TaskService, Toolchain};
