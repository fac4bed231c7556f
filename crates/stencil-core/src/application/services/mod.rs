//! Application services.

pub mod postgen;
pub mod tasks;

pub use postgen::PostGenService;
pub use tasks::{TaskService, Toolchain};
