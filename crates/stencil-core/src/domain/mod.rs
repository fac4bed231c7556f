//! Domain layer: generation parameters and their validation rules.
//!
//! Pure logic, no I/O. Everything here is a transient in-memory value that
//! lives for a single hook or task invocation.

pub mod error;
pub mod keywords;
pub mod params;
pub mod version;

pub use error::{DomainError, ErrorCategory};
pub use params::{GenerationParams, StructureVariant};
pub use version::PyVersion;
