// Training Registry - Core Library
// Exposes the consistency engine for use in the command shell and tests

pub mod entities;
pub mod error;
pub mod registry;
pub mod selection;

// Re-export commonly used types
pub use entities::{
    Subject, Course, Batch, Student,
    parse_timestamp,
};
pub use error::RegistryError;
pub use registry::{Registry, RegistryCounts};
pub use selection::SubjectSelection;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
