// crates/shared-kernel/src/lib.rs
pub use error::{
    DomainError, DomainResult, ErrorContext, InfrastructureError, OrigenError,
    PresentationError, PresentationResult, Result, VersionParseError,
};

pub mod error;
pub mod value_objects;

pub use value_objects::VersionDescriptor;
