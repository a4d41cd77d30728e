//! Application layer for mathq-setup.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (SetupService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Report**: Progress events and the run summary
//! - **Errors**: Application-specific error types
//!
//! The application layer sequences the steps; layout rules live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod report;
pub mod services;

pub use services::SetupService;

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, SetupObserver};

pub use error::ApplicationError;
pub use report::{
    ResourceKind, ResourceOutcome, ResourceStatus, SetupEvent, SetupReport, Step,
};
