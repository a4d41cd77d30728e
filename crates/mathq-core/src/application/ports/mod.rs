//! Application ports (traits) for external dependencies.
//!
//! Ports define the interfaces the setup use case needs from the outside
//! world. Adapters in `mathq-adapters` and the CLI implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented outside
//!   - `Filesystem`: File and directory operations
//!   - `SetupObserver`: Progress events

pub mod output;

pub use output::{Filesystem, SetupObserver};

#[cfg(test)]
pub use output::MockFilesystem;
