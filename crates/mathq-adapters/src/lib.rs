//! Infrastructure adapters for mathq-setup.
//!
//! This crate implements the `Filesystem` port defined in
//! `mathq-core::application::ports`. It contains all filesystem I/O.

pub mod filesystem;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
