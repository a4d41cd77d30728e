// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for mathq-setup.
//!
//! This module contains pure layout logic with no filesystem access.
//! All I/O is handled via ports (traits) defined in the application layer.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: Configuration arrives as a string, rules leave as a string
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod common;
pub mod entities;
pub mod error;

mod validation;

// Re-exports for convenience
pub use common::FolderName;
pub use entities::{
    Configuration, FALLBACK_FOLDERS, FallbackReason, FolderContext, FolderOrigin, FolderPlan,
    IgnoreRules, IgnoreSection, ImageTree, Layout, PlanIssue, TreeEntry,
};
pub use error::{DomainError, ErrorCategory, NameViolation};
pub use validation::DomainValidator;
