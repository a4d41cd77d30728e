//! mathq-core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for `mathq-setup`,
//! the tool that prepares the directory layout of a Math Question Processor
//! project, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           mathq-cli (CLI)               │
//! │   (Terminal observer, settings, exit)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │             (SetupService)              │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Filesystem, SetupObserver)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    mathq-adapters (Infrastructure)      │
//! │  (LocalFilesystem, MemoryFilesystem)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (FolderName, FolderPlan, Layout, rules) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mathq_core::prelude::*;
//!
//! # fn demo(filesystem: Box<dyn Filesystem>) -> ScaffoldResult<()> {
//! let service = SetupService::new(filesystem, ".", Layout::default())?;
//! let report = service.run(&mut ())?;
//! println!("{} folders ready", report.folders.len());
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ResourceKind, ResourceOutcome, ResourceStatus, SetupEvent, SetupReport, SetupService,
        Step,
        ports::{Filesystem, SetupObserver},
    };
    pub use crate::domain::{
        Configuration, FallbackReason, FolderContext, FolderName, FolderOrigin, FolderPlan,
        ImageTree, Layout, PlanIssue, TreeEntry,
    };
    pub use crate::error::{ScaffoldError, ScaffoldResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
