pub mod configuration;
pub mod folder_plan;
pub mod ignore_rules;
pub mod layout;
pub mod tree;

pub use configuration::{Configuration, FolderContext};
pub use folder_plan::{FALLBACK_FOLDERS, FallbackReason, FolderOrigin, FolderPlan, PlanIssue};
pub use ignore_rules::{IgnoreRules, IgnoreSection};
pub use layout::Layout;
pub use tree::{ImageTree, TreeEntry};
