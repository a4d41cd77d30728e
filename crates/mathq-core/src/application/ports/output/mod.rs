//! Driven (output) ports - implemented by infrastructure or the CLI.
//!
//! These traits define what the setup use case needs from the outside.
//! The `mathq-adapters` crate provides the filesystems; the CLI provides
//! the terminal observer.

use std::path::Path;

use crate::application::report::SetupEvent;
use crate::domain::TreeEntry;
use crate::error::ScaffoldResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `mathq_adapters::filesystem::LocalFilesystem` (production)
/// - `mathq_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths handed to the port are already joined onto the project root.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;

    /// Read a whole UTF-8 file.
    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String>;

    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Every entry below `root`, relative to it, root itself excluded.
    fn walk(&self, root: &Path) -> ScaffoldResult<Vec<TreeEntry>>;
}

/// Port for progress reporting while the setup runs.
///
/// Events arrive in step order. Observers must not fail the run.
pub trait SetupObserver {
    fn on_event(&mut self, event: &SetupEvent);
}

/// Discards every event.
impl SetupObserver for () {
    fn on_event(&mut self, _event: &SetupEvent) {}
}

/// Records every event, in order.
impl SetupObserver for Vec<SetupEvent> {
    fn on_event(&mut self, event: &SetupEvent) {
        self.push(event.clone());
    }
}
