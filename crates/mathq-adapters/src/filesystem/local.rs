//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use mathq_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::TreeEntry,
    error::{ScaffoldError, ScaffoldResult},
};
use tracing::trace;
use walkdir::WalkDir;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn walk(&self, root: &Path) -> ScaffoldResult<Vec<TreeEntry>> {
        let mut entries = Vec::new();

        for walk_entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
            let walk_entry = walk_entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                ScaffoldError::from(ApplicationError::FilesystemError {
                    path,
                    reason: format!("Failed to walk directory: {e}"),
                })
            })?;

            let rel = walk_entry.path().strip_prefix(root).map_err(|_| {
                ScaffoldError::Internal {
                    message: format!(
                        "failed to relativise '{}' against '{}'",
                        walk_entry.path().display(),
                        root.display()
                    ),
                }
            })?;

            trace!(path = %rel.display(), "walked");
            entries.push(TreeEntry {
                path: rel.to_path_buf(),
                is_dir: walk_entry.file_type().is_dir(),
            });
        }

        Ok(entries)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ScaffoldError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
