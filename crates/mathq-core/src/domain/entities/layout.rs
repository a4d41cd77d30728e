use std::path::{Component, Path, PathBuf};

use crate::domain::error::DomainError;

/// Where each scaffolded resource lives, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub config_file: PathBuf,
    pub images_root: PathBuf,
    pub output_dir: PathBuf,
    pub ignore_file: PathBuf,
    pub workflow_dir: PathBuf,
    /// File name expected inside `workflow_dir`.
    pub workflow_file: PathBuf,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            config_file: "folder_contexts.json".into(),
            images_root: "Images".into(),
            output_dir: "output_data".into(),
            ignore_file: ".gitignore".into(),
            workflow_dir: ".github/workflows".into(),
            workflow_file: "process_questions.yml".into(),
        }
    }
}

impl Layout {
    /// Every path must be non-empty, relative, and stay below the root.
    pub fn validate(&self) -> Result<(), DomainError> {
        check_relative("config_file", &self.config_file)?;
        check_relative("images_root", &self.images_root)?;
        check_relative("output_dir", &self.output_dir)?;
        check_relative("ignore_file", &self.ignore_file)?;
        check_relative("workflow_dir", &self.workflow_dir)?;
        check_relative("workflow_file", &self.workflow_file)?;
        Ok(())
    }

    /// Path of the workflow definition the pipeline needs.
    pub fn workflow_definition(&self) -> PathBuf {
        self.workflow_dir.join(&self.workflow_file)
    }

    /// Rule line ignoring the output directory, e.g. `output_data/`.
    pub fn output_ignore_pattern(&self) -> String {
        let mut pattern = self.output_dir.to_string_lossy().replace('\\', "/");
        if !pattern.ends_with('/') {
            pattern.push('/');
        }
        pattern
    }
}

fn check_relative(field: &'static str, path: &Path) -> Result<(), DomainError> {
    if path.as_os_str().is_empty() {
        return Err(DomainError::EmptyLayoutPath { field });
    }
    if path.has_root() || path.is_absolute() {
        return Err(DomainError::AbsolutePathNotAllowed {
            field,
            path: path.display().to_string(),
        });
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(DomainError::ParentTraversalNotAllowed {
            field,
            path: path.display().to_string(),
        });
    }
    Ok(())
}
