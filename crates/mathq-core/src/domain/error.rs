// ============================================================================
// domain/error.rs - LAYOUT AND FOLDER NAME ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside setup events)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Folder names
    // ========================================================================
    #[error("Invalid folder name '{name}': {reason}")]
    InvalidFolderName { name: String, reason: NameViolation },

    #[error("Duplicate folder name: {name}")]
    DuplicateFolderName { name: String },

    // ========================================================================
    // Layout paths
    // ========================================================================
    #[error("Layout path '{field}' is empty")]
    EmptyLayoutPath { field: &'static str },

    #[error("Absolute paths not allowed for '{field}': {path}")]
    AbsolutePathNotAllowed { field: &'static str, path: String },

    #[error("Parent traversal not allowed for '{field}': {path}")]
    ParentTraversalNotAllowed { field: &'static str, path: String },
}

/// Why a configured folder name cannot be used as a directory name.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NameViolation {
    #[error("name is empty")]
    Empty,
    #[error("'.' and '..' are not folder names")]
    DotSegment,
    #[error("contains a path separator")]
    PathSeparator,
    #[error("contains a control character")]
    ControlCharacter,
    #[error("contains the reserved character '{0}'")]
    ReservedCharacter(char),
    #[error("ends with a dot or a space")]
    TrailingDotOrSpace,
    #[error("is a reserved device name")]
    ReservedDeviceName,
    #[error("longer than 255 bytes")]
    TooLong,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidFolderName { name, reason } => vec![
                format!("Folder '{}' was skipped: {}", name, reason),
                "Use letters, digits, spaces, '-' and '_' in folder names".into(),
            ],
            Self::DuplicateFolderName { name } => vec![
                format!("'{}' appears more than once in the folder list", name),
                "Remove or rename the repeated entry".into(),
            ],
            Self::EmptyLayoutPath { field } => vec![
                format!("Give 'layout.{}' a value", field),
                "Remove the override to use the default".into(),
            ],
            Self::AbsolutePathNotAllowed { field, .. }
            | Self::ParentTraversalNotAllowed { field, .. } => vec![
                format!("'layout.{}' must stay inside the project directory", field),
                "Use a relative path such as 'Images' or 'data/output'".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidFolderName { .. } | Self::DuplicateFolderName { .. } => {
                ErrorCategory::Validation
            }
            Self::EmptyLayoutPath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::ParentTraversalNotAllowed { .. } => ErrorCategory::Configuration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
}
