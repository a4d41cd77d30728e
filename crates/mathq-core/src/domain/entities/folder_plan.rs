use std::collections::HashSet;
use std::fmt;

use crate::domain::{
    common::FolderName, entities::configuration::Configuration, error::DomainError,
};

/// Folders created when the configuration gives nothing usable.
pub const FALLBACK_FOLDERS: [&str; 3] = ["First", "Second", "Third"];

/// Which image folders to materialize, and why.
#[derive(Debug, Clone, PartialEq)]
pub struct FolderPlan {
    folders: Vec<FolderName>,
    origin: FolderOrigin,
    issues: Vec<PlanIssue>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderOrigin {
    Configured,
    Fallback(FallbackReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// The sample was written during this run; nothing has been configured yet.
    ConfigJustCreated,
    Unreadable(String),
    Malformed(String),
    /// Parsed fine, but no entry survived validation.
    NoUsableNames,
}

/// A non-fatal problem found while reading the folder list.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanIssue {
    /// The entry was dropped.
    Skipped(DomainError),
    /// The folder is created, but the pipeline will skip it.
    MissingContext { name: FolderName },
}

impl FolderPlan {
    /// The fixed `First` / `Second` / `Third` set.
    pub fn fallback(reason: FallbackReason) -> Self {
        Self {
            folders: FALLBACK_FOLDERS
                .iter()
                .map(|n| FolderName::from_static(n))
                .collect(),
            origin: FolderOrigin::Fallback(reason),
            issues: Vec::new(),
        }
    }

    /// Plan from raw file contents; a parse failure falls back.
    pub fn from_contents(contents: &str) -> Self {
        match Configuration::from_json(contents) {
            Ok(config) => Self::from_configuration(&config),
            Err(e) => Self::fallback(FallbackReason::Malformed(e.to_string())),
        }
    }

    /// Plan from a parsed configuration, keeping file order.
    pub fn from_configuration(config: &Configuration) -> Self {
        let mut seen = HashSet::new();
        let mut folders = Vec::new();
        let mut issues = Vec::new();

        for entry in &config.folders {
            let name = match FolderName::parse(entry.name.as_str()) {
                Ok(name) => name,
                Err(e) => {
                    issues.push(PlanIssue::Skipped(e));
                    continue;
                }
            };
            if !seen.insert(name.clone()) {
                issues.push(PlanIssue::Skipped(DomainError::DuplicateFolderName {
                    name: name.to_string(),
                }));
                continue;
            }
            if !entry.has_context() {
                issues.push(PlanIssue::MissingContext { name: name.clone() });
            }
            folders.push(name);
        }

        if folders.is_empty() {
            let mut plan = Self::fallback(FallbackReason::NoUsableNames);
            plan.issues = issues;
            return plan;
        }

        Self {
            folders,
            origin: FolderOrigin::Configured,
            issues,
        }
    }

    pub fn folders(&self) -> &[FolderName] {
        &self.folders
    }

    pub fn origin(&self) -> &FolderOrigin {
        &self.origin
    }

    pub fn issues(&self) -> &[PlanIssue] {
        &self.issues
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, FolderOrigin::Fallback(_))
    }
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigJustCreated => {
                f.write_str("configuration was just created from the sample")
            }
            Self::Unreadable(e) => write!(f, "configuration could not be read: {e}"),
            Self::Malformed(e) => write!(f, "configuration is not valid: {e}"),
            Self::NoUsableNames => f.write_str("configuration lists no usable folder names"),
        }
    }
}
