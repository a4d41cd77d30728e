//! Progress events and the final setup report.

use std::fmt;
use std::path::PathBuf;

use crate::domain::{FallbackReason, FolderName, FolderOrigin, ImageTree, PlanIssue};

/// The six setup steps, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Config,
    Folders,
    Output,
    IgnoreFile,
    Workflow,
    Summary,
}

/// What a scaffolded resource is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    ConfigFile,
    ImageFolder,
    OutputDir,
    IgnoreFile,
    WorkflowDir,
}

/// Whether the run had to create a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceStatus {
    Created,
    Present,
}

/// One resource after its step ran. `path` is relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceOutcome {
    pub kind: ResourceKind,
    pub path: PathBuf,
    pub status: ResourceStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SetupEvent {
    StepStarted(Step),
    Resource(ResourceOutcome),
    FolderIssue(PlanIssue),
    FallbackUsed(FallbackReason),
    /// The workflow directory has no definition file yet.
    WorkflowDefinitionMissing { path: PathBuf },
    /// The images root could not be listed; the summary shows no tree.
    TreeUnavailable { reason: String },
}

/// Everything one run did.
#[derive(Debug, Clone, PartialEq)]
pub struct SetupReport {
    pub folders: Vec<FolderName>,
    pub origin: FolderOrigin,
    pub resources: Vec<ResourceOutcome>,
    pub workflow_definition_present: bool,
    pub tree: ImageTree,
}

impl SetupReport {
    pub fn created(&self) -> usize {
        self.count(ResourceStatus::Created)
    }

    pub fn present(&self) -> usize {
        self.count(ResourceStatus::Present)
    }

    fn count(&self, status: ResourceStatus) -> usize {
        self.resources.iter().filter(|r| r.status == status).count()
    }

    pub fn status_of(&self, kind: ResourceKind) -> Option<ResourceStatus> {
        self.resources
            .iter()
            .find(|r| r.kind == kind)
            .map(|r| r.status)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Config => "Checking folder configuration",
            Self::Folders => "Creating image folders",
            Self::Output => "Creating output directory",
            Self::IgnoreFile => "Checking ignore file",
            Self::Workflow => "Checking workflow directory",
            Self::Summary => "Summary",
        };
        f.write_str(s)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ConfigFile => "configuration",
            Self::ImageFolder => "image folder",
            Self::OutputDir => "output directory",
            Self::IgnoreFile => "ignore file",
            Self::WorkflowDir => "workflow directory",
        };
        f.write_str(s)
    }
}
