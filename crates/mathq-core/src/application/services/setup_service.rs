//! Setup Service - main application orchestrator.
//!
//! This service runs the whole scaffolding sequence:
//! 1. Ensure the folder configuration exists
//! 2. Materialize one image folder per configured name (or the fallback set)
//! 3. Ensure the output directory
//! 4. Ensure the ignore file
//! 5. Check the workflow directory
//! 6. Snapshot the images tree for the summary
//!
//! Every step is "create if absent": running it twice leaves the same tree.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, SetupObserver},
        report::{ResourceKind, ResourceOutcome, ResourceStatus, SetupEvent, SetupReport, Step},
    },
    domain::{
        Configuration, DomainValidator as validator, FallbackReason, FolderOrigin, FolderPlan,
        IgnoreRules, ImageTree, Layout,
    },
    error::{Context, ScaffoldResult},
};

/// Main setup service.
pub struct SetupService {
    filesystem: Box<dyn Filesystem>,
    root: PathBuf,
    layout: Layout,
}

impl SetupService {
    /// Create a setup service rooted at `root`.
    ///
    /// Fails if any layout path is absolute, empty, or climbs out of `root`.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        root: impl Into<PathBuf>,
        layout: Layout,
    ) -> ScaffoldResult<Self> {
        validator::validate_layout(&layout)?;
        Ok(Self {
            filesystem,
            root: root.into(),
            layout,
        })
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Run every step in order.
    ///
    /// Only filesystem failures abort; an unusable folder configuration is
    /// reported to `observer` and replaced by the fallback set.
    #[instrument(skip_all, fields(root = %self.root.display()))]
    pub fn run(&self, observer: &mut dyn SetupObserver) -> ScaffoldResult<SetupReport> {
        let mut resources = Vec::new();

        observer.on_event(&SetupEvent::StepStarted(Step::Config));
        let config = self.ensure_config()?;
        observer.on_event(&SetupEvent::Resource(config.clone()));
        resources.push(config.clone());

        observer.on_event(&SetupEvent::StepStarted(Step::Folders));
        let plan = self.plan_folders(config.status);
        for issue in plan.issues() {
            observer.on_event(&SetupEvent::FolderIssue(issue.clone()));
        }
        if let FolderOrigin::Fallback(reason) = plan.origin() {
            observer.on_event(&SetupEvent::FallbackUsed(reason.clone()));
        }
        for folder in self.materialize_folders(&plan)? {
            observer.on_event(&SetupEvent::Resource(folder.clone()));
            resources.push(folder);
        }

        observer.on_event(&SetupEvent::StepStarted(Step::Output));
        let output = self.ensure_output_dir()?;
        observer.on_event(&SetupEvent::Resource(output.clone()));
        resources.push(output);

        observer.on_event(&SetupEvent::StepStarted(Step::IgnoreFile));
        let ignore = self.ensure_ignore_file()?;
        observer.on_event(&SetupEvent::Resource(ignore.clone()));
        resources.push(ignore);

        observer.on_event(&SetupEvent::StepStarted(Step::Workflow));
        let workflow = self.ensure_workflow_dir()?;
        observer.on_event(&SetupEvent::Resource(workflow.clone()));
        resources.push(workflow);
        let workflow_definition_present = self.workflow_definition_present();
        if !workflow_definition_present {
            observer.on_event(&SetupEvent::WorkflowDefinitionMissing {
                path: self.layout.workflow_definition(),
            });
        }

        observer.on_event(&SetupEvent::StepStarted(Step::Summary));
        let tree = match self.images_tree() {
            Ok(tree) => tree,
            Err(e) => {
                info!(error = %e, "Images tree could not be listed");
                observer.on_event(&SetupEvent::TreeUnavailable {
                    reason: e.to_string(),
                });
                ImageTree::default()
            }
        };

        info!(
            folders = plan.folders().len(),
            fallback = plan.is_fallback(),
            "Setup completed"
        );

        Ok(SetupReport {
            folders: plan.folders().to_vec(),
            origin: plan.origin().clone(),
            resources,
            workflow_definition_present,
            tree,
        })
    }

    // -------------------------------------------------------------------------
    // Steps
    // -------------------------------------------------------------------------

    /// Write the sample configuration if none exists. Never rewrites one.
    #[instrument(skip_all)]
    pub fn ensure_config(&self) -> ScaffoldResult<ResourceOutcome> {
        let rel = &self.layout.config_file;
        let sample = Configuration::sample()
            .to_pretty_json()
            .context("serialise sample configuration")?;
        self.ensure_file(ResourceKind::ConfigFile, rel, &sample)
    }

    /// Decide which folders to create.
    ///
    /// A configuration written during this run counts as absent, so a fresh
    /// project always starts with the fallback set.
    #[instrument(skip_all, fields(config_status = ?config_status))]
    pub fn plan_folders(&self, config_status: ResourceStatus) -> FolderPlan {
        let plan = if config_status == ResourceStatus::Created {
            FolderPlan::fallback(FallbackReason::ConfigJustCreated)
        } else {
            match self.filesystem.read_to_string(&self.resolve(&self.layout.config_file)) {
                Ok(contents) => FolderPlan::from_contents(&contents),
                Err(e) => FolderPlan::fallback(FallbackReason::Unreadable(e.to_string())),
            }
        };

        if let FolderOrigin::Fallback(reason) = plan.origin() {
            info!(%reason, "Using fallback folder set");
        }
        for issue in plan.issues() {
            info!(?issue, "Folder configuration issue");
        }
        plan
    }

    /// Ensure `<images-root>/<name>/` for every planned folder.
    #[instrument(skip_all, fields(count = plan.folders().len()))]
    pub fn materialize_folders(&self, plan: &FolderPlan) -> ScaffoldResult<Vec<ResourceOutcome>> {
        plan.folders()
            .iter()
            .map(|name| {
                let rel = self.layout.images_root.join(name.as_path());
                self.ensure_dir(ResourceKind::ImageFolder, &rel)
            })
            .collect()
    }

    #[instrument(skip_all)]
    pub fn ensure_output_dir(&self) -> ScaffoldResult<ResourceOutcome> {
        self.ensure_dir(ResourceKind::OutputDir, &self.layout.output_dir)
    }

    /// Write the default ignore rules if the file is absent. Never merges.
    #[instrument(skip_all)]
    pub fn ensure_ignore_file(&self) -> ScaffoldResult<ResourceOutcome> {
        let rules = IgnoreRules::for_layout(&self.layout).render();
        self.ensure_file(ResourceKind::IgnoreFile, &self.layout.ignore_file, &rules)
    }

    /// Create the workflow directory if absent. The definition file itself is
    /// left to the user.
    #[instrument(skip_all)]
    pub fn ensure_workflow_dir(&self) -> ScaffoldResult<ResourceOutcome> {
        let outcome = self.ensure_dir(ResourceKind::WorkflowDir, &self.layout.workflow_dir)?;
        if !self.workflow_definition_present() {
            info!(
                path = %self.layout.workflow_definition().display(),
                "Workflow definition missing"
            );
        }
        Ok(outcome)
    }

    pub fn workflow_definition_present(&self) -> bool {
        self.filesystem
            .exists(&self.resolve(&self.layout.workflow_definition()))
    }

    /// Snapshot of the images root; empty if the root does not exist.
    #[instrument(skip_all)]
    pub fn images_tree(&self) -> ScaffoldResult<ImageTree> {
        let root = self.resolve(&self.layout.images_root);
        if !self.filesystem.is_dir(&root) {
            return Ok(ImageTree::default());
        }
        Ok(ImageTree::new(self.filesystem.walk(&root)?))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn resolve(&self, rel: &Path) -> PathBuf {
        self.root.join(rel)
    }

    fn ensure_dir(&self, kind: ResourceKind, rel: &Path) -> ScaffoldResult<ResourceOutcome> {
        let path = self.resolve(rel);

        let status = if self.filesystem.is_dir(&path) {
            debug!(%kind, path = %rel.display(), "Already present");
            ResourceStatus::Present
        } else if self.filesystem.exists(&path) {
            return Err(ApplicationError::NotADirectory { path }.into());
        } else {
            self.filesystem.create_dir_all(&path)?;
            info!(%kind, path = %rel.display(), "Created");
            ResourceStatus::Created
        };

        Ok(ResourceOutcome {
            kind,
            path: rel.to_path_buf(),
            status,
        })
    }

    fn ensure_file(
        &self,
        kind: ResourceKind,
        rel: &Path,
        content: &str,
    ) -> ScaffoldResult<ResourceOutcome> {
        let path = self.resolve(rel);

        let status = if self.filesystem.exists(&path) {
            debug!(%kind, path = %rel.display(), "Already present, left untouched");
            ResourceStatus::Present
        } else {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, content)?;
            info!(%kind, path = %rel.display(), "Created");
            ResourceStatus::Created
        };

        Ok(ResourceOutcome {
            kind,
            path: rel.to_path_buf(),
            status,
        })
    }
}
