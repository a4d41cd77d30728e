//! The setup run: the only thing `mathq-setup` does.
//!
//! Responsibility: build the core service over the local filesystem, turn its
//! events into progress lines, and print the summary. No layout logic lives
//! here.

use std::io;
use std::path::Path;

use tracing::{debug, instrument};

use mathq_adapters::LocalFilesystem;
use mathq_core::prelude::*;

use crate::{
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
    summary,
};

/// Run every setup step in the current working directory.
#[instrument(skip_all)]
pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = std::env::current_dir().with_cli_context(|| "Cannot determine working directory")?;
    debug!(root = %root.display(), "Project root resolved");

    let service = SetupService::new(Box::new(LocalFilesystem::new()), &root, config.layout())?;

    let mut observer = TerminalObserver::new(&output);
    let report = service.run(&mut observer)?;
    observer.finish()?;

    print_summary(&report, &config, &output)?;
    Ok(())
}

/// Prints one line per setup event.
///
/// The observer port cannot fail, so the first write error is kept and
/// surfaced by [`TerminalObserver::finish`].
struct TerminalObserver<'a> {
    output: &'a OutputManager,
    error: Option<io::Error>,
}

impl<'a> TerminalObserver<'a> {
    fn new(output: &'a OutputManager) -> Self {
        Self {
            output,
            error: None,
        }
    }

    fn finish(self) -> io::Result<()> {
        self.error.map_or(Ok(()), Err)
    }

    fn write(&self, event: &SetupEvent) -> io::Result<()> {
        let out = self.output;
        match event {
            SetupEvent::StepStarted(Step::Summary) => {
                out.print("")?;
                out.header(&Step::Summary.to_string())
            }
            SetupEvent::StepStarted(step) => out.step(&step.to_string()),
            SetupEvent::Resource(resource) => {
                let path = resource.path.display();
                match resource.status {
                    ResourceStatus::Created => {
                        out.success(&format!("Created {} {path}", resource.kind))
                    }
                    ResourceStatus::Present => {
                        out.info(&format!("{} {path} already exists", capitalise(resource.kind)))
                    }
                }
            }
            SetupEvent::FolderIssue(PlanIssue::Skipped(reason)) => {
                out.warning(&format!("Skipping folder entry: {reason}"))
            }
            SetupEvent::FolderIssue(PlanIssue::MissingContext { name }) => out.warning(&format!(
                "Folder '{name}' has no context; the processor will skip it until one is added"
            )),
            SetupEvent::FallbackUsed(reason) => out.warning(&format!(
                "Using default folders First, Second, Third ({reason})"
            )),
            SetupEvent::WorkflowDefinitionMissing { path } => out.warning(&format!(
                "Workflow definition not found; add it at {}",
                path.display()
            )),
            SetupEvent::TreeUnavailable { reason } => {
                out.warning(&format!("Could not list the images folder: {reason}"))
            }
        }
    }
}

impl SetupObserver for TerminalObserver<'_> {
    fn on_event(&mut self, event: &SetupEvent) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.write(event) {
            self.error = Some(e);
        }
    }
}

fn print_summary(
    report: &SetupReport,
    config: &AppConfig,
    output: &OutputManager,
) -> io::Result<()> {
    let images_root: &Path = &config.layout.images_root;
    for (i, line) in summary::render_tree(images_root, &report.tree)
        .into_iter()
        .enumerate()
    {
        if i == 0 {
            output.print(&output.bold(&line))?;
        } else {
            output.print(&line)?;
        }
    }

    output.print("")?;
    output.header("Next steps")?;
    for step in summary::next_steps(config) {
        output.print(&format!("  {step}"))?;
    }

    output.print("")?;
    output.success(&format!(
        "Setup complete: created {}, kept {}",
        report.created(),
        report.present()
    ))?;
    output.print(&output.dim("Safe to run again; existing files are never changed."))
}

fn capitalise(kind: ResourceKind) -> String {
    let text = kind.to_string();
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalises_resource_kinds() {
        assert_eq!(capitalise(ResourceKind::OutputDir), "Output directory");
        assert_eq!(capitalise(ResourceKind::ConfigFile), "Configuration");
    }
}
