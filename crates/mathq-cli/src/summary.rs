//! Closing summary: the images tree and the next-steps block.
//!
//! Rendering is pure (`Vec<String>` out) so it can be tested without a
//! terminal; the setup command decides how each line is styled.

use std::path::Path;

use mathq_core::domain::ImageTree;

use crate::config::AppConfig;

/// Shown instead of a tree when the images root is missing or empty.
pub const EMPTY_TREE: &str = "(no folders yet)";

const BRANCH: &str = "\u{251c}\u{2500}\u{2500} "; // ├──
const LAST_BRANCH: &str = "\u{2514}\u{2500}\u{2500} "; // └──
const PIPE: &str = "\u{2502}   "; // │
const GAP: &str = "    ";

/// Draw `tree` below a `root/` line, annotating top-level folders with their
/// page count.
pub fn render_tree(root: &Path, tree: &ImageTree) -> Vec<String> {
    let mut lines = vec![format!("{}/", root.display())];
    if tree.is_empty() {
        lines.push(format!("{GAP}{EMPTY_TREE}"));
        return lines;
    }

    // `open[d]` is true while the ancestor at depth `d` still has siblings below.
    let mut open: Vec<bool> = Vec::new();
    for (index, entry) in tree.entries().iter().enumerate() {
        let depth = entry.depth();
        open.truncate(depth);

        let mut line: String = open.iter().map(|&o| if o { PIPE } else { GAP }).collect();
        let last = tree.is_last_sibling(index);
        line.push_str(if last { LAST_BRANCH } else { BRANCH });
        line.push_str(&entry.name());

        if entry.is_dir {
            line.push('/');
            if depth == 0 {
                line.push_str(&format!(" ({})", pages(tree.page_count(&entry.path))));
            }
        }

        lines.push(line);
        open.push(!last);
    }
    lines
}

/// The numbered onboarding steps.
pub fn next_steps(config: &AppConfig) -> Vec<String> {
    let images = config.layout.images_root.display();
    let config_file = config.layout.config_file.display();
    vec![
        format!(
            "1. Add .jpg page images to each {images}/<folder>/, named so the trailing \
             number gives the page order (page_1.jpg, page_2.jpg, ...)"
        ),
        format!("2. Edit {config_file} to describe the subject, paper and chapter of each folder"),
        format!(
            "3. Add a repository secret named {} holding a comma-separated list of API keys",
            config.onboarding.secret_name
        ),
        "4. Commit and push".to_owned(),
        format!(
            "5. Trigger the \"{}\" workflow from the Actions tab",
            config.onboarding.workflow_name
        ),
    ]
}

fn pages(count: usize) -> String {
    match count {
        1 => "1 page".to_owned(),
        n => format!("{n} pages"),
    }
}
