use crate::domain::entities::layout::Layout;

/// A titled block of ignore patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSection {
    pub title: &'static str,
    pub patterns: Vec<String>,
}

/// Default ignore-file contents for a scaffolded project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreRules {
    sections: Vec<IgnoreSection>,
}

impl IgnoreRules {
    pub fn for_layout(layout: &Layout) -> Self {
        fn section(title: &'static str, patterns: &[&str]) -> IgnoreSection {
            IgnoreSection {
                title,
                patterns: patterns.iter().map(|p| (*p).to_owned()).collect(),
            }
        }

        Self {
            sections: vec![
                IgnoreSection {
                    title: "Processing output",
                    patterns: vec![layout.output_ignore_pattern()],
                },
                section(
                    "Interpreter caches",
                    &["__pycache__/", "*.py[cod]", "*$py.class"],
                ),
                section("Virtual environments", &["venv/", ".venv/", "env/", "ENV/"]),
                section(
                    "Editor and OS artifacts",
                    &[".vscode/", ".idea/", "*.swp", "*~", ".DS_Store", "Thumbs.db"],
                ),
                section("Logs", &["*.log", "logs/"]),
                section("Temporary files", &["*.tmp", "tmp/", "temp/"]),
            ],
        }
    }

    pub fn sections(&self) -> &[IgnoreSection] {
        &self.sections
    }

    /// All patterns, in file order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .flat_map(|s| s.patterns.iter().map(String::as_str))
    }

    /// File contents: `# Title` headers, one pattern per line, blank line
    /// between sections.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str("# ");
            out.push_str(section.title);
            out.push('\n');
            for pattern in &section.patterns {
                out.push_str(pattern);
                out.push('\n');
            }
        }
        out
    }
}
