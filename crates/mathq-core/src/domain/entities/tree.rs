use std::path::{Path, PathBuf};

/// One entry below a walked root, path relative to that root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TreeEntry {
    pub path: PathBuf,
    pub is_dir: bool,
}

impl TreeEntry {
    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_dir: true,
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_dir: false,
        }
    }

    /// Zero for direct children of the root.
    pub fn depth(&self) -> usize {
        self.path.components().count().saturating_sub(1)
    }

    /// Last path component, for display.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Page images are the `.jpg` files the pipeline picks up. The match is
    /// case-sensitive, like the pipeline's glob.
    pub fn is_page_image(&self) -> bool {
        !self.is_dir && self.path.extension().is_some_and(|ext| ext == "jpg")
    }
}

/// Snapshot of the images root, in depth-first order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageTree {
    entries: Vec<TreeEntry>,
}

impl ImageTree {
    /// Entries are sorted so every directory precedes its contents.
    pub fn new(mut entries: Vec<TreeEntry>) -> Self {
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        entries.dedup();
        Self { entries }
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of page images directly inside `folder`.
    pub fn page_count(&self, folder: &Path) -> usize {
        self.entries
            .iter()
            .filter(|e| e.path.parent() == Some(folder) && e.is_page_image())
            .count()
    }

    /// Whether `entry` is the last child of its parent.
    pub fn is_last_sibling(&self, index: usize) -> bool {
        let Some(entry) = self.entries.get(index) else {
            return false;
        };
        let parent = entry.path.parent();
        !self.entries[index + 1..]
            .iter()
            .any(|later| later.path.parent() == parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ImageTree {
        ImageTree::new(vec![
            TreeEntry::dir("Second"),
            TreeEntry::file("First/page_2.JPG"),
            TreeEntry::dir("First"),
            TreeEntry::file("First/page_1.jpg"),
            TreeEntry::file("First/notes.txt"),
        ])
    }

    #[test]
    fn sorts_parents_before_children() {
        let tree = sample();
        let paths: Vec<_> = tree
            .entries()
            .iter()
            .map(|e| e.path.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            paths,
            [
                "First",
                "First/notes.txt",
                "First/page_1.jpg",
                "First/page_2.JPG",
                "Second"
            ]
        );
    }

    #[test]
    fn counts_only_jpg_pages() {
        let tree = sample();
        // page_2.JPG is not picked up: the extension must be lowercase.
        assert_eq!(tree.page_count(Path::new("First")), 1);
        assert_eq!(tree.page_count(Path::new("Second")), 0);
        assert!(!TreeEntry::file("First/page_2.JPG").is_page_image());
    }

    #[test]
    fn depth_and_last_sibling() {
        let tree = sample();
        assert_eq!(tree.entries()[0].depth(), 0);
        assert_eq!(tree.entries()[1].depth(), 1);
        assert!(!tree.is_last_sibling(0));
        assert!(tree.is_last_sibling(3));
        assert!(tree.is_last_sibling(4));
    }

    #[test]
    fn default_is_empty() {
        assert!(ImageTree::default().is_empty());
    }
}
