use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// The folder configuration file: an ordered list of image-intake folders.
///
/// Written once by this tool (as a sample) and edited by hand afterwards.
/// It is never rewritten by later runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub folders: Vec<FolderContext>,
}

/// One named folder plus metadata for the downstream pipeline.
///
/// `context` is opaque here: any JSON value is carried through untouched and
/// only checked for emptiness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderContext {
    pub name: String,
    #[serde(default)]
    pub context: Value,
}

impl Configuration {
    /// Parse the configuration file's contents.
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    /// The sample written when no configuration exists.
    pub fn sample() -> Self {
        let context = json!({
            "subject": "Higher Mathematics",
            "paper": "First Paper",
            "chapter": "Matrices and Determinants",
            "chapter_no": 1,
            "level": "HSC",
            "tags": ["MCQ", "Board Questions"]
        });

        Self {
            folders: vec![FolderContext {
                name: "First".into(),
                context,
            }],
        }
    }

    /// Pretty JSON with a trailing newline, as written to disk.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }

    /// Folder names in file order, before any validation.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.folders.iter().map(|f| f.name.as_str())
    }
}

impl FolderContext {
    /// The pipeline skips folders whose context is missing or empty:
    /// `null`, `false`, `0`, `""`, `[]` and `{}` all count as no context.
    pub fn has_context(&self) -> bool {
        match &self.context {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
        }
    }
}
