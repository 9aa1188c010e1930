use serde::Serialize;
use serde_json::{Map, Value};

/// One conversation loaded from the archive.
#[derive(Debug, Clone)]
pub struct Conversation {
    /// Position in the archive array
    pub index: usize,
    pub title: String,
    /// Raw node mapping handed to thread reconstruction
    pub mapping: Map<String, Value>,
}

impl Conversation {
    /// Build a conversation from one archive entry.
    ///
    /// A missing or empty title falls back to `Conversation {index}`; a missing
    /// or non-object mapping becomes empty.
    pub fn from_value(index: usize, value: &Value) -> Self {
        let title = value
            .get("title")
            .and_then(Value::as_str)
            .filter(|title| !title.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Conversation {index}"));

        let mapping = value
            .get("mapping")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        Conversation {
            index,
            title,
            mapping,
        }
    }
}

/// Counts produced by an export run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExportStats {
    pub conversations: usize,
    pub threads: usize,
    pub segments: usize,
    pub files: usize,
}

impl ExportStats {
    /// Merge another ExportStats into this one by summing all counts.
    pub fn merge(&mut self, other: ExportStats) {
        self.conversations += other.conversations;
        self.threads += other.threads;
        self.segments += other.segments;
        self.files += other.files;
    }
}
