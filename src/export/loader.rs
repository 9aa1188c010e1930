//! Archive loading.
//!
//! Reads a `conversations.json` export: a JSON array whose elements each carry
//! a `title` and a `mapping` of message nodes. Only the top-level shape is
//! validated; everything inside a conversation is interpreted leniently by the
//! threading module.

use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{ArchiveError, ArchiveResult};
use crate::models::Conversation;

/// Load every conversation from an archive file.
pub fn load_conversations(path: impl AsRef<Path>) -> ArchiveResult<Vec<Conversation>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ArchiveError::io(path, e))?;
    let root: Value = serde_json::from_reader(BufReader::new(file))?;

    let conversations = parse_conversations(&root)?;
    log::info!(
        "loaded {} conversations from {}",
        conversations.len(),
        path.display()
    );
    Ok(conversations)
}

/// Split an already parsed archive into conversations.
pub fn parse_conversations(root: &Value) -> ArchiveResult<Vec<Conversation>> {
    let entries = root.as_array().ok_or(ArchiveError::NotAnArray {
        found: json_kind(root),
    })?;

    Ok(entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            if !entry.is_object() {
                log::warn!("conversation {} is not an object, treating it as empty", index);
            }
            Conversation::from_value(index, entry)
        })
        .collect())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_parse_conversations() {
        let root = json!([
            {"title": "First", "mapping": {"a": {"children": []}}},
            {"mapping": null},
            42
        ]);

        let conversations = parse_conversations(&root).unwrap();
        assert_eq!(conversations.len(), 3);
        assert_eq!(conversations[0].title, "First");
        assert_eq!(conversations[0].mapping.len(), 1);
        assert_eq!(conversations[1].title, "Conversation 1");
        assert!(conversations[2].mapping.is_empty());
    }

    #[test]
    fn test_rejects_non_array_root() {
        let err = parse_conversations(&json!({"mapping": {}})).unwrap_err();
        assert!(matches!(err, ArchiveError::NotAnArray { found: "an object" }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"title": "On disk", "mapping": {{}}}}]"#).unwrap();

        let conversations = load_conversations(file.path()).unwrap();
        assert_eq!(conversations.len(), 1);
        assert_eq!(conversations[0].title, "On disk");
    }

    #[test]
    fn test_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[{{not json").unwrap();

        let err = load_conversations(file.path()).unwrap_err();
        assert!(matches!(err, ArchiveError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_conversations(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ArchiveError::Io { .. }));
    }
}
