//! Node data structures for thread reconstruction
//!
//! A conversation export stores its messages as a flat `mapping` of node id to
//! node record. Each record points at its parent and children by id. Some nodes
//! carry no message at all (the synthetic root most exports start with); these
//! are kept as structural nodes so the walk can pass through them.

use serde_json::Value;

/// A node in the conversation tree.
///
/// ## Structural Nodes
///
/// Nodes without an author role never appear in a thread, but they still link
/// their children to their parent. This mirrors how exports wrap the first
/// user message under an empty root node.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageNode {
    /// Key of this node in the conversation mapping
    pub id: String,

    /// Id of the parent node (None for roots)
    pub parent: Option<String>,

    /// Ids of child nodes
    pub children: Vec<String>,

    /// Author role (None for structural nodes)
    pub role: Option<String>,

    /// Content parts joined by newlines
    pub text: String,

    /// Creation time in seconds since the epoch, if known
    pub time: Option<f64>,
}

impl MessageNode {
    /// Build a node from one raw mapping entry.
    ///
    /// Every field falls back to an absent or empty value when the record is
    /// malformed, so this never fails.
    pub fn from_value(id: &str, data: &Value) -> Self {
        let message = data.get("message");

        MessageNode {
            id: id.to_string(),
            parent: data
                .get("parent")
                .and_then(Value::as_str)
                .map(str::to_string),
            children: parse_children(data.get("children")),
            role: message.and_then(parse_role),
            text: message.map(parse_text).unwrap_or_default(),
            time: message.and_then(|m| parse_time(m.get("create_time"))),
        }
    }

    /// A leaf has no children and seeds exactly one thread.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Project this node into a thread entry, if it has a role.
    pub fn to_thread_message(&self) -> Option<ThreadMessage> {
        self.role.as_ref().map(|role| ThreadMessage {
            role: Some(role.clone()),
            text: self.text.clone(),
            time: self.time,
        })
    }
}

/// One entry of a linear thread.
///
/// `role` stays optional here because the segmenter accepts threads from any
/// source and treats a missing role as its own value.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadMessage {
    pub role: Option<String>,
    pub text: String,
    pub time: Option<f64>,
}

impl ThreadMessage {
    pub fn new(role: impl Into<String>, text: impl Into<String>, time: Option<f64>) -> Self {
        ThreadMessage {
            role: Some(role.into()),
            text: text.into(),
            time,
        }
    }
}

/// A root-to-leaf path through the conversation tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Thread {
    /// Id of the leaf node this thread was walked from
    pub leaf_id: String,

    /// Role-bearing messages in root-first order
    pub messages: Vec<ThreadMessage>,
}

/// Parse a timestamp from a number or a numeric string.
///
/// Returns `None` for null, non-numeric strings, other JSON types, and
/// non-finite values. A parsed zero is a real timestamp, not "unknown".
pub fn parse_time(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed.filter(|t| t.is_finite())
}

/// Extract `author.role`; an empty role counts as absent.
fn parse_role(message: &Value) -> Option<String> {
    message
        .get("author")
        .and_then(|author| author.get("role"))
        .and_then(Value::as_str)
        .filter(|role| !role.is_empty())
        .map(str::to_string)
}

/// Join scalar `content.parts` with newlines.
///
/// Nulls and structured parts (attachments, image pointers) are dropped.
fn parse_text(message: &Value) -> String {
    let Some(parts) = message
        .get("content")
        .and_then(|content| content.get("parts"))
        .and_then(Value::as_array)
    else {
        return String::new();
    };

    parts
        .iter()
        .filter_map(|part| match part {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse_children(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|ids| {
            ids.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
