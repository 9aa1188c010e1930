//! Arena storage for conversation nodes
//!
//! Nodes live in a `Vec` in mapping order and are addressed by id through a
//! side index. Parent and child links stay plain ids, so malformed input with
//! cycles or dangling references never creates an ownership problem.

use serde_json::{Map, Value};
use std::collections::HashMap;

use super::node::MessageNode;

/// All nodes of one conversation, indexed by id.
#[derive(Debug, Default)]
pub struct MessageTree {
    nodes: Vec<MessageNode>,
    index: HashMap<String, usize>,
}

impl MessageTree {
    /// Build the arena from a raw `mapping` object.
    ///
    /// Insertion order follows the mapping's document order.
    pub fn from_mapping(mapping: &Map<String, Value>) -> Self {
        let mut tree = MessageTree {
            nodes: Vec::with_capacity(mapping.len()),
            index: HashMap::with_capacity(mapping.len()),
        };

        for (id, data) in mapping {
            tree.insert(MessageNode::from_value(id, data));
        }

        tree
    }

    /// Append a node. Ids are expected to be unique, as mapping keys are.
    pub fn insert(&mut self, node: MessageNode) {
        self.index.insert(node.id.clone(), self.nodes.len());
        self.nodes.push(node);
    }

    pub fn get(&self, id: &str) -> Option<&MessageNode> {
        self.index.get(id).map(|&slot| &self.nodes[slot])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes without children, in insertion order.
    pub fn leaves(&self) -> impl Iterator<Item = &MessageNode> {
        self.nodes.iter().filter(|node| node.is_leaf())
    }
}
