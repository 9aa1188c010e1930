//! Thread reconstruction from a conversation mapping
//!
//! ## Algorithm Overview
//!
//! 1. **Build Tree**: Parse every mapping entry into a `MessageNode`
//! 2. **Find Leaves**: Every node without children seeds one thread
//! 3. **Walk Up**: Follow parent links to the root, guarding against cycles
//! 4. **Linearize**: Keep role-bearing nodes and reverse into root-first order
//!
//! Branches created by edits or regenerations share ancestors, so their
//! threads overlap. That is expected and no deduplication happens here.

use serde_json::{Map, Value};

use super::node::{Thread, ThreadMessage};
use super::tree::MessageTree;
use super::tree_traversal::walk_to_root;

/// Reconstruct every root-to-leaf thread of one conversation.
///
/// ## Arguments
///
/// - `mapping`: the conversation's raw `mapping` object (node id → node record)
///
/// ## Returns
///
/// One `Thread` per leaf that has at least one role-bearing node on its path,
/// in the mapping's leaf order. An empty mapping yields no threads.
pub fn reconstruct_threads(mapping: &Map<String, Value>) -> Vec<Thread> {
    if mapping.is_empty() {
        return Vec::new();
    }

    let tree = MessageTree::from_mapping(mapping);
    build_threads(&tree)
}

/// Reconstruct threads from an already built tree.
pub fn build_threads(tree: &MessageTree) -> Vec<Thread> {
    let mut threads = Vec::new();

    for leaf in tree.leaves() {
        let mut messages: Vec<ThreadMessage> = walk_to_root(tree, &leaf.id)
            .into_iter()
            .filter_map(|node| node.to_thread_message())
            .collect();

        if messages.is_empty() {
            log::debug!("dropping leaf {} with no authored messages", leaf.id);
            continue;
        }

        messages.reverse();
        threads.push(Thread {
            leaf_id: leaf.id.clone(),
            messages,
        });
    }

    threads
}
