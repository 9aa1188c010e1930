//! Upward traversal from a leaf to its root
//!
//! The walk is iterative and keeps a per-walk visited set, so a malformed
//! parent chain (A → B → A) ends the walk instead of looping forever.

use std::collections::HashSet;

use super::node::MessageNode;
use super::tree::MessageTree;

/// Collect the ancestry chain of `leaf_id`, leaf first.
///
/// ## Stop Conditions
///
/// - the current node has no parent
/// - the parent id is not present in the tree
/// - the id was already visited during this walk (cycle)
///
/// ## Example
///
/// ```text
/// Tree:    root → a → b
/// Walk b:  [b, a, root]
///
/// Cycle:   A.parent = B, B.parent = A
/// Walk A:  [A, B]
/// ```
pub fn walk_to_root<'a>(tree: &'a MessageTree, leaf_id: &str) -> Vec<&'a MessageNode> {
    let mut chain = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut current = tree.get(leaf_id);

    while let Some(node) = current {
        if !visited.insert(node.id.as_str()) {
            log::debug!("parent cycle detected at node {}", node.id);
            break;
        }

        chain.push(node);
        current = node.parent.as_deref().and_then(|parent| tree.get(parent));
    }

    chain
}
