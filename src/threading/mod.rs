//! Conversation threading module
//!
//! Turns the parent/child node graph of an exported conversation into linear,
//! root-first message threads, one per leaf.
//!
//! ## Threading Strategy
//!
//! Exports keep every branch a conversation ever had: editing a prompt or
//! regenerating a reply adds a sibling node instead of replacing the old one.
//! Walking upward from each leaf recovers every branch as its own transcript.
//!
//! ## Module Structure
//!
//! - `node`: Node and thread data structures, parse-or-default helpers
//! - `tree`: Arena storage indexed by node id
//! - `tree_traversal`: Cycle-guarded leaf-to-root walk
//! - `reconstruct`: Thread reconstruction entry point

pub mod node;
pub mod reconstruct;
pub mod tree;
pub mod tree_traversal;

// Re-export main types and functions
pub use node::{MessageNode, Thread, ThreadMessage};
pub use reconstruct::reconstruct_threads;
pub use tree::MessageTree;
