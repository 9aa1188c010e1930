//! Thread segmentation
//!
//! Splits one linear thread into segments on role change or long time gap.
//! The gap threshold is always passed in by the caller.

pub mod splitter;

pub use splitter::{split_segments, Segment, DEFAULT_GAP_SECONDS};
