//! Archive export.
//!
//! The I/O shell around threading and segmentation:
//!
//! - `loader`: read `conversations.json` into `Conversation` values
//! - `markdown`: timestamp formatting and per-segment Markdown files
//! - `pipeline`: parallel per-conversation export with aggregate stats

pub mod loader;
pub mod markdown;
pub mod pipeline;

pub use loader::load_conversations;
pub use markdown::{format_time, save_segments};
pub use pipeline::{process_archive, process_conversation, process_conversations};
