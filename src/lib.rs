pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod segmentation;
pub mod threading;

pub use crate::config::ExportConfig;
pub use crate::error::{ArchiveError, ArchiveResult};
pub use crate::segmentation::{split_segments, Segment, DEFAULT_GAP_SECONDS};
pub use crate::threading::{reconstruct_threads, Thread, ThreadMessage};

use env_logger::Env;
use std::sync::Once;

static LOGGER: Once = Once::new();

pub fn init_logger() {
    LOGGER.call_once(|| {
        env_logger::Builder::from_env(Env::default().default_filter_or("info"))
            .format_timestamp(None)
            .init();
    });
}
