//! Export orchestration.
//!
//! Drives the whole run: load the archive, then for every conversation
//! reconstruct threads, split them into segments and write the segments out.
//!
//! # Parallelism
//!
//! Conversations share nothing, so they are fanned out over a Rayon thread
//! pool sized by `ExportConfig::jobs`. Each worker returns its own
//! `ExportStats` and the totals are merged at the end. The first write error
//! aborts the export.

use rayon::prelude::*;
use std::fs;
use std::path::Path;

use crate::config::ExportConfig;
use crate::error::{ArchiveError, ArchiveResult};
use crate::export::loader::load_conversations;
use crate::export::markdown::save_segments;
use crate::models::{Conversation, ExportStats};
use crate::segmentation::split_segments;
use crate::threading::reconstruct_threads;

/// Export every conversation in the archive at `path`.
pub fn process_archive(path: impl AsRef<Path>, config: &ExportConfig) -> ArchiveResult<ExportStats> {
    let out_dir = config.output_dir.as_path();
    fs::create_dir_all(out_dir).map_err(|source| ArchiveError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let conversations = load_conversations(path)?;
    process_conversations(&conversations, config)
}

/// Export already loaded conversations into `config.output_dir`.
pub fn process_conversations(
    conversations: &[Conversation],
    config: &ExportConfig,
) -> ArchiveResult<ExportStats> {
    log::info!(
        "processing {} conversations with {} threads (gap {}s)",
        conversations.len(),
        config.jobs,
        config.gap_seconds
    );

    let thread_pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs)
        .build()?;

    let stats = thread_pool.install(|| {
        conversations
            .par_iter()
            .map(|conversation| process_conversation(conversation, config))
            .try_reduce(ExportStats::default, |mut total, stats| {
                total.merge(stats);
                Ok(total)
            })
    })?;

    log::info!(
        "export complete: {} conversations, {} threads, {} segments, {} files",
        stats.conversations,
        stats.threads,
        stats.segments,
        stats.files
    );

    Ok(stats)
}

/// Reconstruct, segment and write a single conversation.
pub fn process_conversation(
    conversation: &Conversation,
    config: &ExportConfig,
) -> ArchiveResult<ExportStats> {
    let threads = reconstruct_threads(&conversation.mapping);
    let mut stats = ExportStats {
        conversations: 1,
        threads: threads.len(),
        ..ExportStats::default()
    };

    for (thread_index, thread) in threads.iter().enumerate() {
        let segments = split_segments(&thread.messages, config.gap_seconds);
        let written = save_segments(
            &conversation.title,
            conversation.index,
            thread_index,
            &segments,
            &config.output_dir,
        )?;

        stats.segments += segments.len();
        stats.files += written.len();
    }

    log::debug!(
        "conversation {} ({}): {} threads, {} segments",
        conversation.index,
        conversation.title,
        stats.threads,
        stats.segments
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config_for(dir: &Path) -> ExportConfig {
        ExportConfig::from_env()
            .with_output_dir(dir)
            .with_gap_minutes(30.0)
            .with_jobs(2)
    }

    #[test]
    fn test_process_conversation_counts() {
        let dir = tempfile::tempdir().unwrap();
        let conversation = Conversation::from_value(
            5,
            &json!({
                "title": "Branches",
                "mapping": {
                    "root": {"children": ["q"]},
                    "q": {"parent": "root", "children": ["r1", "r2"],
                          "message": {"author": {"role": "user"}, "content": {"parts": ["q"]}, "create_time": 1}},
                    "r1": {"parent": "q", "children": [],
                           "message": {"author": {"role": "assistant"}, "content": {"parts": ["r1"]}, "create_time": 2}},
                    "r2": {"parent": "q", "children": [],
                           "message": {"author": {"role": "assistant"}, "content": {"parts": ["r2"]}, "create_time": 3}}
                }
            }),
        );

        let stats = process_conversation(&conversation, &config_for(dir.path())).unwrap();
        assert_eq!(
            stats,
            ExportStats {
                conversations: 1,
                threads: 2,
                segments: 4,
                files: 4,
            }
        );
        assert!(dir.path().join("conv005_thread01_seg01.md").exists());
    }

    #[test]
    fn test_empty_conversation_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let conversation = Conversation::from_value(0, &json!({"mapping": {}}));

        let stats = process_conversation(&conversation, &config_for(dir.path())).unwrap();
        assert_eq!(stats.threads, 0);
        assert_eq!(stats.files, 0);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
