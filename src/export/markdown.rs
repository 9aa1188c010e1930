//! Markdown rendering of segments.
//!
//! Each segment becomes one file named after its conversation, thread and
//! segment position:
//!
//! ```text
//! conv007_thread02_seg13.md
//! ```

use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ArchiveError, ArchiveResult};
use crate::segmentation::Segment;

/// Timestamps above this are treated as milliseconds.
const MILLIS_THRESHOLD: f64 = 1e12;

/// Format a timestamp as local `YYYY-MM-DD HH:MM:SS`, or `N/A`.
///
/// Some exports store milliseconds instead of seconds; anything above
/// 1e12 is scaled down first.
pub fn format_time(ts: Option<f64>) -> String {
    let Some(mut ts) = ts.filter(|t| t.is_finite()) else {
        return "N/A".to_string();
    };

    if ts > MILLIS_THRESHOLD {
        ts /= 1000.0;
    }

    let secs = ts.floor();
    let nanos = ((ts - secs) * 1e9).clamp(0.0, 999_999_999.0) as u32;

    match DateTime::from_timestamp(secs as i64, nanos) {
        Some(utc) => utc
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => "N/A".to_string(),
    }
}

pub fn segment_file_name(conv_index: usize, thread_index: usize, segment_index: usize) -> String {
    format!("conv{conv_index:03}_thread{thread_index:02}_seg{segment_index:02}.md")
}

/// Render one segment as a Markdown document.
pub fn render_segment(
    title: &str,
    thread_index: usize,
    segment_index: usize,
    segment: &Segment,
) -> String {
    let mut doc = format!("# {title} - Thread {thread_index} Segment {segment_index}\n\n");

    for message in &segment.messages {
        let timestamp = format_time(message.time);
        let role = message.role.as_deref().unwrap_or("unknown");
        doc.push_str(&format!("**{timestamp} - {role}:**\n{}\n\n", message.text));
    }

    doc
}

/// Write every segment of one thread to `out_dir`.
///
/// Returns the paths written, in segment order.
pub fn save_segments(
    title: &str,
    conv_index: usize,
    thread_index: usize,
    segments: &[Segment],
    out_dir: &Path,
) -> ArchiveResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(segments.len());

    for (segment_index, segment) in segments.iter().enumerate() {
        let path = out_dir.join(segment_file_name(conv_index, thread_index, segment_index));
        let doc = render_segment(title, thread_index, segment_index, segment);

        fs::write(&path, doc).map_err(|e| ArchiveError::write(&path, e))?;
        written.push(path);
    }

    Ok(written)
}
