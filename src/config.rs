use std::env;
use std::path::PathBuf;

use crate::segmentation::DEFAULT_GAP_SECONDS;

/// Parse a gap length in minutes; rejects negative and non-finite values.
pub fn parse_gap(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

fn env_gap(key: &str, default: f64) -> f64 {
    env::var(key)
        .ok()
        .and_then(|value| parse_gap(&value))
        .unwrap_or(default)
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}

fn env_string(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Runtime configuration for an export run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    /// Directory the Markdown segments are written into
    pub output_dir: PathBuf,
    /// Largest quiet period (seconds) allowed inside one segment
    pub gap_seconds: f64,
    /// Worker threads used to process conversations
    pub jobs: usize,
}

impl ExportConfig {
    pub fn from_env() -> Self {
        let gap_minutes = env_gap("SEGMENT_GAP_MINUTES", DEFAULT_GAP_SECONDS / 60.0);

        Self {
            output_dir: PathBuf::from(env_string("SEGMENTS_OUTPUT_DIR", "segments")),
            gap_seconds: gap_minutes * 60.0,
            jobs: env_usize("SEGMENT_JOBS", num_cpus::get()),
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_gap_minutes(mut self, minutes: f64) -> Self {
        self.gap_seconds = minutes * 60.0;
        self
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
