//! Segment splitting for linear threads
//!
//! A thread is cut wherever the speaker changes or the conversation went quiet
//! for longer than the gap threshold.

use std::cmp::Ordering;

use crate::threading::ThreadMessage;

/// Default gap threshold: 30 minutes.
pub const DEFAULT_GAP_SECONDS: f64 = 30.0 * 60.0;

/// A contiguous, non-empty run of messages from one thread.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub messages: Vec<ThreadMessage>,
}

impl Segment {
    fn start(message: ThreadMessage) -> Self {
        Segment {
            messages: vec![message],
        }
    }

    /// Role shared by the segment's messages.
    pub fn role(&self) -> Option<&str> {
        self.messages.first().and_then(|m| m.role.as_deref())
    }

    /// Earliest known timestamp.
    pub fn start_time(&self) -> Option<f64> {
        self.messages.iter().find_map(|m| m.time)
    }

    /// Latest known timestamp.
    pub fn end_time(&self) -> Option<f64> {
        self.messages.iter().rev().find_map(|m| m.time)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Split a thread into segments on role change or long time gap.
///
/// ## Algorithm
///
/// 1. Stable sort by time, unknown times first
/// 2. Walk consecutive pairs and open a new segment when
///    - both times are known and `cur - prev > gap_seconds`, or
///    - the roles differ (a missing role is its own value)
/// 3. Emit the last open segment
///
/// When only one of the two times is known the gap check is skipped, so a
/// missing timestamp never forces a split by itself.
pub fn split_segments(messages: &[ThreadMessage], gap_seconds: f64) -> Vec<Segment> {
    let mut sorted: Vec<&ThreadMessage> = messages.iter().collect();
    sorted.sort_by(|a, b| compare_time(a.time, b.time));

    let Some(&first) = sorted.first() else {
        return Vec::new();
    };

    let mut segments = Vec::new();
    let mut current = Segment::start(first.clone());

    for pair in sorted.windows(2) {
        let (prev, cur) = (pair[0], pair[1]);

        if is_boundary(prev, cur, gap_seconds) {
            segments.push(std::mem::replace(&mut current, Segment::start(cur.clone())));
        } else {
            current.messages.push(cur.clone());
        }
    }

    segments.push(current);
    segments
}

fn is_boundary(prev: &ThreadMessage, cur: &ThreadMessage, gap_seconds: f64) -> bool {
    let time_gap = match (prev.time, cur.time) {
        (Some(prev_time), Some(cur_time)) => cur_time - prev_time > gap_seconds,
        _ => false,
    };

    time_gap || prev.role != cur.role
}

/// Order optional timestamps with `None` below every known time.
fn compare_time(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => x.total_cmp(&y),
    }
}
