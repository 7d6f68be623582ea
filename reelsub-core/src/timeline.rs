//! Time lookups and ordering diagnostics over segments and entries.

use crate::types::{Entry, Segment};
use std::fmt;

/// Entry visible at `time`, if any.
///
/// Entries are `[start, end)`; when ranges overlap the earliest listed wins.
pub fn active_entry(entries: &[Entry], time: f64) -> Option<&Entry> {
    entries.iter().find(|e| e.contains(time))
}

/// Ordering problem found in a segment list.
#[derive(Clone, Debug, PartialEq)]
pub enum OrderIssue {
    /// Segment ends before it starts
    Inverted { index: usize, start: f64, end: f64 },
    /// Segment starts before the previous one
    OutOfOrder { index: usize, start: f64, previous: f64 },
    /// Segment starts before the previous one ends
    Overlap { index: usize, start: f64, previous_end: f64 },
}

impl fmt::Display for OrderIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderIssue::Inverted { index, start, end } => {
                write!(f, "segment {index} ends at {end}s before it starts at {start}s")
            }
            OrderIssue::OutOfOrder {
                index,
                start,
                previous,
            } => write!(
                f,
                "segment {index} starts at {start}s before previous start {previous}s"
            ),
            OrderIssue::Overlap {
                index,
                start,
                previous_end,
            } => write!(
                f,
                "segment {index} starts at {start}s before previous end {previous_end}s"
            ),
        }
    }
}

/// Report inverted, out-of-order and overlapping segments.
///
/// The entry builder accepts such input as-is; callers decide what to do.
pub fn check_order(segments: &[Segment]) -> Vec<OrderIssue> {
    let mut issues = Vec::new();

    for (index, segment) in segments.iter().enumerate() {
        if segment.end < segment.start {
            issues.push(OrderIssue::Inverted {
                index,
                start: segment.start,
                end: segment.end,
            });
        }

        let Some(previous) = index.checked_sub(1).map(|i| &segments[i]) else {
            continue;
        };

        if segment.start < previous.start {
            issues.push(OrderIssue::OutOfOrder {
                index,
                start: segment.start,
                previous: previous.start,
            });
        } else if segment.start < previous.end {
            issues.push(OrderIssue::Overlap {
                index,
                start: segment.start,
                previous_end: previous.end,
            });
        }
    }

    issues
}
