use std::fmt;

use super::model::PostDataset;

// ---------------------------------------------------------------------------
// Range filter: inclusive score interval on the 0–100 scale
// ---------------------------------------------------------------------------

/// Optional inclusive score range, bounds in percent.
///
/// Only a filter with both bounds set restricts anything; a half-set filter
/// (the user picked a start but no end yet) behaves like an empty one.
/// Bounds are compared literally, so `start > end` matches nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeFilter {
    pub start: Option<u8>,
    pub end: Option<u8>,
}

impl RangeFilter {
    pub const UNSET: Self = Self {
        start: None,
        end: None,
    };

    pub fn between(start: u8, end: u8) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn bounds(&self) -> Option<(u8, u8)> {
        self.start.zip(self.end)
    }

    /// Whether a score in `[0, 1]` passes the filter.
    pub fn matches(&self, score: f64) -> bool {
        match self.bounds() {
            None => true,
            Some((start, end)) => {
                score >= f64::from(start) / 100.0 && score <= f64::from(end) / 100.0
            }
        }
    }
}

impl fmt::Display for RangeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start, self.end) {
            (Some(s), Some(e)) => write!(f, "[{s}, {e}]"),
            (Some(s), None) => write!(f, "[{s}, …]"),
            (None, Some(e)) => write!(f, "[…, {e}]"),
            (None, None) => write!(f, "[all]"),
        }
    }
}

/// Return indices of posts that pass the filter, in dataset order.
pub fn filtered_indices(dataset: &PostDataset, filter: &RangeFilter) -> Vec<usize> {
    dataset
        .posts()
        .iter()
        .enumerate()
        .filter(|(_, post)| filter.matches(post.score()))
        .map(|(i, _)| i)
        .collect()
}
