use std::fmt;

use serde::{Serialize, Serializer};

/// Inclusive 1-based item span shown on a page, rendered as `"start-end"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowingRange {
    pub start: i64,
    pub end: i64,
}

impl fmt::Display for ShowingRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl Serialize for ShowingRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Range of items on `current_page`.
///
/// `end` is clamped to `total` and `start` is always `end - per_page + 1`, so
/// a page past the end (or an empty list) yields a start below 1.
pub fn compute_range(current_page: i64, per_page: i64, total: i64) -> ShowingRange {
    let end = current_page.saturating_mul(per_page).min(total);
    let start = end.saturating_sub(per_page).saturating_add(1);
    ShowingRange { start, end }
}
