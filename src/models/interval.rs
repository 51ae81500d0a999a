use chrono::{DateTime, Utc};

use crate::error::ScheduleError;

/// A transient (start, end) pair used for overlap checks and candidate
/// generation. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeInterval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ScheduleError> {
        if end <= start {
            return Err(ScheduleError::InvalidInterval);
        }
        Ok(Self { start, end })
    }

    /// Half-open overlap test. Touching intervals (one ends exactly where the
    /// other starts) do not overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && self.end > other.start
    }
}
