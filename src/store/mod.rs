use chrono::{DateTime, Utc};

use crate::error::ScheduleError;
use crate::models::event::CalendarEvent;
use crate::models::interval::TimeInterval;

/// The authoritative set of booked time intervals for the calendar owner.
///
/// A permissive store (`new`) accepts any well-formed event, so the
/// orchestration layer can make manual corrections that bypass overlap
/// checks. A strict store (`strict`) rejects overlapping inserts with
/// `Conflict`, which is what upholds the no-overlap invariant for every
/// committed meeting.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<CalendarEvent>,
    strict: bool,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self {
            events: Vec::new(),
            strict: true,
        }
    }

    /// True iff no existing event overlaps [start, end). Touching intervals
    /// are adjacent, not conflicting.
    pub fn is_available(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<bool, ScheduleError> {
        let candidate = TimeInterval::new(start, end)?;
        Ok(!self
            .events
            .iter()
            .any(|event| candidate.overlaps(&event.interval())))
    }

    pub fn insert(&mut self, event: CalendarEvent) -> Result<(), ScheduleError> {
        if self.strict && !self.is_available(event.start_time, event.end_time)? {
            return Err(ScheduleError::Conflict);
        }
        self.events.push(event);
        Ok(())
    }

    /// Events whose full interval lies within [start, end]. No ordering
    /// guarantee; callers sort by start time for a chronological view.
    pub fn events_in_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<CalendarEvent> {
        self.events
            .iter()
            .filter(|event| event.start_time >= start && event.end_time <= end)
            .cloned()
            .collect()
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
