use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::interval::TimeInterval;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Pending,
    Confirmed,
    Cancelled,
}

/// A committed calendar event. Immutable once inserted into the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub attendees: Vec<String>,
    pub status: EventStatus,
}

impl CalendarEvent {
    /// Validates `end > start` and that confirmed events carry at least one
    /// attendee.
    pub fn new(
        id: String,
        title: String,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        attendees: Vec<String>,
        status: EventStatus,
    ) -> Result<Self, ScheduleError> {
        if end_time <= start_time {
            return Err(ScheduleError::InvalidInterval);
        }
        if status == EventStatus::Confirmed && attendees.is_empty() {
            return Err(ScheduleError::InvalidEvent(
                "confirmed event must have at least one attendee".to_string(),
            ));
        }
        Ok(Self {
            id,
            title,
            start_time,
            end_time,
            attendees,
            status,
        })
    }

    pub fn interval(&self) -> TimeInterval {
        // Construction already guaranteed end > start.
        TimeInterval {
            start: self.start_time,
            end: self.end_time,
        }
    }
}
