use std::error::Error;
use std::fmt;

/// Errors surfaced by the scheduling core and the request orchestration layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A requested meeting duration was zero or negative.
    InvalidDuration(i64),
    /// An interval with `end <= start` was passed to an availability check.
    InvalidInterval,
    /// An event failed construction-time validation.
    InvalidEvent(String),
    /// A strict-mode insert would overlap an existing event.
    Conflict,
    /// No pending request exists under the given id.
    NotFound(String),
    /// A chosen slot index fell outside the offered candidate list.
    OutOfRange { index: usize, len: usize },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::InvalidDuration(minutes) => {
                write!(f, "Invalid meeting duration: {} minutes", minutes)
            }
            ScheduleError::InvalidInterval => {
                write!(f, "Invalid interval: end must be after start")
            }
            ScheduleError::InvalidEvent(reason) => write!(f, "Invalid event: {}", reason),
            ScheduleError::Conflict => {
                write!(f, "Time slot conflicts with an existing event")
            }
            ScheduleError::NotFound(id) => write!(f, "Request ID not found: {}", id),
            ScheduleError::OutOfRange { index, len } => {
                write!(f, "Invalid slot index {} ({} slots offered)", index, len)
            }
        }
    }
}

impl Error for ScheduleError {}
