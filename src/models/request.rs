use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A meeting request as understood by the extractor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingRequest {
    pub requester_name: String,
    pub requester_email: String,
    pub purpose: String,
    pub duration_minutes: i64,
}

/// A request waiting for the requester to pick one of the offered slots.
/// One-shot lifecycle: created, then either confirmed into an event or
/// abandoned.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub request: MeetingRequest,
    pub candidate_slots: Vec<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
