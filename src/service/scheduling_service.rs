use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::ScheduleError;
use crate::models::event::{CalendarEvent, EventStatus};
use crate::models::request::{MeetingRequest, PendingRequest};
use crate::service::extraction::MeetingInfoExtractor;
use crate::service::slot_finder::{self, SchedulingPolicy};
use crate::store::EventStore;

/// Slots offered in response to a meeting request.
#[derive(Debug, Clone, Serialize)]
pub struct SlotProposal {
    pub request_id: String,
    pub duration_minutes: i64,
    pub purpose: String,
    pub slots: Vec<DateTime<Utc>>,
}

/// Shape of the calendar JSON export.
#[derive(Debug, Serialize)]
pub struct CalendarExport {
    pub events: Vec<CalendarEvent>,
    pub total_events: usize,
}

/// Orchestrates the request flow around the scheduling core: extract the
/// request, offer slots, and commit the chosen one as a confirmed event.
///
/// Confirmation holds the store lock across the availability check and the
/// insert, so two requesters racing for the same slot cannot both commit;
/// the loser sees `Conflict`.
pub struct SchedulingService {
    store: Arc<Mutex<EventStore>>,
    pending: Arc<Mutex<HashMap<String, PendingRequest>>>,
    extractor: Arc<dyn MeetingInfoExtractor>,
    policy: SchedulingPolicy,
    owner_email: String,
}

impl SchedulingService {
    pub fn new(
        store: Arc<Mutex<EventStore>>,
        extractor: Arc<dyn MeetingInfoExtractor>,
        policy: SchedulingPolicy,
        owner_email: String,
    ) -> Self {
        Self {
            store,
            pending: Arc::new(Mutex::new(HashMap::new())),
            extractor,
            policy,
            owner_email,
        }
    }

    pub fn policy(&self) -> &SchedulingPolicy {
        &self.policy
    }

    /// Turns a free-text request into a pending request with offered slots.
    /// An empty slot list is a normal outcome ("no availability"), not an
    /// error, and can still be abandoned by id.
    pub async fn process_request(
        &self,
        requester_name: &str,
        requester_email: &str,
        message: &str,
        reference: DateTime<Utc>,
    ) -> Result<SlotProposal, ScheduleError> {
        let info = self.extractor.extract(message).await;

        let slots = {
            let store = self.store.lock().await;
            slot_finder::find_slots(info.duration_minutes, &self.policy, &store, reference)?
        };

        let request = MeetingRequest {
            requester_name: requester_name.to_string(),
            requester_email: requester_email.to_string(),
            purpose: info.purpose.clone(),
            duration_minutes: info.duration_minutes,
        };

        let request_id = Uuid::new_v4().to_string();
        let mut pending = self.pending.lock().await;
        pending.insert(
            request_id.clone(),
            PendingRequest {
                request,
                candidate_slots: slots.clone(),
                created_at: Utc::now(),
            },
        );

        Ok(SlotProposal {
            request_id,
            duration_minutes: info.duration_minutes,
            purpose: info.purpose,
            slots,
        })
    }

    /// Commits the chosen slot as a confirmed event and removes the pending
    /// request. The pending entry survives a failed confirmation so the
    /// requester can pick another slot.
    pub async fn confirm(
        &self,
        request_id: &str,
        slot_index: usize,
    ) -> Result<CalendarEvent, ScheduleError> {
        let mut pending = self.pending.lock().await;
        let entry = pending
            .get(request_id)
            .ok_or_else(|| ScheduleError::NotFound(request_id.to_string()))?;

        let slot = *entry
            .candidate_slots
            .get(slot_index)
            .ok_or(ScheduleError::OutOfRange {
                index: slot_index,
                len: entry.candidate_slots.len(),
            })?;
        let request = entry.request.clone();

        let event = CalendarEvent::new(
            Uuid::new_v4().to_string(),
            format!("Meeting with {}", request.requester_name),
            slot,
            slot + Duration::minutes(request.duration_minutes),
            vec![request.requester_email, self.owner_email.clone()],
            EventStatus::Confirmed,
        )?;

        {
            let mut store = self.store.lock().await;
            store.insert(event.clone())?;
        }

        pending.remove(request_id);
        Ok(event)
    }

    /// Drops a pending request without booking anything.
    pub async fn abandon(&self, request_id: &str) -> Result<(), ScheduleError> {
        let mut pending = self.pending.lock().await;
        pending
            .remove(request_id)
            .map(|_| ())
            .ok_or_else(|| ScheduleError::NotFound(request_id.to_string()))
    }

    pub async fn pending_count(&self) -> usize {
        self.pending.lock().await.len()
    }

    /// Events fully inside the next `days` days, sorted by start time.
    pub async fn upcoming_events(&self, days: i64, reference: DateTime<Utc>) -> Vec<CalendarEvent> {
        let start = reference
            .date_naive()
            .and_time(NaiveTime::MIN)
            .and_utc();
        let end = start + Duration::days(days);

        let store = self.store.lock().await;
        let mut events = store.events_in_range(start, end);
        events.sort_by_key(|event| event.start_time);
        events
    }

    pub async fn export(&self) -> CalendarExport {
        let store = self.store.lock().await;
        let events = store.events().to_vec();
        let total_events = events.len();
        CalendarExport {
            events,
            total_events,
        }
    }

    /// Fills the store with the seeded demo fixture; returns how many events
    /// were created.
    pub async fn seed_demo(&self, reference: DateTime<Utc>, seed: u64) -> usize {
        let mut store = self.store.lock().await;
        crate::service::demo_data::seed_demo_events(&mut store, &self.policy, reference, seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::extraction::HeuristicExtractor;
    use chrono::TimeZone;

    fn service() -> SchedulingService {
        SchedulingService::new(
            Arc::new(Mutex::new(EventStore::strict())),
            Arc::new(HeuristicExtractor),
            SchedulingPolicy::default(),
            "owner@company.com".to_string(),
        )
    }

    fn monday_midnight() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 13, 0, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn abandon_removes_pending_request() {
        let service = service();
        let proposal = service
            .process_request("John Smith", "john.smith@client.com", "an hour", monday_midnight())
            .await
            .unwrap();

        assert_eq!(service.pending_count().await, 1);
        service.abandon(&proposal.request_id).await.unwrap();
        assert_eq!(service.pending_count().await, 0);

        let again = service.abandon(&proposal.request_id).await;
        assert!(matches!(again, Err(ScheduleError::NotFound(_))));
    }

    #[tokio::test]
    async fn export_matches_store_contents() {
        let service = service();
        let proposal = service
            .process_request("John Smith", "john.smith@client.com", "an hour", monday_midnight())
            .await
            .unwrap();
        service.confirm(&proposal.request_id, 0).await.unwrap();

        let export = service.export().await;
        assert_eq!(export.total_events, 1);
        assert_eq!(export.events.len(), 1);
        let json = serde_json::to_value(&export).unwrap();
        assert_eq!(json["total_events"], 1);
        assert_eq!(json["events"][0]["status"], "confirmed");
    }

    #[tokio::test]
    async fn upcoming_events_are_sorted() {
        let service = service();
        for message in ["an hour", "an hour", "an hour"] {
            let proposal = service
                .process_request("John Smith", "john.smith@client.com", message, monday_midnight())
                .await
                .unwrap();
            // Always take the last offered slot so inserts happen out of order
            // relative to earlier bookings.
            let last = proposal.slots.len() - 1;
            service.confirm(&proposal.request_id, last).await.unwrap();
        }

        let events = service.upcoming_events(7, monday_midnight()).await;
        assert_eq!(events.len(), 3);
        for pair in events.windows(2) {
            assert!(pair[0].start_time <= pair[1].start_time);
        }
    }
}
