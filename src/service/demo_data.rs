use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::event::{CalendarEvent, EventStatus};
use crate::service::slot_finder::SchedulingPolicy;
use crate::store::EventStore;

pub const DEMO_EVENT_TITLES: [&str; 10] = [
    "Team Standup",
    "Client Meeting",
    "Code Review",
    "Project Planning",
    "1-on-1 with Manager",
    "Design Review",
    "Architecture Discussion",
    "Sprint Retrospective",
    "Product Demo",
    "Training Session",
];

const DEMO_DURATIONS: [i64; 3] = [30, 60, 90];

/// Fills the store with 2-4 meetings per working day across the policy
/// horizon. Deterministic for a fixed seed, and every generated event passes
/// the store's availability check first, so a strict store accepts the whole
/// fixture. Returns the number of events created.
pub fn seed_demo_events(
    store: &mut EventStore,
    policy: &SchedulingPolicy,
    reference: DateTime<Utc>,
    seed: u64,
) -> usize {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut created = 0;

    for day_offset in 0..policy.horizon_days {
        let date = (reference + Duration::days(i64::from(day_offset))).date_naive();
        if policy
            .excluded_weekdays
            .contains(&date.weekday().num_days_from_monday())
        {
            continue;
        }
        if policy.work_end_hour <= policy.work_start_hour {
            break;
        }

        let meetings = rng.gen_range(2..=4);
        let mut used_hours: Vec<u32> = Vec::new();
        for _ in 0..meetings {
            let hour = rng.gen_range(policy.work_start_hour..policy.work_end_hour);
            if used_hours.contains(&hour) {
                continue;
            }
            used_hours.push(hour);

            let Some(naive_start) = date.and_hms_opt(hour, 0, 0) else {
                continue;
            };
            let start = Utc.from_utc_datetime(&naive_start);
            let minutes = DEMO_DURATIONS[rng.gen_range(0..DEMO_DURATIONS.len())];
            let end = start + Duration::minutes(minutes);

            // A 90-minute meeting can spill into the next drawn hour.
            if !matches!(store.is_available(start, end), Ok(true)) {
                continue;
            }

            let title = DEMO_EVENT_TITLES[rng.gen_range(0..DEMO_EVENT_TITLES.len())];
            let attendee = format!("user{}@company.com", rng.gen_range(1..=5));
            let event = CalendarEvent::new(
                format!("evt_{}", created + 1),
                title.to_string(),
                start,
                end,
                vec![attendee],
                EventStatus::Confirmed,
            );
            let Ok(event) = event else {
                continue;
            };
            if store.insert(event).is_ok() {
                created += 1;
            }
        }
    }

    created
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    fn monday_midnight() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 13, 0, 0, 0).unwrap()
    }

    #[test]
    fn same_seed_same_fixture() {
        let policy = SchedulingPolicy::default();
        let mut first = EventStore::strict();
        let mut second = EventStore::strict();

        let a = seed_demo_events(&mut first, &policy, monday_midnight(), 42);
        let b = seed_demo_events(&mut second, &policy, monday_midnight(), 42);

        assert_eq!(a, b);
        let lhs: Vec<_> = first
            .events()
            .iter()
            .map(|e| (e.start_time, e.end_time, e.title.clone()))
            .collect();
        let rhs: Vec<_> = second
            .events()
            .iter()
            .map(|e| (e.start_time, e.end_time, e.title.clone()))
            .collect();
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn fixture_respects_working_days_and_hours() {
        let policy = SchedulingPolicy::default();
        let mut store = EventStore::strict();
        let created = seed_demo_events(&mut store, &policy, monday_midnight(), 7);

        assert!(created >= 2);
        for event in store.events() {
            let weekday = event.start_time.weekday().num_days_from_monday();
            assert!(!policy.excluded_weekdays.contains(&weekday));
            assert!(event.start_time.hour() >= policy.work_start_hour);
            assert!(event.start_time.hour() < policy.work_end_hour);
        }
    }

    #[test]
    fn fixture_never_overlaps_in_strict_store() {
        let policy = SchedulingPolicy::default();
        let mut store = EventStore::strict();
        seed_demo_events(&mut store, &policy, monday_midnight(), 99);

        let events = store.events();
        for (i, a) in events.iter().enumerate() {
            for b in events.iter().skip(i + 1) {
                assert!(!a.interval().overlaps(&b.interval()));
            }
        }
    }
}
