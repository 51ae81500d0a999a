use chrono::{Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use schedulerBot::models::event::{CalendarEvent, EventStatus};
use schedulerBot::models::interval::TimeInterval;
use schedulerBot::store::EventStore;

// Seeded so a failure is reproducible.
const SEED: u64 = 20250113;

fn random_interval(rng: &mut StdRng) -> TimeInterval {
    let base = Utc.with_ymd_and_hms(2025, 1, 13, 0, 0, 0).unwrap();
    let day = rng.gen_range(0..14);
    let start_minute = rng.gen_range(0..(24 * 60 - 180));
    let duration = rng.gen_range(15..=180);
    let start = base + Duration::days(day) + Duration::minutes(start_minute);
    TimeInterval::new(start, start + Duration::minutes(duration)).unwrap()
}

#[test]
fn strict_inserts_never_violate_the_no_overlap_invariant() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut store = EventStore::strict();

    for i in 0..200 {
        let interval = random_interval(&mut rng);
        let event = CalendarEvent::new(
            format!("evt_{}", i),
            "Random".to_string(),
            interval.start,
            interval.end,
            vec!["user1@company.com".to_string()],
            EventStatus::Confirmed,
        )
        .unwrap();
        // Overlapping draws are rejected; either way the invariant holds.
        let _ = store.insert(event);

        let events = store.events();
        for (a_idx, a) in events.iter().enumerate() {
            for b in events.iter().skip(a_idx + 1) {
                assert!(
                    !a.interval().overlaps(&b.interval()),
                    "events {} and {} overlap",
                    a.id,
                    b.id
                );
            }
        }
    }

    assert!(!store.is_empty());
}

#[test]
fn availability_agrees_with_the_overlap_predicate() {
    let mut rng = StdRng::seed_from_u64(SEED + 1);
    let mut store = EventStore::strict();

    for i in 0..50 {
        let interval = random_interval(&mut rng);
        let event = CalendarEvent::new(
            format!("evt_{}", i),
            "Random".to_string(),
            interval.start,
            interval.end,
            vec!["user1@company.com".to_string()],
            EventStatus::Confirmed,
        )
        .unwrap();
        let _ = store.insert(event);
    }

    for _ in 0..200 {
        let query = random_interval(&mut rng);
        let expected = !store
            .events()
            .iter()
            .any(|event| query.start < event.end_time && query.end > event.start_time);
        assert_eq!(store.is_available(query.start, query.end).unwrap(), expected);
    }
}
