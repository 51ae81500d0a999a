use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};

use crate::error::ScheduleError;
use crate::store::EventStore;

pub const DEFAULT_WORK_START_HOUR: u32 = 9;
pub const DEFAULT_WORK_END_HOUR: u32 = 17;
pub const DEFAULT_HORIZON_DAYS: u32 = 14;
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Search policy for slot discovery. Weekday indices are 0-based from Monday,
/// so the default excluded set {5, 6} is Saturday and Sunday.
#[derive(Debug, Clone)]
pub struct SchedulingPolicy {
    pub work_start_hour: u32,
    pub work_end_hour: u32,
    pub horizon_days: u32,
    pub max_results: usize,
    pub excluded_weekdays: Vec<u32>,
}

impl Default for SchedulingPolicy {
    fn default() -> Self {
        Self {
            work_start_hour: DEFAULT_WORK_START_HOUR,
            work_end_hour: DEFAULT_WORK_END_HOUR,
            horizon_days: DEFAULT_HORIZON_DAYS,
            max_results: DEFAULT_MAX_RESULTS,
            excluded_weekdays: vec![5, 6],
        }
    }
}

/// Scans working-hour start times from the reference day forward and returns
/// up to `policy.max_results` available starts in chronological order.
///
/// Days and hours are visited in ascending order, so the output needs no
/// sorting. An empty result is a normal outcome, not an error.
pub fn find_slots(
    duration_minutes: i64,
    policy: &SchedulingPolicy,
    store: &EventStore,
    reference: DateTime<Utc>,
) -> Result<Vec<DateTime<Utc>>, ScheduleError> {
    if duration_minutes <= 0 {
        return Err(ScheduleError::InvalidDuration(duration_minutes));
    }

    let duration = Duration::minutes(duration_minutes);
    let mut slots = Vec::new();

    'days: for day_offset in 0..policy.horizon_days {
        let date = (reference + Duration::days(i64::from(day_offset))).date_naive();
        if policy
            .excluded_weekdays
            .contains(&date.weekday().num_days_from_monday())
        {
            continue;
        }

        let Some(close) = date.and_hms_opt(policy.work_end_hour, 0, 0) else {
            continue;
        };
        let close = Utc.from_utc_datetime(&close);

        for hour in policy.work_start_hour..policy.work_end_hour {
            let Some(naive_start) = date.and_hms_opt(hour, 0, 0) else {
                continue;
            };
            let start = Utc.from_utc_datetime(&naive_start);
            let end = start + duration;
            // The meeting must end by closing time, in real clock time.
            // Later hours only end later, so the rest of the day is done.
            if end > close {
                break;
            }
            if store.is_available(start, end)? {
                slots.push(start);
                if slots.len() >= policy.max_results {
                    break 'days;
                }
            }
        }
    }

    Ok(slots)
}
