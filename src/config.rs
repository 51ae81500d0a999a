use std::collections::HashMap;
use std::fs;

use crate::service::slot_finder::SchedulingPolicy;

pub const DEFAULT_OWNER_EMAIL: &str = "owner@company.com";
pub const DEFAULT_API_PORT: u16 = 8080;

#[derive(Debug, Default, Clone)]
pub struct AppConfig {
    values: HashMap<String, String>,
}

impl AppConfig {
    pub fn from_file(path: &str) -> Result<Self, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        let mut values = HashMap::new();
        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(format!("Invalid config line {}: {}", idx + 1, line));
            };
            let key = key.trim();
            let mut value = value.trim().to_string();
            if (value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\''))
            {
                value = value[1..value.len() - 1].to_string();
            }
            values.insert(key.to_string(), value);
        }
        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Builds the scheduling policy from config/env properties, falling back to
/// the defaults (9-17 working hours, 14-day horizon, 5 results, weekends
/// excluded). `get_prop` is the caller's config-then-env lookup.
pub fn scheduling_policy<F>(get_prop: F) -> SchedulingPolicy
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = SchedulingPolicy::default();
    let parse_hour = |key: &str, fallback: u32| -> u32 {
        get_prop(key)
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|h| *h <= 23)
            .unwrap_or(fallback)
    };

    let excluded_weekdays = get_prop("EXCLUDED_WEEKDAYS")
        .map(|csv| {
            csv.split(',')
                .filter_map(|part| part.trim().parse::<u32>().ok())
                .filter(|day| *day < 7)
                .collect()
        })
        .unwrap_or(defaults.excluded_weekdays);

    SchedulingPolicy {
        work_start_hour: parse_hour("WORK_START_HOUR", defaults.work_start_hour),
        work_end_hour: parse_hour("WORK_END_HOUR", defaults.work_end_hour),
        horizon_days: get_prop("HORIZON_DAYS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.horizon_days),
        max_results: get_prop("MAX_RESULTS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_results),
        excluded_weekdays,
    }
}
