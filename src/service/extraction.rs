use async_trait::async_trait;

pub const DEFAULT_DURATION_MINUTES: i64 = 60;
pub const DEFAULT_PURPOSE: &str = "General Meeting";

/// What the extractor could pull out of a free-text meeting request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedMeetingInfo {
    pub duration_minutes: i64,
    pub purpose: String,
}

/// Narrow seam around the best-effort text heuristics, so a smarter NLU
/// component can replace them without touching the scheduling core.
#[async_trait]
pub trait MeetingInfoExtractor: Send + Sync {
    async fn extract(&self, text: &str) -> ExtractedMeetingInfo;
}

pub struct HeuristicExtractor;

#[async_trait]
impl MeetingInfoExtractor for HeuristicExtractor {
    async fn extract(&self, text: &str) -> ExtractedMeetingInfo {
        extract_meeting_info(text)
    }
}

pub fn extract_meeting_info(text: &str) -> ExtractedMeetingInfo {
    ExtractedMeetingInfo {
        duration_minutes: extract_duration(text),
        purpose: extract_purpose(text),
    }
}

fn extract_duration(text: &str) -> i64 {
    let lower = text.to_lowercase();
    if let Some(minutes) = number_before_unit(&lower, &["minute", "min"]) {
        return minutes;
    }
    if let Some(hours) = number_before_unit(&lower, &["hour", "hr"]) {
        return hours * 60;
    }
    if lower.contains("half an hour") || lower.contains("half hour") {
        return 30;
    }
    if lower.contains("an hour") {
        return 60;
    }
    DEFAULT_DURATION_MINUTES
}

// Finds a number directly before one of the unit words, allowing spaces or
// a hyphen in between ("30 minutes", "45-minute", "2hr").
fn number_before_unit(lower: &str, units: &[&str]) -> Option<i64> {
    let bytes = lower.as_bytes();
    for unit in units {
        let mut search = 0;
        while let Some(found) = lower[search..].find(unit) {
            let at = search + found;
            let mut end = at;
            while end > 0 && (bytes[end - 1] == b' ' || bytes[end - 1] == b'-') {
                end -= 1;
            }
            let mut begin = end;
            while begin > 0 && bytes[begin - 1].is_ascii_digit() {
                begin -= 1;
            }
            if begin < end {
                if let Ok(value) = lower[begin..end].parse::<i64>() {
                    return Some(value);
                }
            }
            search = at + unit.len();
        }
    }
    None
}

const PURPOSE_KEYWORDS: [&str; 5] = [
    "discuss",
    "about",
    "regarding",
    "talk about",
    "meeting about",
];

// Anchors a short excerpt of the original text at the first purpose keyword.
// Only valid for inputs where lowercasing preserves byte offsets, which holds
// for ASCII; anything else falls back to the default purpose.
fn extract_purpose(text: &str) -> String {
    let lower = text.to_lowercase();
    for keyword in PURPOSE_KEYWORDS {
        if let Some(idx) = lower.find(keyword) {
            if let Some(tail) = text.get(idx..) {
                let cut = tail
                    .char_indices()
                    .nth(50)
                    .map(|(i, _)| i)
                    .unwrap_or(tail.len());
                return tail[..cut].trim().to_string();
            }
        }
    }
    DEFAULT_PURPOSE.to_string()
}
