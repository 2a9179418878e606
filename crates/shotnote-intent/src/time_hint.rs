//! Relative date hints.
//!
//! Scans capture text for "tomorrow", "today"/"tonight" and weekday names
//! and turns the first hit into an absolute reminder instant. Matching is
//! case-insensitive substring containment, so "Wednesday's" still counts.

use chrono::{DateTime, Datelike, Days, Duration, Local, LocalResult, NaiveDate, TimeZone, Utc};

/// Hour used for "tomorrow" and weekday hints.
pub const MORNING_HOUR: u32 = 9;

/// Hour used for "today" and "tonight" hints.
pub const EVENING_HOUR: u32 = 18;

/// Weekday names in scan order, with Sunday=0..Saturday=6 indices.
const WEEKDAYS: [(&str, u32); 7] = [
    ("monday", 1),
    ("tuesday", 2),
    ("wednesday", 3),
    ("thursday", 4),
    ("friday", 5),
    ("saturday", 6),
    ("sunday", 0),
];

/// Extract a reminder instant relative to the local wall clock.
pub fn extract_time_hint(text: &str) -> Option<DateTime<Utc>> {
    extract_time_hint_at(text, &Local::now())
}

/// Extract a reminder instant relative to `now`.
///
/// Dates and hours are computed in `now`'s time zone. First match wins:
/// tomorrow, then today/tonight, then the first weekday name in
/// [`WEEKDAYS`] order. A weekday always resolves to a future date, so
/// "friday" on a Friday means next week.
pub fn extract_time_hint_at<Tz: TimeZone>(text: &str, now: &DateTime<Tz>) -> Option<DateTime<Utc>> {
    let lowered = text.to_lowercase();
    let tz = now.timezone();
    let today = now.date_naive();

    if lowered.contains("tomorrow") {
        return at_hour(&tz, today.checked_add_days(Days::new(1))?, MORNING_HOUR);
    }
    if lowered.contains("today") || lowered.contains("tonight") {
        return at_hour(&tz, today, EVENING_HOUR);
    }

    let (_, target) = WEEKDAYS.iter().find(|(name, _)| lowered.contains(name))?;
    let current = today.weekday().num_days_from_sunday();
    let delta = match (target + 7 - current) % 7 {
        0 => 7,
        d => d,
    };
    at_hour(&tz, today.checked_add_days(Days::new(u64::from(delta)))?, MORNING_HOUR)
}

/// Pin `date` to `hour`:00:00.000 local time in `tz`.
///
/// An ambiguous local time resolves to the earlier instant; a local time
/// skipped by a daylight-saving jump moves forward an hour at a time until
/// it exists.
fn at_hour<Tz: TimeZone>(tz: &Tz, date: NaiveDate, hour: u32) -> Option<DateTime<Utc>> {
    let naive = date.and_hms_opt(hour, 0, 0)?;
    let local = match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => (1..=3)
            .find_map(|h| tz.from_local_datetime(&(naive + Duration::hours(h))).earliest())?,
    };
    Some(local.with_timezone(&Utc))
}
