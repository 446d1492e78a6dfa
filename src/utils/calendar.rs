// Calendar boundaries for the dashboard windows. Everything is UTC.
use chrono::{DateTime, Datelike, Duration, NaiveTime, TimeZone, Utc};

/// Midnight of the day containing `instant`.
pub fn start_of_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    Utc.from_utc_datetime(&instant.date_naive().and_time(NaiveTime::MIN))
}

/// Midnight of the most recent Monday (today when today is a Monday).
pub fn start_of_week(instant: DateTime<Utc>) -> DateTime<Utc> {
    let days_since_monday = instant.weekday().num_days_from_monday() as i64;
    start_of_day(instant) - Duration::days(days_since_monday)
}

/// Midnight of the 1st of the month containing `instant`.
pub fn start_of_month(instant: DateTime<Utc>) -> DateTime<Utc> {
    start_of_day(instant) - Duration::days(instant.day0() as i64)
}

/// Last whole second of the day starting at `day_start` (23:59:59).
///
/// Sub-second instants after this and before the next midnight fall outside
/// the day's bucket.
pub fn end_of_day(day_start: DateTime<Utc>) -> DateTime<Utc> {
    day_start + Duration::seconds(86_399)
}

/// Three letter English weekday, e.g. "Mon".
pub fn weekday_abbrev(instant: DateTime<Utc>) -> String {
    instant.format("%a").to_string()
}
