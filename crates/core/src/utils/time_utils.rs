use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

/// Midnight UTC at the start of the given calendar date.
pub fn start_of_day_utc(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

/// Nanoseconds since the Unix epoch.
///
/// `None` when the instant is outside the range an `i64` of nanoseconds can
/// hold (before 1677 or after 2262).
pub fn epoch_nanos(instant: DateTime<Utc>) -> Option<i64> {
    instant.timestamp_nanos_opt()
}

/// Milliseconds since the Unix epoch.
pub fn epoch_millis(instant: DateTime<Utc>) -> i64 {
    instant.timestamp_millis()
}
