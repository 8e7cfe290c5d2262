use chrono::{DateTime, NaiveDate, Utc};

/// Normalizes a UTC instant to the end of its calendar day (23:59:59.999).
///
/// Series points are keyed by this timestamp so that all events of one day
/// collapse to a single point, last value wins.
pub fn end_of_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    end_of_day_for_date(instant.date_naive())
}

/// End-of-day timestamp (23:59:59.999 UTC) for a calendar day.
pub fn end_of_day_for_date(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .expect("23:59:59.999 is a valid time")
        .and_utc()
}

/// Returns every calendar day from `start` to `end`, inclusive.
/// Empty when `start > end`.
pub fn get_days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            // Out of calendar range; cannot happen for realistic dates.
            None => break,
        }
    }
    days
}
