//! Chart display intervals and series filtering.

use chrono::{Duration, Months, NaiveDate};
use std::str::FromStr;

use crate::errors::{Error, Result, ValidationError};
use crate::portfolio::series::SeriesPoint;

/// Display interval for portfolio charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    OneWeek,
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
    All,
}

impl Interval {
    /// Resolves a static interval key from the chart configuration.
    ///
    /// # Panics
    ///
    /// Panics on an unrecognized key: the keys are a closed set wired into
    /// the chart filter bar, so an unknown one is a configuration bug, not a
    /// runtime data issue. Use the `FromStr` impl for untrusted input.
    pub fn from_key(key: &str) -> Self {
        match Interval::from_str(key) {
            Ok(interval) => interval,
            Err(_) => panic!("Unsupported chart interval key: {key}"),
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            Interval::OneWeek => "1W",
            Interval::OneMonth => "1M",
            Interval::ThreeMonths => "3M",
            Interval::SixMonths => "6M",
            Interval::OneYear => "1Y",
            Interval::All => "ALL",
        }
    }

    /// First day included in the interval, relative to `reference`.
    /// `None` means unbounded (`All`).
    pub fn start_date(&self, reference: NaiveDate) -> Option<NaiveDate> {
        match self {
            Interval::OneWeek => Some(reference - Duration::days(7)),
            Interval::OneMonth => reference.checked_sub_months(Months::new(1)),
            Interval::ThreeMonths => reference.checked_sub_months(Months::new(3)),
            Interval::SixMonths => reference.checked_sub_months(Months::new(6)),
            Interval::OneYear => reference.checked_sub_months(Months::new(12)),
            Interval::All => None,
        }
    }
}

impl FromStr for Interval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "1W" => Ok(Interval::OneWeek),
            "1M" => Ok(Interval::OneMonth),
            "3M" => Ok(Interval::ThreeMonths),
            "6M" => Ok(Interval::SixMonths),
            "1Y" => Ok(Interval::OneYear),
            "ALL" => Ok(Interval::All),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown interval key: {other}"
            )))),
        }
    }
}

/// Keeps the points of a series that fall inside the interval ending at
/// `reference`.
pub fn filter_series(
    series: &[SeriesPoint],
    interval: Interval,
    reference: NaiveDate,
) -> Vec<SeriesPoint> {
    match interval.start_date(reference) {
        Some(start) => series
            .iter()
            .filter(|p| p.date.date_naive() >= start)
            .cloned()
            .collect(),
        None => series.to_vec(),
    }
}
