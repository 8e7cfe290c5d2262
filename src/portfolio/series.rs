//! Step-function time series and the multi-series merge utility.
//!
//! A series holds its last known value until its next data point; a queried
//! date before the first point contributes zero. Two merge variants exist on
//! purpose: the account aggregator merges on a dense daily axis, while the
//! cross-account overview rollup merges on the union of event dates only.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::utils::time_utils::{end_of_day_for_date, get_days_between};

/// One point of a step-function time series. Points are keyed by the end of
/// their calendar day, ascending, one point per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    pub date: DateTime<Utc>,
    pub value: Decimal,
}

impl SeriesPoint {
    pub fn new(date: DateTime<Utc>, value: Decimal) -> Self {
        SeriesPoint { date, value }
    }
}

/// Builds the dense daily axis for a set of series: every calendar day from
/// the earliest to the latest point across all inputs, inclusive.
pub fn build_date_axis(series_list: &[&[SeriesPoint]]) -> Vec<NaiveDate> {
    let mut min: Option<NaiveDate> = None;
    let mut max: Option<NaiveDate> = None;
    for series in series_list {
        for point in *series {
            let day = point.date.date_naive();
            min = Some(min.map_or(day, |m| m.min(day)));
            max = Some(max.map_or(day, |m| m.max(day)));
        }
    }
    match (min, max) {
        (Some(start), Some(end)) => get_days_between(start, end),
        _ => Vec::new(),
    }
}

/// Merges several series on a dense daily axis derived from the inputs.
pub fn merge_series(series_list: &[&[SeriesPoint]]) -> Vec<SeriesPoint> {
    let axis = build_date_axis(series_list);
    merge_series_on_axis(&axis, series_list)
}

/// Merges several series on the union of their event dates only (no dense
/// fill). Used by the cross-account overview rollup.
pub fn merge_event_series(series_list: &[&[SeriesPoint]]) -> Vec<SeriesPoint> {
    let axis: BTreeSet<NaiveDate> = series_list
        .iter()
        .flat_map(|series| series.iter().map(|p| p.date.date_naive()))
        .collect();
    let axis: Vec<NaiveDate> = axis.into_iter().collect();
    merge_series_on_axis(&axis, series_list)
}

/// Evaluates every series at each axis date with step-function carry-forward
/// and sums the contributions. The axis must be ascending; a series with no
/// point at or before an axis date contributes zero there.
pub fn merge_series_on_axis(
    axis: &[NaiveDate],
    series_list: &[&[SeriesPoint]],
) -> Vec<SeriesPoint> {
    // One cursor per input series; all series are ascending by day, so each
    // cursor only ever moves forward.
    let mut cursors = vec![0usize; series_list.len()];
    let mut carried = vec![Decimal::ZERO; series_list.len()];
    let mut merged = Vec::with_capacity(axis.len());

    for &day in axis {
        let mut sum = Decimal::ZERO;
        for (idx, series) in series_list.iter().enumerate() {
            while cursors[idx] < series.len() && series[cursors[idx]].date.date_naive() <= day {
                carried[idx] = series[cursors[idx]].value;
                cursors[idx] += 1;
            }
            sum += carried[idx];
        }
        merged.push(SeriesPoint::new(end_of_day_for_date(day), sum));
    }

    merged
}
