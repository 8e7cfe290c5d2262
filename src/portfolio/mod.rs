//! Portfolio module - aggregation engine, merge utility, and pipeline.

pub mod account_aggregator;
pub mod checksum;
pub mod holding_aggregator;
mod interval;
mod overview;
mod portfolio_service;
mod series;

pub use account_aggregator::aggregate_account;
pub use checksum::{compute_account_checksum, compute_entries_checksum};
pub use holding_aggregator::{aggregate_holding, gather_holding_entries};
pub use interval::{filter_series, Interval};
pub use overview::{overall_summary, overall_value_history, OverviewSummary};
pub use portfolio_service::PortfolioService;
pub use series::{
    build_date_axis, merge_event_series, merge_series, merge_series_on_axis, SeriesPoint,
};


#[cfg(test)]
mod checksum_tests;


#[cfg(test)]
mod interval_tests;


#[cfg(test)]
mod series_tests;
