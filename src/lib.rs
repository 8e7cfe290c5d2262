//! Foliotrack Core - incremental portfolio aggregation.
//!
//! This crate turns a portfolio's ledger entries (trades, cash movements,
//! adjustments, loans) into derived valuations: per-holding and per-account
//! scalar summaries plus step-function time series for charting. Persistence,
//! sync, and UI concerns are external; they reach the core only through the
//! `store::DataStoreTrait` contract.

pub mod accounts;
pub mod constants;
pub mod errors;
pub mod holdings;
pub mod ledger;
pub mod portfolio;
pub mod store;
pub mod utils;

// Re-export common types
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
