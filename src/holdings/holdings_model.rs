//! Holding domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::LedgerEntry;
use crate::portfolio::SeriesPoint;

/// A tracked position within an account (e.g. a stock).
///
/// Owns the trading and adjustment entries that affect it. Dividends for the
/// holding live on the account and are matched by name during aggregation.
/// Holdings are auto-created the first time a trading or dividend entry names
/// them and are never implicitly deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub name: String,
    pub entries: Vec<LedgerEntry>,
    /// Materialized aggregation cache; recomputed, never user-edited.
    #[serde(default)]
    pub derived: HoldingDerived,
    pub created_at: DateTime<Utc>,
}

impl Holding {
    pub fn new(name: impl Into<String>) -> Self {
        Holding {
            name: name.into(),
            entries: Vec::new(),
            derived: HoldingDerived::default(),
            created_at: Utc::now(),
        }
    }
}

/// Derived figures for one holding, produced by the holding aggregator.
///
/// Invalidated by a checksum mismatch against the holding's current entry
/// set; equal content means the whole struct is guaranteed unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingDerived {
    /// Position size after all entries.
    pub amount: Decimal,
    /// Last seen non-null unit price.
    pub last_price: Decimal,
    /// Cumulative running-price contribution of trading entries.
    pub transaction_sum: Decimal,
    /// Cumulative signed monetary total of trading entries.
    pub total_cost: Decimal,
    /// `total_cost - transaction_sum`.
    pub fees: Decimal,
    pub average_price: Decimal,
    pub average_value: Decimal,
    /// `last_price * amount`.
    pub value: Decimal,
    /// `value - total_cost`.
    pub return_value: Decimal,
    pub return_percentage: Decimal,
    /// Cumulative dividend cash received for this holding.
    pub dividend_sum: Decimal,
    pub value_history: Vec<SeriesPoint>,
    pub return_history: Vec<SeriesPoint>,
    pub dividend_history: Vec<SeriesPoint>,
    pub fees_history: Vec<SeriesPoint>,
    /// Fingerprint of the entry set these figures were derived from.
    pub checksum: String,
}
