//! Cross-account overview rollup for the home-screen summary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::accounts::Account;
use crate::constants::DECIMAL_PRECISION;
use crate::portfolio::series::{merge_event_series, SeriesPoint};

/// Scalar summary across all accounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewSummary {
    pub value: Decimal,
    pub return_value: Decimal,
    pub return_percentage: Decimal,
}

/// Combined value history across all accounts.
///
/// Unlike the account-level merge this axis carries event dates only, no
/// dense daily fill; each account holds its last known value between events.
pub fn overall_value_history(accounts: &[Account]) -> Vec<SeriesPoint> {
    let series: Vec<&[SeriesPoint]> = accounts
        .iter()
        .map(|a| a.derived.value_history.as_slice())
        .collect();
    merge_event_series(&series)
}

/// Sums the accounts' derived scalars into one overview card.
pub fn overall_summary(accounts: &[Account]) -> OverviewSummary {
    let mut value = Decimal::ZERO;
    let mut return_value = Decimal::ZERO;
    let mut total_cost = Decimal::ZERO;
    for account in accounts {
        value += account.derived.value;
        return_value += account.derived.return_value;
        total_cost += account.derived.total_cost;
    }
    let return_percentage = if total_cost.is_zero() {
        Decimal::ZERO
    } else {
        (return_value / total_cost.abs() * Decimal::ONE_HUNDRED).round_dp(DECIMAL_PRECISION)
    };
    OverviewSummary {
        value,
        return_value,
        return_percentage,
    }
}
