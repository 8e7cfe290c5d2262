//! Holding-level aggregation: one left-fold over the holding's entries.

use chrono::NaiveDate;
use log::warn;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::constants::DECIMAL_PRECISION;
use crate::holdings::{Holding, HoldingDerived};
use crate::ledger::{EntryCategory, EntrySubCategory, LedgerEntry};
use crate::portfolio::series::SeriesPoint;
use crate::utils::time_utils::end_of_day_for_date;

/// Gathers the entries that affect one holding: its own trading/adjustment
/// entries plus the owning account's dividend entries that reference the
/// holding by name.
pub fn gather_holding_entries(
    holding: &Holding,
    account_entries: &[LedgerEntry],
) -> Vec<LedgerEntry> {
    let mut entries = holding.entries.clone();
    entries.extend(
        account_entries
            .iter()
            .filter(|e| {
                e.sub_category == EntrySubCategory::Dividend
                    && e.holding_name.as_deref() == Some(holding.name.as_str())
            })
            .cloned(),
    );
    entries
}

/// Folds a holding's entries (ascending by date, stable for same-day ties)
/// into its derived scalar summaries and time series.
///
/// The caller owns checksum gating and persistence; this fold is pure. The
/// `checksum` field of the result is left empty.
pub fn aggregate_holding(entries: &[LedgerEntry]) -> HoldingDerived {
    let mut sorted: Vec<&LedgerEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.date);

    let mut last_price = Decimal::ZERO;
    let mut amount = Decimal::ZERO;
    let mut transaction_sum = Decimal::ZERO;
    let mut total = Decimal::ZERO;
    let mut dividend_sum = Decimal::ZERO;

    // Day-keyed maps collapse same-day events to one point, last value wins.
    let mut value_days: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    let mut return_days: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    let mut dividend_days: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    let mut fees_days: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();

    for entry in sorted {
        let day = entry.date.date_naive();
        match entry.category {
            EntryCategory::Trading => {
                if let Some(price) = entry.price {
                    last_price = price;
                }
                amount += entry.amount;
                // Intentionally the running last price, not the entry's own:
                // captures price drift between the trade and the last known
                // quote-bearing entry.
                transaction_sum += last_price * entry.amount;
                total += entry.total;
                fees_days.insert(day, total - transaction_sum);
            }
            EntryCategory::Adjustment => {
                if let Some(price) = entry.price {
                    last_price = price;
                }
                // Adjustments restate the position, they do not trade it.
                amount = entry.amount;
            }
            EntryCategory::Cash if entry.sub_category == EntrySubCategory::Dividend => {
                dividend_sum += entry.amount;
                dividend_days.insert(day, dividend_sum);
                // Dividends do not alter position or value.
                continue;
            }
            other => {
                warn!(
                    "Entry {} with category {} does not belong on a holding. Skipped.",
                    entry.id, other
                );
                continue;
            }
        }
        let value = amount * last_price;
        value_days.insert(day, value);
        return_days.insert(day, value - total);
    }

    let value = last_price * amount;
    let return_value = value - total;
    let return_percentage = if value.is_zero() || total.is_zero() {
        Decimal::ZERO
    } else {
        (return_value / total.abs() * Decimal::ONE_HUNDRED).round_dp(DECIMAL_PRECISION)
    };
    let average_price = if amount.is_zero() {
        Decimal::ZERO
    } else {
        (transaction_sum / amount).round_dp(DECIMAL_PRECISION)
    };

    HoldingDerived {
        amount,
        last_price,
        transaction_sum,
        total_cost: total,
        fees: total - transaction_sum,
        average_price,
        average_value: average_price * amount,
        value,
        return_value,
        return_percentage,
        dividend_sum,
        value_history: to_series(value_days),
        return_history: to_series(return_days),
        dividend_history: to_series(dividend_days),
        fees_history: to_series(fees_days),
        checksum: String::new(),
    }
}

fn to_series(days: BTreeMap<NaiveDate, Decimal>) -> Vec<SeriesPoint> {
    days.into_iter()
        .map(|(day, value)| SeriesPoint::new(end_of_day_for_date(day), value))
        .collect()
}
