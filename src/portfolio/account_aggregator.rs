//! Account-level aggregation: cash/loan fold plus the merge of every child
//! holding's series into account-wide value and return series.

use chrono::NaiveDate;
use log::warn;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::accounts::AccountDerived;
use crate::constants::DECIMAL_PRECISION;
use crate::holdings::Holding;
use crate::ledger::{EntryCategory, EntrySubCategory, LedgerEntry};
use crate::portfolio::series::{build_date_axis, merge_series_on_axis, SeriesPoint};
use crate::utils::time_utils::end_of_day_for_date;

/// Folds an account's own cash/loan entries and merges the child holdings'
/// series into the account-wide derived figures.
///
/// The holdings must carry fresh derived figures: the recompute pipeline runs
/// every holding before the account (two-phase, no implicit chaining). Pure;
/// the `checksum` field of the result is left empty.
pub fn aggregate_account(
    account_entries: &[LedgerEntry],
    holdings: &[Holding],
) -> AccountDerived {
    let mut sorted: Vec<&LedgerEntry> = account_entries.iter().collect();
    sorted.sort_by_key(|e| e.date);

    let mut cash_amount = Decimal::ZERO;
    let mut loan_amount = Decimal::ZERO;
    let mut dividend_amount = Decimal::ZERO;

    let mut own_value_days: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    let mut own_return_days: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    let mut loan_days: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();

    for entry in sorted {
        let day = entry.date.date_naive();
        match entry.category {
            EntryCategory::Cash => {
                cash_amount += entry.amount;
                // Dividends without a holding reference are account-level
                // income and feed the account's own return series.
                if entry.sub_category == EntrySubCategory::Dividend
                    && entry.holding_name.is_none()
                {
                    dividend_amount += entry.amount;
                    own_return_days.insert(day, dividend_amount);
                }
            }
            EntryCategory::Loan => match entry.sub_category {
                EntrySubCategory::Disbursement => {
                    cash_amount += entry.amount;
                    loan_amount += entry.amount;
                }
                EntrySubCategory::Repayment => {
                    cash_amount -= entry.total;
                    loan_amount -= entry.amount;
                }
                other => {
                    warn!("Loan entry {} has sub-category {}. Skipped.", entry.id, other);
                    continue;
                }
            },
            other => {
                warn!(
                    "Entry {} with category {} does not belong on an account. Skipped.",
                    entry.id, other
                );
                continue;
            }
        }
        loan_days.insert(day, loan_amount);
        own_value_days.insert(day, cash_amount - loan_amount);
    }

    let own_value_series = to_series(own_value_days);
    let own_return_series = to_series(own_return_days);
    let loan_history = to_series(loan_days);

    // Holdings rollup
    let mut total_cost = Decimal::ZERO;
    let mut holdings_value = Decimal::ZERO;
    for holding in holdings {
        total_cost += holding.derived.total_cost;
        holdings_value += holding.derived.value;
    }

    // One unified date axis for both merges, dense at daily granularity over
    // the min..=max range of every contributing series.
    let mut value_inputs: Vec<&[SeriesPoint]> = vec![&own_value_series];
    let mut return_inputs: Vec<&[SeriesPoint]> = vec![&own_return_series];
    for holding in holdings {
        value_inputs.push(&holding.derived.value_history);
        return_inputs.push(&holding.derived.return_history);
    }
    let mut axis_inputs = value_inputs.clone();
    axis_inputs.extend(return_inputs.iter().copied());
    let axis = build_date_axis(&axis_inputs);

    let value_history = merge_series_on_axis(&axis, &value_inputs);
    let return_history = merge_series_on_axis(&axis, &return_inputs);

    let balance = cash_amount - total_cost;
    let value = holdings_value + balance - loan_amount;
    let return_value = value + dividend_amount - balance + loan_amount - total_cost;
    let return_percentage = if total_cost.is_zero() {
        Decimal::ZERO
    } else {
        (return_value / total_cost.abs() * Decimal::ONE_HUNDRED).round_dp(DECIMAL_PRECISION)
    };

    AccountDerived {
        cash_amount,
        loan_amount,
        balance,
        total_cost,
        holdings_value,
        dividend_amount,
        value,
        return_value,
        return_percentage,
        value_history,
        return_history,
        loan_history,
        checksum: String::new(),
    }
}

fn to_series(days: BTreeMap<NaiveDate, Decimal>) -> Vec<SeriesPoint> {
    days.into_iter()
        .map(|(day, value)| SeriesPoint::new(end_of_day_for_date(day), value))
        .collect()
}
