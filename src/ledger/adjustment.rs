//! Classification of edited adjustment entries.

use log::debug;

use super::ledger_model::{EntryCategory, EntrySubCategory, LedgerEntry};

/// Infers the sub-type of an edited adjustment entry from the direction of
/// its price/amount deltas against the previously persisted values.
///
/// Priority order, first match wins:
/// 1. amount increased and price decreased -> `StockSplit`
/// 2. amount decreased and price increased -> `Merger`
/// 3. price changed (either direction)     -> `PriceUpdate`
/// 4. amount changed (either direction)    -> `AmountUpdate`
/// 5. no recognized change                 -> previous sub-category,
///    falling back to `Update` if the previous entry was not an adjustment.
///
/// Only meaningful for entries with category `Adjustment`; the comparison is
/// against the entry's own prior state, never against trading history.
pub fn classify_adjustment(previous: &LedgerEntry, edited: &LedgerEntry) -> EntrySubCategory {
    let prev_price = previous.price_or_zero();
    let new_price = edited.price_or_zero();
    let price_changed = previous.price != edited.price;
    let amount_changed = previous.amount != edited.amount;

    let classified = if edited.amount > previous.amount && new_price < prev_price {
        EntrySubCategory::StockSplit
    } else if edited.amount < previous.amount && new_price > prev_price {
        EntrySubCategory::Merger
    } else if price_changed {
        EntrySubCategory::PriceUpdate
    } else if amount_changed {
        EntrySubCategory::AmountUpdate
    } else if previous.category == EntryCategory::Adjustment {
        previous.sub_category
    } else {
        EntrySubCategory::Update
    };

    debug!(
        "Classified adjustment {} as {} (price {} -> {}, amount {} -> {})",
        edited.id, classified, prev_price, new_price, previous.amount, edited.amount
    );

    classified
}
