#[cfg(test)]
mod tests {
    use crate::ledger::{classify_adjustment, EntrySubCategory, LedgerEntry, NewLedgerEntry};
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn adjustment(price: Decimal, amount: Decimal) -> LedgerEntry {
        NewLedgerEntry {
            account_id: "acc-1".to_string(),
            holding_name: Some("ACME".to_string()),
            sub_category: EntrySubCategory::Update,
            date: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
            price: Some(price),
            amount,
            total: dec!(0),
            notes: None,
        }
        .build()
        .unwrap()
    }

    #[test]
    fn amount_up_price_down_is_stock_split() {
        let previous = adjustment(dec!(10), dec!(5));
        let edited = adjustment(dec!(5), dec!(10));
        assert_eq!(
            classify_adjustment(&previous, &edited),
            EntrySubCategory::StockSplit
        );
    }

    #[test]
    fn amount_down_price_up_is_merger() {
        let previous = adjustment(dec!(10), dec!(10));
        let edited = adjustment(dec!(20), dec!(5));
        assert_eq!(
            classify_adjustment(&previous, &edited),
            EntrySubCategory::Merger
        );
    }

    #[test]
    fn price_change_alone_is_price_update() {
        let previous = adjustment(dec!(10), dec!(5));
        let edited = adjustment(dec!(15), dec!(5));
        assert_eq!(
            classify_adjustment(&previous, &edited),
            EntrySubCategory::PriceUpdate
        );
    }

    #[test]
    fn amount_change_alone_is_amount_update() {
        let previous = adjustment(dec!(10), dec!(5));
        let edited = adjustment(dec!(10), dec!(8));
        assert_eq!(
            classify_adjustment(&previous, &edited),
            EntrySubCategory::AmountUpdate
        );
    }

    #[test]
    fn both_up_is_price_update_first() {
        // Both deltas positive matches neither split nor merger; price rule
        // wins by priority.
        let previous = adjustment(dec!(10), dec!(5));
        let edited = adjustment(dec!(12), dec!(6));
        assert_eq!(
            classify_adjustment(&previous, &edited),
            EntrySubCategory::PriceUpdate
        );
    }

    #[test]
    fn no_change_keeps_previous_sub_category() {
        let mut previous = adjustment(dec!(10), dec!(5));
        previous.sub_category = EntrySubCategory::StockSplit;
        let edited = adjustment(dec!(10), dec!(5));
        assert_eq!(
            classify_adjustment(&previous, &edited),
            EntrySubCategory::StockSplit
        );
    }

    #[test]
    fn gaining_a_price_counts_as_price_change() {
        let mut previous = adjustment(dec!(0), dec!(5));
        previous.price = None;
        let edited = adjustment(dec!(10), dec!(5));
        assert_eq!(
            classify_adjustment(&previous, &edited),
            EntrySubCategory::PriceUpdate
        );
    }
}
