#[cfg(test)]
mod tests {
    use crate::holdings::Holding;
    use crate::ledger::{EntrySubCategory, LedgerEntry, NewLedgerEntry};
    use crate::portfolio::checksum::{compute_account_checksum, compute_entries_checksum};
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    fn buy(id: &str, day: u32, price: Decimal, amount: Decimal) -> LedgerEntry {
        let mut entry = NewLedgerEntry {
            account_id: "acc-1".to_string(),
            holding_name: Some("ACME".to_string()),
            sub_category: EntrySubCategory::Buy,
            date: Utc.with_ymd_and_hms(2024, 1, day, 10, 0, 0).unwrap(),
            price: Some(price),
            amount,
            total: price * amount,
            notes: None,
        }
        .build()
        .unwrap();
        entry.id = id.to_string();
        entry
    }

    #[test]
    fn equal_content_equal_checksum() {
        let a = vec![buy("e1", 1, dec!(10), dec!(5)), buy("e2", 2, dec!(12), dec!(5))];
        let b = a.clone();
        assert_eq!(compute_entries_checksum(&a), compute_entries_checksum(&b));
    }

    #[test]
    fn decimal_scale_does_not_shift_checksum() {
        let a = vec![buy("e1", 1, dec!(10), dec!(5))];
        let mut b = a.clone();
        b[0].amount = dec!(5.00);
        b[0].price = Some(dec!(10.0));
        assert_eq!(compute_entries_checksum(&a), compute_entries_checksum(&b));
    }

    #[test]
    fn order_matters() {
        let e1 = buy("e1", 1, dec!(10), dec!(5));
        let e2 = buy("e2", 2, dec!(12), dec!(5));
        assert_ne!(
            compute_entries_checksum(&[e1.clone(), e2.clone()]),
            compute_entries_checksum(&[e2, e1])
        );
    }

    #[test]
    fn every_field_is_covered() {
        let base = vec![buy("e1", 1, dec!(10), dec!(5))];
        let reference = compute_entries_checksum(&base);
        let mut seen = HashSet::new();
        seen.insert(reference.clone());

        let mutations: Vec<Box<dyn Fn(&mut LedgerEntry)>> = vec![
            Box::new(|e| e.id = "other".to_string()),
            Box::new(|e| e.date = e.date + chrono::Duration::milliseconds(1)),
            Box::new(|e| e.sub_category = EntrySubCategory::Sell),
            Box::new(|e| e.price = Some(dec!(10.01))),
            Box::new(|e| e.price = None),
            Box::new(|e| e.amount = dec!(6)),
            Box::new(|e| e.total = dec!(51)),
            Box::new(|e| e.holding_name = Some("ZENO".to_string())),
            Box::new(|e| e.holding_name = None),
        ];
        for mutate in mutations {
            let mut mutated = base.clone();
            mutate(&mut mutated[0]);
            assert!(
                seen.insert(compute_entries_checksum(&mutated)),
                "mutation collided with a previous checksum"
            );
        }

        // Adding or removing an entry shifts the fingerprint too.
        let mut extended = base.clone();
        extended.push(buy("e2", 2, dec!(12), dec!(5)));
        assert!(seen.insert(compute_entries_checksum(&extended)));
        assert!(seen.insert(compute_entries_checksum(&[])));
    }

    #[test]
    fn account_checksum_tracks_holding_checksums() {
        let entries = vec![buy("e1", 1, dec!(10), dec!(5))];
        let mut holding = Holding::new("ACME");
        holding.derived.checksum = "aaaa".to_string();
        let before = compute_account_checksum(&entries, std::slice::from_ref(&holding));
        holding.derived.checksum = "bbbb".to_string();
        let after = compute_account_checksum(&entries, std::slice::from_ref(&holding));
        assert_ne!(before, after);
    }

    proptest! {
        /// Any change to price, amount, or total yields a new fingerprint.
        #[test]
        fn numeric_mutations_never_collide(
            price in 1i64..100_000,
            amount in 1i64..100_000,
            bump in 1i64..1_000,
        ) {
            let base = vec![buy("e1", 1, Decimal::from(price), Decimal::from(amount))];
            let reference = compute_entries_checksum(&base);

            let mut mutated = base.clone();
            mutated[0].amount = Decimal::from(amount + bump);
            prop_assert_ne!(&compute_entries_checksum(&mutated), &reference);

            let mut mutated = base.clone();
            mutated[0].price = Some(Decimal::from(price + bump));
            prop_assert_ne!(&compute_entries_checksum(&mutated), &reference);

            let mut mutated = base;
            mutated[0].total += Decimal::from(bump);
            prop_assert_ne!(&compute_entries_checksum(&mutated), &reference);
        }
    }
}
