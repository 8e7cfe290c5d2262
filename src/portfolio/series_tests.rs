#[cfg(test)]
mod tests {
    use crate::portfolio::series::{
        build_date_axis, merge_event_series, merge_series, merge_series_on_axis, SeriesPoint,
    };
    use crate::utils::time_utils::end_of_day_for_date;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn point(day: u32, value: Decimal) -> SeriesPoint {
        let date = NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
        SeriesPoint::new(end_of_day_for_date(date), value)
    }

    fn values(series: &[SeriesPoint]) -> Vec<Decimal> {
        series.iter().map(|p| p.value).collect()
    }

    #[test]
    fn carry_forward_sums_across_series() {
        // A has points on d1 and d3, B only on d2; before d2, B contributes
        // zero.
        let a = vec![point(1, dec!(10)), point(3, dec!(20))];
        let b = vec![point(2, dec!(5))];
        let merged = merge_event_series(&[&a, &b]);
        assert_eq!(values(&merged), vec![dec!(10), dec!(15), dec!(25)]);
    }

    #[test]
    fn dense_axis_spans_every_day_in_range() {
        let a = vec![point(1, dec!(10)), point(5, dec!(20))];
        let b = vec![point(3, dec!(5))];
        let axis = build_date_axis(&[&a, &b]);
        assert_eq!(axis.len(), 5);
        assert_eq!(axis[0], NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(axis[4], NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());

        let merged = merge_series(&[&a, &b]);
        assert_eq!(
            values(&merged),
            vec![dec!(10), dec!(10), dec!(15), dec!(15), dec!(25)]
        );
    }

    #[test]
    fn sparse_axis_keeps_event_days_only() {
        let a = vec![point(1, dec!(10)), point(5, dec!(20))];
        let b = vec![point(3, dec!(5))];
        let merged = merge_event_series(&[&a, &b]);
        // Three event days, no fill on the 2nd and 4th.
        assert_eq!(merged.len(), 3);
        assert_eq!(values(&merged), vec![dec!(10), dec!(15), dec!(25)]);
    }

    #[test]
    fn duplicate_event_days_collapse() {
        let a = vec![point(1, dec!(10))];
        let b = vec![point(1, dec!(3))];
        let merged = merge_event_series(&[&a, &b]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].value, dec!(13));
    }

    #[test]
    fn empty_inputs_merge_to_empty() {
        assert!(merge_series(&[]).is_empty());
        let empty: Vec<SeriesPoint> = Vec::new();
        assert!(merge_series(&[&empty]).is_empty());
        assert!(merge_event_series(&[&empty]).is_empty());
    }

    #[test]
    fn axis_points_are_end_of_day_timestamps() {
        let a = vec![point(1, dec!(10))];
        let merged = merge_series_on_axis(
            &[NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()],
            &[&a],
        );
        assert_eq!(
            merged[0].date,
            end_of_day_for_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        );
    }

    #[test]
    fn axis_before_first_point_contributes_zero() {
        let a = vec![point(3, dec!(10))];
        let axis = vec![
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
        ];
        let merged = merge_series_on_axis(&axis, &[&a]);
        assert_eq!(values(&merged), vec![dec!(0), dec!(10)]);
    }
}
