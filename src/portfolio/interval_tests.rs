#[cfg(test)]
mod tests {
    use crate::portfolio::interval::{filter_series, Interval};
    use crate::portfolio::series::SeriesPoint;
    use crate::utils::time_utils::end_of_day_for_date;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    fn point(year: i32, month: u32, day: u32) -> SeriesPoint {
        SeriesPoint::new(
            end_of_day_for_date(NaiveDate::from_ymd_opt(year, month, day).unwrap()),
            dec!(1),
        )
    }

    #[test]
    fn known_keys_resolve() {
        assert_eq!(Interval::from_key("1W"), Interval::OneWeek);
        assert_eq!(Interval::from_key("3M"), Interval::ThreeMonths);
        assert_eq!(Interval::from_key("ALL"), Interval::All);
        assert_eq!(Interval::OneYear.as_key(), "1Y");
    }

    #[test]
    #[should_panic(expected = "Unsupported chart interval key")]
    fn unknown_key_is_a_configuration_bug() {
        let _ = Interval::from_key("2W");
    }

    #[test]
    fn from_str_reports_unknown_keys_as_validation_errors() {
        assert!(Interval::from_str("2W").is_err());
        assert_eq!(Interval::from_str("6M").unwrap(), Interval::SixMonths);
    }

    #[test]
    fn filter_keeps_points_inside_the_window() {
        let series = vec![
            point(2023, 1, 15),
            point(2023, 11, 1),
            point(2024, 2, 20),
            point(2024, 3, 1),
        ];
        let reference = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        let month = filter_series(&series, Interval::OneMonth, reference);
        assert_eq!(month.len(), 2);

        let year = filter_series(&series, Interval::OneYear, reference);
        assert_eq!(year.len(), 3);

        let all = filter_series(&series, Interval::All, reference);
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn week_window_is_seven_days() {
        let reference = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(
            Interval::OneWeek.start_date(reference),
            Some(NaiveDate::from_ymd_opt(2024, 3, 3).unwrap())
        );
        assert_eq!(Interval::All.start_date(reference), None);
    }
}
