use crate::models::{NavSeries, TimeRange};

/// Keep the trailing window of `series` selected by `range`, preserving order.
///
/// `TimeRange::All` returns the series unchanged.
pub fn filter_by_range(series: &NavSeries, range: TimeRange) -> NavSeries {
    match range.trailing_periods() {
        Some(limit) => series.tail(limit),
        None => series.clone(),
    }
}

/// Same as [`filter_by_range`] but takes the raw range tag; unknown tags mean "all".
pub fn filter_by_range_tag(series: &NavSeries, tag: &str) -> NavSeries {
    filter_by_range(series, TimeRange::parse_lenient(tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NavPoint;
    use chrono::{Months, NaiveDate};

    fn monthly(n: usize) -> NavSeries {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let points = (0..n)
            .map(|i| NavPoint::new(start + Months::new(i as u32), 100.0 + i as f64))
            .collect();
        NavSeries::new(points).unwrap()
    }

    #[test]
    fn test_window_lengths() {
        let series = monthly(60);
        assert_eq!(filter_by_range(&series, TimeRange::OneMonth).len(), 1);
        assert_eq!(filter_by_range(&series, TimeRange::ThreeMonths).len(), 3);
        assert_eq!(filter_by_range(&series, TimeRange::SixMonths).len(), 6);
        assert_eq!(filter_by_range(&series, TimeRange::OneYear).len(), 12);
        assert_eq!(filter_by_range(&series, TimeRange::All).len(), 60);
    }

    #[test]
    fn test_window_keeps_latest_points_in_order() {
        let series = monthly(60);
        let window = filter_by_range(&series, TimeRange::ThreeMonths);
        assert_eq!(window.values(), vec![157.0, 158.0, 159.0]);
        assert_eq!(window.last(), series.last());
    }

    #[test]
    fn test_short_series_is_returned_whole() {
        let series = monthly(4);
        assert_eq!(filter_by_range(&series, TimeRange::OneYear), series);
    }

    #[test]
    fn test_unknown_tag_returns_everything() {
        let series = monthly(20);
        assert_eq!(filter_by_range_tag(&series, "10y"), series);
        assert_eq!(filter_by_range_tag(&series, "6m").len(), 6);
    }
}
