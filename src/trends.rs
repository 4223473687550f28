//! Peak-day detection and period-over-period growth for the daily series.
//!
//! The series is sorted chronologically by its labels before the window is
//! split, so callers may pass records in any order. Growth against an empty
//! baseline is reported as `0.0` rather than `NaN` or infinity.

use tracing::warn;

use crate::labels::parse_label;
use crate::models::DailyRecord;
use crate::stats::TrendSummary;

/// Percentage change from `previous` to `current`, or `0.0` when there is no
/// baseline to compare against.
pub fn growth_percent(previous: f64, current: f64) -> f64 {
    if previous > 0.0 {
        ((current - previous) / previous) * 100.0
    } else {
        0.0
    }
}

fn mean(records: &[&DailyRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let sum: f64 = records.iter().map(|day| day.total as f64).sum();
    sum / records.len() as f64
}

/// Orders the records by date. Falls back to arrival order when a label
/// cannot be parsed.
pub fn chronological(records: &[DailyRecord]) -> Vec<&DailyRecord> {
    let parsed: Option<Vec<_>> = records
        .iter()
        .map(|day| parse_label(&day.label).map(|date| (date, day)))
        .collect();

    match parsed {
        Some(mut dated) => {
            dated.sort_by_key(|(date, _)| *date);
            dated.into_iter().map(|(_, day)| day).collect()
        }
        None => {
            warn!(
                action = "sort",
                component = "trend_analysis",
                day_count = records.len(),
                "Unparsable day label, keeping arrival order"
            );
            records.iter().collect()
        }
    }
}

/// First record holding the highest total, in input order.
pub fn peak_day(records: &[DailyRecord]) -> Option<&DailyRecord> {
    records.iter().fold(None, |best: Option<&DailyRecord>, day| match best {
        Some(current) if current.total >= day.total => Some(current),
        _ => Some(day),
    })
}

pub fn analyze_trends(records: &[DailyRecord]) -> TrendSummary {
    let window_total = records
        .iter()
        .map(|day| day.total)
        .fold(0u64, u64::saturating_add);
    let sorted = chronological(records);

    let mut summary = TrendSummary {
        average_daily_total: mean(&sorted),
        window_total,
        peak_day: peak_day(records).cloned(),
        ..TrendSummary::default()
    };

    if sorted.len() < 2 {
        return summary;
    }

    let (first_half, second_half) = sorted.split_at(sorted.len() / 2);
    summary.period_growth_percent = growth_percent(mean(first_half), mean(second_half));

    if let [.., previous, last] = sorted.as_slice() {
        summary.today_growth_percent = growth_percent(previous.total as f64, last.total as f64);
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Trend;

    fn day(label: &str, total: u64) -> DailyRecord {
        DailyRecord {
            label: label.to_string(),
            total,
            ..DailyRecord::default()
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn computes_growth_for_even_window() {
        let records = vec![
            day("2024-03-01", 10),
            day("2024-03-02", 20),
            day("2024-03-03", 30),
            day("2024-03-04", 40),
        ];

        let summary = analyze_trends(&records);
        assert!(approx(summary.period_growth_percent, 133.33));
        assert!(approx(summary.today_growth_percent, 33.33));
        assert!(approx(summary.average_daily_total, 25.0));
        assert_eq!(summary.window_total, 100);
        assert_eq!(summary.peak_day.clone().map(|d| d.total), Some(40));
        assert_eq!(summary.period_trend(), Trend::Up);
    }

    #[test]
    fn odd_window_puts_extra_day_in_second_half() {
        let records = vec![day("2024-03-01", 10), day("2024-03-02", 20), day("2024-03-03", 30)];

        // first half [10], second half [20, 30]
        let summary = analyze_trends(&records);
        assert!(approx(summary.period_growth_percent, 150.0));
        assert!(approx(summary.today_growth_percent, 50.0));
    }

    #[test]
    fn is_invariant_to_input_order() {
        let ordered = vec![
            day("2024-03-01", 10),
            day("2024-03-02", 20),
            day("2024-03-03", 30),
            day("2024-03-04", 40),
        ];
        let shuffled = vec![
            ordered[2].clone(),
            ordered[0].clone(),
            ordered[3].clone(),
            ordered[1].clone(),
        ];

        assert_eq!(analyze_trends(&ordered), analyze_trends(&shuffled));
    }

    #[test]
    fn single_record_has_no_growth() {
        let summary = analyze_trends(&[day("2024-03-01", 7)]);
        assert_eq!(summary.period_growth_percent, 0.0);
        assert_eq!(summary.today_growth_percent, 0.0);
        assert_eq!(summary.average_daily_total, 7.0);
        assert_eq!(summary.peak_day, Some(day("2024-03-01", 7)));
    }

    #[test]
    fn empty_input_is_neutral() {
        let summary = analyze_trends(&[]);
        assert_eq!(summary, TrendSummary::default());
    }

    #[test]
    fn zero_baseline_gives_zero_growth() {
        let records = vec![day("2024-03-01", 0), day("2024-03-02", 0), day("2024-03-03", 5)];

        let summary = analyze_trends(&records);
        assert_eq!(summary.period_growth_percent, 0.0);
        assert_eq!(summary.today_growth_percent, 0.0);
        assert!(!summary.period_growth_percent.is_nan());
    }

    #[test]
    fn declining_traffic_has_negative_growth() {
        let records = vec![day("2024-03-01", 40), day("2024-03-02", 20)];

        let summary = analyze_trends(&records);
        assert!(approx(summary.period_growth_percent, -50.0));
        assert!(approx(summary.today_growth_percent, -50.0));
        assert_eq!(summary.today_trend(), Trend::Down);
    }

    #[test]
    fn peak_ties_resolve_to_first_in_input_order() {
        let records = vec![day("2024-03-03", 9), day("2024-03-01", 9), day("2024-03-02", 3)];

        let summary = analyze_trends(&records);
        assert_eq!(summary.peak_day.map(|d| d.label), Some("2024-03-03".to_string()));
    }

    #[test]
    fn unparsable_labels_keep_arrival_order() {
        let records = vec![day("tuesday", 30), day("monday", 10)];

        let sorted = chronological(&records);
        assert_eq!(sorted[0].label, "tuesday");

        let summary = analyze_trends(&records);
        assert!(approx(summary.today_growth_percent, -66.67));
    }

    #[test]
    fn partially_parsable_labels_keep_arrival_order() {
        let records = vec![day("2024-03-02", 20), day("garbage", 5), day("2024-03-01", 10)];

        let sorted = chronological(&records);
        let labels: Vec<&str> = sorted.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["2024-03-02", "garbage", "2024-03-01"]);

        // last vs second-to-last in arrival order: 10 against 5
        let summary = analyze_trends(&records);
        assert!(approx(summary.today_growth_percent, 100.0));
    }

    #[test]
    fn huge_totals_do_not_overflow() {
        let records = vec![day("2024-03-01", u64::MAX), day("2024-03-02", 1)];

        let summary = analyze_trends(&records);
        assert_eq!(summary.window_total, u64::MAX);
        assert!(summary.average_daily_total > 9.0e18);
        assert!(approx(summary.today_growth_percent, -100.0));
        assert_eq!(summary.peak_day.map(|d| d.total), Some(u64::MAX));
    }

    #[test]
    fn growth_percent_guards_zero_baseline() {
        assert_eq!(growth_percent(0.0, 10.0), 0.0);
        assert!(approx(growth_percent(30.0, 40.0), 33.33));
    }
}
