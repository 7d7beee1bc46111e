//! Aggregation of entries into headline values.
//!
//! Two views of the same aggregation logic: a formatted string for the card
//! headline and a raw number for milestone evaluation. The numeric view is
//! `None` exactly where the formatted view is the placeholder. Missing data
//! always degrades to a placeholder, never an error.

use crate::core::{Aggregation, Entry, MetricType};

/// Placeholder shown when no value can be derived.
pub const NO_VALUE: &str = "—";

/// Formatted headline value for a set of entries.
pub fn display_value(
    entries: &[Entry],
    metric_type: MetricType,
    aggregation: Aggregation,
) -> String {
    match aggregation {
        Aggregation::Latest => entry_display_value(latest_entry(entries), metric_type),
        Aggregation::Total => match metric_type {
            MetricType::Int => sum_int(entries).to_string(),
            MetricType::Boolean => count_true(entries).to_string(),
        },
        Aggregation::Average => match mean(&valued(entries, metric_type)) {
            Some(avg) => match metric_type {
                MetricType::Int => format_mean(avg),
                MetricType::Boolean => format_percent(avg),
            },
            None => NO_VALUE.to_string(),
        },
    }
}

/// Raw numeric twin of [`display_value`], feeding milestone comparison.
pub fn numeric_value(
    entries: &[Entry],
    metric_type: MetricType,
    aggregation: Aggregation,
) -> Option<f64> {
    match aggregation {
        Aggregation::Latest => latest_entry(entries).and_then(|e| e.numeric_value(metric_type)),
        Aggregation::Total => Some(match metric_type {
            MetricType::Int => sum_int(entries) as f64,
            MetricType::Boolean => count_true(entries) as f64,
        }),
        Aggregation::Average => mean(&valued(entries, metric_type)),
    }
}

/// Formatted value of a single entry, for state cards and LATEST display.
pub fn entry_display_value(entry: Option<&Entry>, metric_type: MetricType) -> String {
    let Some(entry) = entry else {
        return NO_VALUE.to_string();
    };
    match metric_type {
        MetricType::Int => entry
            .value_int
            .map(|v| v.to_string())
            .unwrap_or_else(|| NO_VALUE.to_string()),
        MetricType::Boolean => match entry.value_bool {
            Some(true) => "Yes".to_string(),
            Some(false) => "No".to_string(),
            None => NO_VALUE.to_string(),
        },
    }
}

/// Raw numeric value of a single entry.
pub fn entry_numeric_value(entry: Option<&Entry>, metric_type: MetricType) -> Option<f64> {
    entry.and_then(|e| e.numeric_value(metric_type))
}

fn latest_entry(entries: &[Entry]) -> Option<&Entry> {
    entries.iter().max_by_key(|e| e.period_end)
}

// Unlogged values count as zero in totals.
fn sum_int(entries: &[Entry]) -> i64 {
    entries.iter().map(|e| e.value_int.unwrap_or(0)).sum()
}

fn count_true(entries: &[Entry]) -> usize {
    entries
        .iter()
        .filter(|e| e.value_bool == Some(true))
        .count()
}

fn valued(entries: &[Entry], metric_type: MetricType) -> Vec<f64> {
    entries
        .iter()
        .filter_map(|e| e.numeric_value(metric_type))
        .collect()
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Integer string when the mean is whole, otherwise exactly one decimal.
fn format_mean(avg: f64) -> String {
    if avg.fract() == 0.0 {
        format!("{}", avg as i64)
    } else {
        format!("{avg:.1}")
    }
}

/// Rounded percentage with a trailing "%".
fn format_percent(avg: f64) -> String {
    format!("{}%", (avg * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn int_entry(d: u32, value: Option<i64>) -> Entry {
        Entry {
            id: 0,
            metric_id: 1,
            period_start: day(d),
            period_end: day(d),
            value_int: value,
            value_bool: None,
            created_at: 0,
        }
    }

    fn bool_entry(d: u32, value: Option<bool>) -> Entry {
        Entry {
            id: 0,
            metric_id: 1,
            period_start: day(d),
            period_end: day(d),
            value_int: None,
            value_bool: value,
            created_at: 0,
        }
    }

    #[test]
    fn test_latest_picks_max_period_end() {
        let entries = vec![int_entry(3, Some(7)), int_entry(9, Some(11)), int_entry(5, Some(2))];
        assert_eq!(
            display_value(&entries, MetricType::Int, Aggregation::Latest),
            "11"
        );
        assert_eq!(
            numeric_value(&entries, MetricType::Int, Aggregation::Latest),
            Some(11.0)
        );
    }

    #[test]
    fn test_latest_of_empty_set_is_placeholder() {
        assert_eq!(display_value(&[], MetricType::Int, Aggregation::Latest), NO_VALUE);
        assert_eq!(numeric_value(&[], MetricType::Int, Aggregation::Latest), None);
    }

    #[test]
    fn test_total_sums_ints_treating_missing_as_zero() {
        let entries = vec![int_entry(1, Some(3)), int_entry(2, None), int_entry(3, Some(4))];
        assert_eq!(
            display_value(&entries, MetricType::Int, Aggregation::Total),
            "7"
        );
        assert_eq!(
            numeric_value(&entries, MetricType::Int, Aggregation::Total),
            Some(7.0)
        );
    }

    #[test]
    fn test_total_counts_true_booleans() {
        let entries = vec![
            bool_entry(1, Some(true)),
            bool_entry(2, Some(false)),
            bool_entry(3, Some(true)),
            bool_entry(4, None),
        ];
        assert_eq!(
            display_value(&entries, MetricType::Boolean, Aggregation::Total),
            "2"
        );
    }

    #[test]
    fn test_total_of_empty_set_is_zero() {
        assert_eq!(display_value(&[], MetricType::Int, Aggregation::Total), "0");
        assert_eq!(display_value(&[], MetricType::Boolean, Aggregation::Total), "0");
        assert_eq!(
            numeric_value(&[], MetricType::Int, Aggregation::Total),
            Some(0.0)
        );
    }

    #[test]
    fn test_average_whole_mean_renders_as_integer() {
        let entries = vec![int_entry(1, Some(3)), int_entry(2, Some(4)), int_entry(3, Some(5))];
        assert_eq!(
            display_value(&entries, MetricType::Int, Aggregation::Average),
            "4"
        );
    }

    #[test]
    fn test_average_fractional_mean_keeps_one_decimal() {
        let entries = vec![int_entry(1, Some(3)), int_entry(2, Some(4))];
        assert_eq!(
            display_value(&entries, MetricType::Int, Aggregation::Average),
            "3.5"
        );
        assert_eq!(
            numeric_value(&entries, MetricType::Int, Aggregation::Average),
            Some(3.5)
        );
    }

    #[test]
    fn test_average_booleans_render_as_rounded_percent() {
        let entries = vec![
            bool_entry(1, Some(true)),
            bool_entry(2, Some(true)),
            bool_entry(3, Some(false)),
        ];
        assert_eq!(
            display_value(&entries, MetricType::Boolean, Aggregation::Average),
            "67%"
        );
    }

    #[test]
    fn test_average_of_empty_set_is_placeholder() {
        assert_eq!(
            display_value(&[], MetricType::Int, Aggregation::Average),
            NO_VALUE
        );
        assert_eq!(
            display_value(&[], MetricType::Boolean, Aggregation::Average),
            NO_VALUE
        );
        assert_eq!(numeric_value(&[], MetricType::Int, Aggregation::Average), None);
    }

    #[test]
    fn test_average_skips_unvalued_entries() {
        let entries = vec![int_entry(1, None), int_entry(2, Some(6))];
        assert_eq!(
            display_value(&entries, MetricType::Int, Aggregation::Average),
            "6"
        );
        // All entries unvalued degrades to the placeholder
        let unvalued = vec![int_entry(1, None), int_entry(2, None)];
        assert_eq!(
            display_value(&unvalued, MetricType::Int, Aggregation::Average),
            NO_VALUE
        );
    }

    #[test]
    fn test_entry_display_value_booleans() {
        let yes = bool_entry(1, Some(true));
        let no = bool_entry(1, Some(false));
        assert_eq!(entry_display_value(Some(&yes), MetricType::Boolean), "Yes");
        assert_eq!(entry_display_value(Some(&no), MetricType::Boolean), "No");
        assert_eq!(entry_display_value(None, MetricType::Boolean), NO_VALUE);
    }
}
