// Test utility module for metricard integration tests
#![allow(dead_code)]

use chrono::NaiveDate;
use im::Vector;
use metricard::{
    Aggregation, Entry, Metric, MetricId, MetricKind, MetricType, MetricsSnapshot, Milestone,
    Objective, ObjectiveId, Polarity, Resolution,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn event_metric(id: MetricId, name: &str, metric_type: MetricType) -> Metric {
    Metric {
        id,
        name: name.to_string(),
        kind: MetricKind::Event,
        metric_type,
        unit: None,
        logging_resolution: Resolution::Daily,
        display_resolution: Resolution::Weekly,
        display_aggregation: Aggregation::Total,
        accent_color: None,
        icon_key: None,
        created_at: 0,
    }
}

pub fn state_metric(id: MetricId, name: &str, metric_type: MetricType) -> Metric {
    Metric {
        kind: MetricKind::State,
        display_aggregation: Aggregation::Latest,
        ..event_metric(id, name, metric_type)
    }
}

pub fn int_entry(metric_id: MetricId, day: NaiveDate, value: i64) -> Entry {
    Entry {
        id: 0,
        metric_id,
        period_start: day,
        period_end: day,
        value_int: Some(value),
        value_bool: None,
        created_at: 0,
    }
}

pub fn bool_entry(metric_id: MetricId, day: NaiveDate, value: bool) -> Entry {
    Entry {
        id: 0,
        metric_id,
        period_start: day,
        period_end: day,
        value_int: None,
        value_bool: Some(value),
        created_at: 0,
    }
}

pub fn objective(
    id: ObjectiveId,
    metric_id: MetricId,
    name: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Objective {
    Objective {
        id,
        metric_id,
        name: name.to_string(),
        evaluation_start: start,
        evaluation_end: end,
        aggregation_type: Aggregation::Total,
        polarity: Polarity::HigherIsBetter,
        created_at: 0,
    }
}

pub fn milestone(objective_id: ObjectiveId, name: &str, threshold: i64, rank: i32) -> Milestone {
    Milestone {
        id: 0,
        objective_id,
        name: name.to_string(),
        threshold_value: threshold,
        rank,
    }
}

pub fn snapshot(
    metrics: Vec<Metric>,
    entries: Vec<Entry>,
    objectives: Vec<Objective>,
    milestones: Vec<Milestone>,
) -> MetricsSnapshot {
    MetricsSnapshot {
        metrics: Vector::from(metrics),
        entries: Vector::from(entries),
        objectives: Vector::from(objectives),
        milestones: Vector::from(milestones),
    }
}
