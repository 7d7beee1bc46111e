use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use im::Vector;
use metricard::{
    build_feed, Aggregation, Entry, Metric, MetricKind, MetricType, MetricsSnapshot, Milestone,
    Objective, Polarity, Resolution,
};

fn synthetic_snapshot(metric_count: u64, entries_per_metric: u64) -> MetricsSnapshot {
    let mut metrics = Vec::new();
    let mut entries = Vec::new();
    let mut objectives = Vec::new();
    let mut milestones = Vec::new();

    for id in 1..=metric_count {
        metrics.push(Metric {
            id,
            name: format!("metric-{id:03}"),
            kind: MetricKind::Event,
            metric_type: MetricType::Int,
            unit: None,
            logging_resolution: Resolution::Daily,
            display_resolution: Resolution::Weekly,
            display_aggregation: Aggregation::Total,
            accent_color: None,
            icon_key: None,
            created_at: 0,
        });

        for day in 0..entries_per_metric {
            let date = NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .checked_add_days(chrono::Days::new(day % 28))
                .unwrap();
            entries.push(Entry {
                id: id * 1_000 + day,
                metric_id: id,
                period_start: date,
                period_end: date,
                value_int: Some((day % 7) as i64),
                value_bool: None,
                created_at: 0,
            });
        }

        objectives.push(Objective {
            id,
            metric_id: id,
            name: format!("objective-{id:03}"),
            evaluation_start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            evaluation_end: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            aggregation_type: Aggregation::Total,
            polarity: Polarity::HigherIsBetter,
            created_at: 0,
        });

        for (rank, (name, threshold)) in [("Bronze", 10), ("Silver", 20), ("Gold", 40)]
            .iter()
            .enumerate()
        {
            milestones.push(Milestone {
                id: id * 10 + rank as u64,
                objective_id: id,
                name: name.to_string(),
                threshold_value: *threshold,
                rank: rank as i32,
            });
        }
    }

    MetricsSnapshot {
        metrics: Vector::from(metrics),
        entries: Vector::from(entries),
        objectives: Vector::from(objectives),
        milestones: Vector::from(milestones),
    }
}

fn bench_build_feed(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap();

    let small = synthetic_snapshot(10, 30);
    c.bench_function("build_feed_10_metrics", |b| {
        b.iter(|| build_feed(black_box(&small), black_box(today)))
    });

    let large = synthetic_snapshot(200, 60);
    c.bench_function("build_feed_200_metrics", |b| {
        b.iter(|| build_feed(black_box(&large), black_box(today)))
    });
}

criterion_group!(benches, bench_build_feed);
criterion_main!(benches);
