//! Feed assembly: join storage snapshots into an ordered card list.
//!
//! The host observes its collections and calls [`build_feed`] whenever any
//! of them changes. Each call is an independent recomputation over
//! immutable snapshot data, so stale in-flight results can simply be
//! discarded by the caller. Per-metric computation reads only that
//! metric's rows and runs in parallel.

use chrono::NaiveDate;
use im::Vector;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{
    Entry, Metric, MetricCardData, MetricId, MetricKind, Milestone, Objective, ObjectiveId,
};
use crate::summary::range::{last_completed_range, DateRange};
use crate::summary::{self, ObjectiveSnapshot};

/// Immutable snapshot of every collection the feed depends on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    #[serde(default)]
    pub metrics: Vector<Metric>,
    #[serde(default)]
    pub entries: Vector<Entry>,
    #[serde(default)]
    pub objectives: Vector<Objective>,
    #[serde(default)]
    pub milestones: Vector<Milestone>,
}

/// Compute one card per metric, ordered by metric name.
pub fn build_feed(snapshot: &MetricsSnapshot, today: NaiveDate) -> Vec<MetricCardData> {
    let mut metrics: Vec<&Metric> = snapshot.metrics.iter().collect();
    metrics.sort_by(|a, b| a.name.cmp(&b.name));
    metrics
        .par_iter()
        .map(|metric| card_for_metric(metric, snapshot, today))
        .collect()
}

/// Compute the card for one metric out of a full snapshot.
pub fn card_for_metric(
    metric: &Metric,
    snapshot: &MetricsSnapshot,
    today: NaiveDate,
) -> MetricCardData {
    let entries = relevant_entries(metric, snapshot, today);
    let objective = active_objective(metric.id, &snapshot.objectives, today).map(|objective| {
        ObjectiveSnapshot {
            milestones: milestones_for(objective.id, &snapshot.milestones),
            objective: objective.clone(),
        }
    });
    summary::compute_card(metric, &entries, objective.as_ref())
}

// State metrics read their single most recent entry; event metrics read
// everything inside the last completed display period.
fn relevant_entries(metric: &Metric, snapshot: &MetricsSnapshot, today: NaiveDate) -> Vec<Entry> {
    let for_metric = snapshot.entries.iter().filter(|e| e.metric_id == metric.id);
    match metric.kind {
        MetricKind::State => for_metric
            .max_by_key(|e| e.period_end)
            .cloned()
            .into_iter()
            .collect(),
        MetricKind::Event => {
            let range = last_completed_range(metric.display_resolution, today);
            let mut entries: Vec<Entry> = for_metric
                .filter(|e| range.encloses(e.period_start, e.period_end))
                .cloned()
                .collect();
            entries.sort_by_key(|e| e.period_start);
            entries
        }
    }
}

/// Select the objective the card is evaluated against.
///
/// Among the metric's objectives whose evaluation window contains `today`,
/// the most recently created wins; when none is in window, fall back to
/// the most recently created overall. Deterministic regardless of storage
/// iteration order.
pub fn active_objective<'a>(
    metric_id: MetricId,
    objectives: &'a Vector<Objective>,
    today: NaiveDate,
) -> Option<&'a Objective> {
    let mine = || objectives.iter().filter(|o| o.metric_id == metric_id);
    mine()
        .filter(|o| DateRange::new(o.evaluation_start, o.evaluation_end).contains(today))
        .max_by_key(|o| o.created_at)
        .or_else(|| mine().max_by_key(|o| o.created_at))
}

fn milestones_for(objective_id: ObjectiveId, milestones: &Vector<Milestone>) -> Vec<Milestone> {
    milestones
        .iter()
        .filter(|m| m.objective_id == objective_id)
        .cloned()
        .collect()
}
