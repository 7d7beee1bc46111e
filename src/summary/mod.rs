//! Card computation: one metric plus its stored context in, one
//! [`MetricCardData`] out.
//!
//! Pure and side-effect-free. The caller resolves which entries are
//! relevant (latest entry for state metrics, last-completed-period entries
//! for event metrics) and which objective is active; this module only
//! aggregates, evaluates the milestone ladder, and formats.

pub mod aggregate;
pub mod range;
pub mod tiers;

use serde::{Deserialize, Serialize};

use crate::core::{Entry, Metric, MetricCardData, MetricKind, Milestone, Objective};
use crate::palette::{self, Rgb};
use crate::summary::tiers::TierProgress;

/// An objective with its milestone ladder, as read from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveSnapshot {
    pub objective: Objective,
    pub milestones: Vec<Milestone>,
}

/// Build the card for a metric from entries the caller already restricted
/// per the metric's kind.
pub fn compute_card(
    metric: &Metric,
    entries: &[Entry],
    objective: Option<&ObjectiveSnapshot>,
) -> MetricCardData {
    match metric.kind {
        MetricKind::State => state_card(
            metric,
            entries.iter().max_by_key(|e| e.period_end),
            objective,
        ),
        MetricKind::Event => event_card(metric, entries, objective),
    }
}

/// Card for a state metric: latest-entry semantics, "Latest" labels.
pub fn state_card(
    metric: &Metric,
    latest: Option<&Entry>,
    objective: Option<&ObjectiveSnapshot>,
) -> MetricCardData {
    let value = aggregate::entry_display_value(latest, metric.metric_type);
    let numeric = aggregate::entry_numeric_value(latest, metric.metric_type);
    assemble_card(metric, value, numeric, "Latest", "Latest", objective)
}

/// Card for an event metric: aggregate the entries of the last completed
/// display period.
pub fn event_card(
    metric: &Metric,
    entries: &[Entry],
    objective: Option<&ObjectiveSnapshot>,
) -> MetricCardData {
    let value = aggregate::display_value(entries, metric.metric_type, metric.display_aggregation);
    let numeric = aggregate::numeric_value(entries, metric.metric_type, metric.display_aggregation);
    assemble_card(
        metric,
        value,
        numeric,
        metric.display_resolution.headline_period_label(),
        metric.display_aggregation.display_label(),
        objective,
    )
}

// Tier data plus its cosmetic lookups, present only when the ladder
// evaluated to something.
struct ObjectiveDisplay {
    tier: TierProgress,
    gradient_start: Rgb,
    gradient_end: Rgb,
    period_label: &'static str,
    aggregation_label: &'static str,
}

fn objective_display(snapshot: &ObjectiveSnapshot, value: Option<f64>) -> Option<ObjectiveDisplay> {
    let tier = tiers::tier_progress(&snapshot.milestones, value)?;
    let (gradient_start, gradient_end) = match tier.achieved.as_deref() {
        Some(name) => palette::medal_gradient(name),
        None => (palette::NO_TIER, palette::NO_TIER),
    };
    Some(ObjectiveDisplay {
        gradient_start,
        gradient_end,
        period_label: range::period_label(
            snapshot.objective.evaluation_start,
            snapshot.objective.evaluation_end,
        ),
        aggregation_label: snapshot.objective.aggregation_type.display_label(),
        tier,
    })
}

fn assemble_card(
    metric: &Metric,
    value: String,
    numeric: Option<f64>,
    period_label: &str,
    aggregation_label: &str,
    objective: Option<&ObjectiveSnapshot>,
) -> MetricCardData {
    let display = objective.and_then(|o| objective_display(o, numeric));
    let use_gradient = display.as_ref().is_some_and(|d| d.tier.has_tier());
    let (accent_start, accent_end) = match &display {
        Some(d) if use_gradient => (d.gradient_start, d.gradient_end),
        _ => {
            let base = palette::metric_type_color(metric.metric_type);
            (base, base)
        }
    };

    MetricCardData {
        name: metric.name.clone(),
        value,
        unit: metric.unit.clone(),
        display_period_label: period_label.to_string(),
        display_aggregation_label: aggregation_label.to_string(),
        log_resolution_label: format!(
            "Logs {}",
            metric.logging_resolution.display_label().to_lowercase()
        ),
        tier_label: display.as_ref().map(|d| d.tier.tier_label.clone()),
        tier_gradient_start: display.as_ref().map(|d| d.gradient_start),
        tier_gradient_end: display.as_ref().map(|d| d.gradient_end),
        next_tier_label: display.as_ref().and_then(|d| d.tier.next.clone()),
        next_milestone_label: display
            .as_ref()
            .map(|d| d.tier.next_milestone_label.clone()),
        progress: display.as_ref().map(|d| d.tier.progress),
        progress_segments: display.as_ref().map(|d| d.tier.segment_fills.clone()),
        segment_weights: display.as_ref().map(|d| d.tier.segment_weights.clone()),
        objective_period_label: display.as_ref().map(|d| d.period_label.to_string()),
        objective_aggregation_label: display.as_ref().map(|d| d.aggregation_label.to_string()),
        use_gradient,
        accent_start,
        accent_end,
        icon: palette::icon_for_key(metric.icon_key.as_deref()).to_string(),
    }
}
