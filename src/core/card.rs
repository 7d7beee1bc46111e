//! The display-ready card record produced by the summary computation.

use serde::Serialize;

use crate::palette::Rgb;

/// Presentation record for one metric.
///
/// Every string field is pre-formatted for direct display and every numeric
/// field is pre-clamped to a displayable range. Cards are recomputed from
/// scratch on every upstream change and never persisted.
///
/// Tier and objective fields are `None` when the metric has no objective,
/// the objective has no milestones, or no current value exists to evaluate
/// against the ladder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCardData {
    pub name: String,
    /// Headline value: a number, "Yes"/"No", a percentage, or a placeholder.
    pub value: String,
    pub unit: Option<String>,
    pub display_period_label: String,
    pub display_aggregation_label: String,
    /// E.g. "Logs daily".
    pub log_resolution_label: String,
    /// Achieved milestone name, or "No tier" when a ladder exists but no
    /// milestone is reached yet.
    pub tier_label: Option<String>,
    pub tier_gradient_start: Option<Rgb>,
    pub tier_gradient_end: Option<Rgb>,
    pub next_tier_label: Option<String>,
    /// "Next: {name}" or "Top tier".
    pub next_milestone_label: Option<String>,
    /// Overall ladder progress in `[0, 1]`.
    pub progress: Option<f64>,
    /// Per-segment fill fractions, each in `[0, 1]`.
    pub progress_segments: Option<Vec<f64>>,
    /// Relative widths of the ladder segments, each at least 1.
    pub segment_weights: Option<Vec<f64>>,
    pub objective_period_label: Option<String>,
    pub objective_aggregation_label: Option<String>,
    /// True when an achieved tier supplies the accent gradient.
    pub use_gradient: bool,
    pub accent_start: Rgb,
    pub accent_end: Rgb,
    /// Icon name resolved from the metric's icon key.
    pub icon: String,
}
