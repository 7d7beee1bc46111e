//! Milestone ladder evaluation.
//!
//! Positions a current value on an objective's milestone ladder: achieved
//! and next tiers, overall progress, and per-segment fills for a segmented
//! progress bar. Missing milestones or a missing value mean no tier data;
//! the ladder never produces an error.

use serde::Serialize;

use crate::core::Milestone;

/// Computed position of a current value on a milestone ladder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierProgress {
    /// Name of the highest milestone reached, if any.
    pub achieved: Option<String>,
    /// Name of the lowest milestone still ahead, if any.
    pub next: Option<String>,
    /// Achieved name, or "No tier".
    pub tier_label: String,
    /// "Next: {name}", or "Top tier" once the ladder is complete.
    pub next_milestone_label: String,
    /// `clamp(value / max(1, last_threshold), 0, 1)`.
    pub progress: f64,
    /// Fill fraction per segment, each in `[0, 1]`.
    pub segment_fills: Vec<f64>,
    /// Relative width per segment, each at least 1.
    pub segment_weights: Vec<f64>,
}

impl TierProgress {
    pub fn has_tier(&self) -> bool {
        self.achieved.is_some()
    }
}

/// Evaluate a value against a milestone ladder.
///
/// Returns `None` when there are no milestones or no current value, in
/// which case the card carries no progress bar and no tier label.
///
/// Milestones are evaluated sorted ascending by threshold regardless of
/// stored order; `rank` breaks ties between equal thresholds.
///
/// ```
/// use metricard::core::Milestone;
/// use metricard::summary::tiers::tier_progress;
///
/// let ladder = vec![
///     Milestone { id: 1, objective_id: 1, name: "Bronze".into(), threshold_value: 10, rank: 0 },
///     Milestone { id: 2, objective_id: 1, name: "Silver".into(), threshold_value: 20, rank: 1 },
/// ];
/// let tier = tier_progress(&ladder, Some(15.0)).unwrap();
/// assert_eq!(tier.tier_label, "Bronze");
/// assert_eq!(tier.next_milestone_label, "Next: Silver");
/// assert_eq!(tier.progress, 0.75);
/// ```
pub fn tier_progress(milestones: &[Milestone], value: Option<f64>) -> Option<TierProgress> {
    let value = value?;
    if milestones.is_empty() {
        return None;
    }

    let mut sorted: Vec<&Milestone> = milestones.iter().collect();
    sorted.sort_by_key(|m| (m.threshold_value, m.rank));

    let mut segment_fills = Vec::with_capacity(sorted.len());
    let mut segment_weights = Vec::with_capacity(sorted.len());
    let mut previous = 0i64;
    for milestone in &sorted {
        segment_weights.push((milestone.threshold_value - previous).max(1) as f64);
        segment_fills.push(segment_fill(value, previous, milestone.threshold_value));
        previous = milestone.threshold_value;
    }

    let last_threshold = sorted.last().map(|m| m.threshold_value).unwrap_or(0);
    let progress = (value / last_threshold.max(1) as f64).clamp(0.0, 1.0);

    let achieved = sorted
        .iter()
        .rev()
        .find(|m| value >= m.threshold_value as f64);
    let next = sorted.iter().find(|m| value < m.threshold_value as f64);

    Some(TierProgress {
        tier_label: achieved
            .map(|m| m.name.clone())
            .unwrap_or_else(|| "No tier".to_string()),
        next_milestone_label: next
            .map(|m| format!("Next: {}", m.name))
            .unwrap_or_else(|| "Top tier".to_string()),
        achieved: achieved.map(|m| m.name.clone()),
        next: next.map(|m| m.name.clone()),
        progress,
        segment_fills,
        segment_weights,
    })
}

// A zero-width segment (duplicate thresholds) fills all-or-nothing so the
// result stays render-safe.
fn segment_fill(value: f64, start: i64, end: i64) -> f64 {
    let span = (end - start) as f64;
    if span <= 0.0 {
        if value >= end as f64 {
            1.0
        } else {
            0.0
        }
    } else {
        ((value - start as f64) / span).clamp(0.0, 1.0)
    }
}
