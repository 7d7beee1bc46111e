// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod feed;
pub mod formatting;
pub mod io;
pub mod palette;
pub mod summary;

// Re-export commonly used types
pub use crate::core::{
    Aggregation, Entry, Metric, MetricCardData, MetricId, MetricKind, MetricType, MetricardError,
    MetricardResult, Milestone, Objective, ObjectiveId, Polarity, Resolution,
};

pub use crate::feed::{active_objective, build_feed, card_for_metric, MetricsSnapshot};

pub use crate::palette::{icon_for_key, medal_gradient, metric_type_color, Rgb};

pub use crate::summary::{
    aggregate::{display_value, numeric_value, NO_VALUE},
    compute_card, event_card,
    range::{last_completed_range, period_label, DateRange},
    state_card,
    tiers::{tier_progress, TierProgress},
    ObjectiveSnapshot,
};
