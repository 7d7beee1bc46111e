//! Record types read from the host application's storage layer.
//!
//! Everything here is an immutable snapshot row. The computation module
//! owns none of it: creation, cascade deletion, and uniqueness constraints
//! (one entry per metric and period) are storage responsibilities.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type MetricId = u64;
pub type ObjectiveId = u64;

/// How a metric is observed: discrete occurrences, or a state that is
/// sampled and only ever displayed at its latest value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Event,
    State,
}

/// Value type of a metric's entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricType {
    Boolean,
    Int,
}

/// Granularity of logging or display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Resolution {
    /// Get the display name for this resolution
    pub fn display_label(&self) -> &'static str {
        match self {
            Resolution::Daily => "Daily",
            Resolution::Weekly => "Weekly",
            Resolution::Monthly => "Monthly",
            Resolution::Yearly => "Yearly",
        }
    }

    /// Headline period label for event cards at this display resolution.
    pub fn headline_period_label(&self) -> &'static str {
        // TODO: the daily label reads "Last week" even though the resolved
        // range is only yesterday; revisit the label table together with
        // the host UI copy.
        match self {
            Resolution::Daily => "Last week",
            Resolution::Weekly => "Last month",
            Resolution::Monthly => "Last year",
            Resolution::Yearly => "Last year",
        }
    }
}

/// How multiple entries within a period combine into one headline value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    Total,
    Average,
    Latest,
}

impl Aggregation {
    /// Get the display name for this aggregation
    pub fn display_label(&self) -> &'static str {
        match self {
            Aggregation::Total => "Total",
            Aggregation::Average => "Average",
            Aggregation::Latest => "Latest",
        }
    }
}

/// Direction in which an objective's value is considered an improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    HigherIsBetter,
    LowerIsBetter,
}

/// A tracked quantity or event type the user defines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub id: MetricId,
    pub name: String,
    pub kind: MetricKind,
    #[serde(rename = "type")]
    pub metric_type: MetricType,
    #[serde(default)]
    pub unit: Option<String>,
    pub logging_resolution: Resolution,
    /// Only meaningful for event metrics; state metrics always show latest.
    pub display_resolution: Resolution,
    pub display_aggregation: Aggregation,
    #[serde(default)]
    pub accent_color: Option<u32>,
    #[serde(default)]
    pub icon_key: Option<String>,
    /// Epoch milliseconds.
    #[serde(default)]
    pub created_at: i64,
}

/// One logged observation for a metric over an inclusive date period.
///
/// A single day for daily logs, a 7-day span for weekly logs, and so on.
/// At most one of the two value fields is populated, matching the metric's
/// value type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub id: u64,
    pub metric_id: MetricId,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    #[serde(default)]
    pub value_int: Option<i64>,
    #[serde(default)]
    pub value_bool: Option<bool>,
    #[serde(default)]
    pub created_at: i64,
}

impl Entry {
    /// Raw numeric view of the stored value, `None` when nothing was
    /// recorded for the metric's value type.
    pub fn numeric_value(&self, metric_type: MetricType) -> Option<f64> {
        match metric_type {
            MetricType::Int => self.value_int.map(|v| v as f64),
            MetricType::Boolean => self.value_bool.map(|v| if v { 1.0 } else { 0.0 }),
        }
    }
}

/// A goal attached to a metric over an evaluation date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    pub id: ObjectiveId,
    pub metric_id: MetricId,
    pub name: String,
    pub evaluation_start: NaiveDate,
    pub evaluation_end: NaiveDate,
    pub aggregation_type: Aggregation,
    pub polarity: Polarity,
    #[serde(default)]
    pub created_at: i64,
}

/// A named threshold within an objective's tier ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    #[serde(default)]
    pub id: u64,
    pub objective_id: ObjectiveId,
    pub name: String,
    pub threshold_value: i64,
    /// Tie-break ordering when two milestones share a threshold value.
    #[serde(default)]
    pub rank: i32,
}

/// Error types for the application
#[derive(Debug, thiserror::Error)]
pub enum MetricardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot parse error: {0}")]
    Snapshot(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias
pub type MetricardResult<T> = Result<T, MetricardError>;
