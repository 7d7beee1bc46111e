pub mod card;
pub mod types;

pub use self::card::MetricCardData;
pub use self::types::{
    Aggregation, Entry, Metric, MetricId, MetricKind, MetricType, MetricardError, MetricardResult,
    Milestone, Objective, ObjectiveId, Polarity, Resolution,
};
