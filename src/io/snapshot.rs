//! Snapshot input: a JSON dump of the host's storage collections.
//!
//! The file holds the four collections under `metrics`, `entries`,
//! `objectives`, and `milestones`; absent collections default to empty.

use std::fs;
use std::io::BufReader;
use std::path::Path;

use crate::core::{MetricardError, MetricardResult};
use crate::feed::MetricsSnapshot;

/// Read and parse a snapshot file.
pub fn read_snapshot(path: &Path) -> MetricardResult<MetricsSnapshot> {
    let file = fs::File::open(path)?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| MetricardError::Snapshot(format!("{}: {}", path.display(), e)))
}
