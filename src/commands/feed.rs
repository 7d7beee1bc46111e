use anyhow::Result;
use chrono::NaiveDate;
use std::path::PathBuf;

use crate::feed;
use crate::io::output::{create_writer, OutputFormat};
use crate::io::snapshot::read_snapshot;

pub struct FeedOptions {
    pub snapshot: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub date: Option<NaiveDate>,
}

pub fn run_feed(options: FeedOptions) -> Result<()> {
    let snapshot = read_snapshot(&options.snapshot)?;
    let today = options.date.unwrap_or_else(super::today_local);
    log::debug!(
        "computing {} cards against {}",
        snapshot.metrics.len(),
        today
    );
    let cards = feed::build_feed(&snapshot, today);
    let mut writer = create_writer(options.format, options.output.as_deref())?;
    writer.write_cards(&cards)
}
