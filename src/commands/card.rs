use anyhow::Result;
use chrono::NaiveDate;
use std::path::PathBuf;

use crate::feed;
use crate::io::output::{create_writer, OutputFormat};
use crate::io::snapshot::read_snapshot;

pub struct CardOptions {
    pub snapshot: PathBuf,
    pub name: String,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub date: Option<NaiveDate>,
}

pub fn run_card(options: CardOptions) -> Result<()> {
    let snapshot = read_snapshot(&options.snapshot)?;
    let today = options.date.unwrap_or_else(super::today_local);

    let metric = snapshot
        .metrics
        .iter()
        .find(|m| m.name.eq_ignore_ascii_case(&options.name))
        .ok_or_else(|| {
            anyhow::anyhow!(
                "no metric named '{}' in {}",
                options.name,
                options.snapshot.display()
            )
        })?;

    let card = feed::card_for_metric(metric, &snapshot, today);
    let mut writer = create_writer(options.format, options.output.as_deref())?;
    writer.write_cards(std::slice::from_ref(&card))
}
