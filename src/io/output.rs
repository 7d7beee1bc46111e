//! Card output writers: terminal table, markdown, and JSON.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use colored::*;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};

use crate::config;
use crate::core::MetricCardData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait CardWriter {
    fn write_cards(&mut self, cards: &[MetricCardData]) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> CardWriter for JsonWriter<W> {
    fn write_cards(&mut self, cards: &[MetricCardData]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(cards)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> CardWriter for MarkdownWriter<W> {
    fn write_cards(&mut self, cards: &[MetricCardData]) -> anyhow::Result<()> {
        writeln!(self.writer, "# Metric Cards")?;
        writeln!(self.writer)?;
        if cards.is_empty() {
            writeln!(self.writer, "No metrics in snapshot.")?;
            return Ok(());
        }
        writeln!(
            self.writer,
            "| Metric | Value | Period | Aggregation | Tier | Progress | Next |"
        )?;
        writeln!(
            self.writer,
            "|--------|-------|--------|-------------|------|----------|------|"
        )?;
        for card in cards {
            self.write_card_row(card)?;
        }
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_card_row(&mut self, card: &MetricCardData) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "| {} | {} | {} | {} | {} | {} | {} |",
            card.name,
            headline_value(card),
            card.display_period_label,
            card.display_aggregation_label,
            card.tier_label.as_deref().unwrap_or(""),
            percent_label(card),
            card.next_milestone_label.as_deref().unwrap_or(""),
        )?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    bar_width: usize,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, bar_width: usize) -> Self {
        Self { writer, bar_width }
    }
}

impl<W: Write> CardWriter for TerminalWriter<W> {
    fn write_cards(&mut self, cards: &[MetricCardData]) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Metric Cards".bold().blue())?;
        writeln!(self.writer, "{}", "============".blue())?;
        writeln!(self.writer)?;

        if cards.is_empty() {
            writeln!(self.writer, "No metrics in snapshot.")?;
            return Ok(());
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                "Metric",
                "Value",
                "Period",
                "Aggregation",
                "Logs",
                "Tier",
                "Progress",
                "Next",
            ]);
        for card in cards {
            table.add_row(vec![
                card.name.clone(),
                headline_value(card),
                card.display_period_label.clone(),
                card.display_aggregation_label.clone(),
                card.log_resolution_label.clone(),
                card.tier_label.clone().unwrap_or_default(),
                progress_cell(card, self.bar_width),
                card.next_milestone_label.clone().unwrap_or_default(),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        writeln!(
            self.writer,
            "{}",
            format!("{} metrics", cards.len()).dimmed()
        )?;
        Ok(())
    }
}

fn headline_value(card: &MetricCardData) -> String {
    match card.unit.as_deref() {
        Some(unit) if !unit.is_empty() => format!("{} {}", card.value, unit),
        _ => card.value.clone(),
    }
}

fn percent_label(card: &MetricCardData) -> String {
    card.progress
        .map(|p| format!("{:.0}%", p * 100.0))
        .unwrap_or_default()
}

fn progress_cell(card: &MetricCardData, width: usize) -> String {
    match card.progress {
        Some(progress) => format!("{} {:>3.0}%", progress_bar(progress, width), progress * 100.0),
        None => String::new(),
    }
}

fn progress_bar(fraction: f64, width: usize) -> String {
    let width = width.max(1);
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    let mut bar = String::with_capacity(width * 3);
    for _ in 0..filled {
        bar.push('█');
    }
    for _ in filled..width {
        bar.push('░');
    }
    bar
}

/// Build a writer for the requested format, targeting stdout or a file.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn CardWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout()),
    };
    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink, config::progress_bar_width())),
    })
}
