use anyhow::Result;
use clap::Parser;
use metricard::cli::{Cli, Commands};
use metricard::commands::card::{run_card, CardOptions};
use metricard::commands::feed::{run_feed, FeedOptions};
use metricard::commands::init::init_config;
use metricard::formatting::FormattingConfig;
use metricard::io::output::OutputFormat;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Feed {
            snapshot,
            format,
            output,
            date,
            plain,
        } => {
            apply_formatting(plain);
            run_feed(FeedOptions {
                snapshot,
                format: resolve_format(format),
                output,
                date,
            })
        }
        Commands::Card {
            snapshot,
            name,
            format,
            output,
            date,
            plain,
        } => {
            apply_formatting(plain);
            run_card(CardOptions {
                snapshot,
                name,
                format: resolve_format(format),
                output,
                date,
            })
        }
        Commands::Init { force } => init_config(force),
    }
}

fn apply_formatting(plain: bool) {
    let config = if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    };
    config.apply();
}

// Flag wins over the config file; terminal is the fallback.
fn resolve_format(flag: Option<metricard::cli::OutputFormat>) -> OutputFormat {
    flag.map(convert_format)
        .or_else(|| {
            metricard::config::default_format()
                .as_deref()
                .and_then(parse_format)
        })
        .unwrap_or(OutputFormat::Terminal)
}

fn convert_format(format: metricard::cli::OutputFormat) -> OutputFormat {
    match format {
        metricard::cli::OutputFormat::Terminal => OutputFormat::Terminal,
        metricard::cli::OutputFormat::Json => OutputFormat::Json,
        metricard::cli::OutputFormat::Markdown => OutputFormat::Markdown,
    }
}

fn parse_format(s: &str) -> Option<OutputFormat> {
    match s.to_lowercase().as_str() {
        "terminal" => Some(OutputFormat::Terminal),
        "json" => Some(OutputFormat::Json),
        "markdown" => Some(OutputFormat::Markdown),
        _ => {
            log::warn!("unknown default_format '{}' in config, using terminal", s);
            None
        }
    }
}
