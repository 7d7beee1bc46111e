//! Configuration loaded from `.metricard.toml`.
//!
//! The file is discovered by walking up from the current directory, parsed
//! once, and cached for the process lifetime. Invalid values warn and fall
//! back to defaults; a missing file is not an error.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricardConfig {
    #[serde(default)]
    pub output: Option<OutputConfig>,
    #[serde(default)]
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when no `--format` flag is given
    pub default_format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Width of the terminal progress bar, in cells
    #[serde(default = "default_progress_bar_width")]
    pub progress_bar_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            progress_bar_width: default_progress_bar_width(),
        }
    }
}

fn default_progress_bar_width() -> usize {
    12
}

impl DisplayConfig {
    /// Validate that the bar width renders sensibly
    pub fn validate(&self) -> Result<(), String> {
        if (4..=80).contains(&self.progress_bar_width) {
            Ok(())
        } else {
            Err(format!(
                "progress_bar_width must be between 4 and 80, got {}",
                self.progress_bar_width
            ))
        }
    }
}

/// Cache the configuration
static CONFIG: OnceLock<MetricardConfig> = OnceLock::new();

fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

pub(crate) fn parse_and_validate_config(contents: &str) -> Result<MetricardConfig, String> {
    let mut config = toml::from_str::<MetricardConfig>(contents)
        .map_err(|e| format!("Failed to parse .metricard.toml: {}", e))?;

    if let Some(ref display) = config.display {
        if let Err(e) = display.validate() {
            log::warn!("Invalid display config: {}. Using defaults.", e);
            config.display = Some(DisplayConfig::default());
        }
    }

    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<MetricardConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read config file {}: {}", config_path.display(), e);
            }
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load configuration from `.metricard.toml` if one exists in the current
/// directory or any ancestor.
pub fn load_config() -> MetricardConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("Failed to get current directory: {}. Using default config.", e);
            return MetricardConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(".metricard.toml"))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_default()
}

/// Get the cached configuration
pub fn get_config() -> &'static MetricardConfig {
    CONFIG.get_or_init(load_config)
}

/// Configured default output format, if any
pub fn default_format() -> Option<String> {
    get_config()
        .output
        .as_ref()
        .and_then(|o| o.default_format.clone())
}

/// Terminal progress bar width (configured or default)
pub fn progress_bar_width() -> usize {
    get_config()
        .display
        .as_ref()
        .map(|d| d.progress_bar_width)
        .unwrap_or_else(default_progress_bar_width)
}
