//! Cosmetic lookup tables: medal gradients, metric-type accents, icons.
//!
//! Purely presentational data. Lookups are total; unknown keys fall back to
//! neutral values instead of failing.

use serde::{Deserialize, Serialize};

use crate::core::MetricType;

/// Solid sRGB color carried in card data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Render as "#RRGGBB".
    pub fn to_hex_string(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Neutral gray-blue used when no medal color applies.
pub const NO_TIER: Rgb = Rgb::from_hex(0x7F8FA6);

/// Medal gradient pair for a milestone name, case-insensitive.
///
/// Any name outside the fixed bronze/silver/gold/diamond set maps to the
/// neutral gradient.
pub fn medal_gradient(name: &str) -> (Rgb, Rgb) {
    match name.to_lowercase().as_str() {
        "bronze" => (Rgb::from_hex(0xE17055), Rgb::from_hex(0xFAB1A0)),
        "silver" => (Rgb::from_hex(0xB9C1C6), Rgb::from_hex(0xF2F4F5)),
        "gold" => (Rgb::from_hex(0xFDCB6E), Rgb::from_hex(0xFFEAA7)),
        "diamond" => (Rgb::from_hex(0x0284C7), Rgb::from_hex(0x5BC0DE)),
        _ => (NO_TIER, NO_TIER),
    }
}

/// Accent used when a card has no achieved tier gradient.
pub fn metric_type_color(metric_type: MetricType) -> Rgb {
    match metric_type {
        MetricType::Boolean => Rgb::from_hex(0x00B894),
        MetricType::Int => Rgb::from_hex(0x6C5CE7),
    }
}

/// Icon name for a stored icon key.
///
/// Unknown or missing keys resolve to the generic target icon.
pub fn icon_for_key(key: Option<&str>) -> &'static str {
    match key {
        Some("directions_run") => "directions_run",
        Some("restaurant") => "restaurant",
        Some("nights_stay") => "nights_stay",
        Some("code") => "code",
        Some("savings") => "savings",
        Some("monitor_weight") => "monitor_weight",
        Some("people") => "people",
        _ => "track_changes",
    }
}
