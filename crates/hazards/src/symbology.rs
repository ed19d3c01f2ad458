use serde::Serialize;

use crate::susceptibility::Susceptibility;

/// Fixed susceptibility palette (hex fill colors).
pub const COLOR_LOW: &str = "#10b981";
pub const COLOR_MODERATE: &str = "#f59e0b";
pub const COLOR_HIGH: &str = "#f97316";
pub const COLOR_VERY_HIGH: &str = "#ef4444";
pub const COLOR_DEBRIS_FLOW: &str = "#7f1d1d";

/// Neutral gray used when a feature carries no usable susceptibility code.
pub const COLOR_NO_DATA: &str = "#9ca3af";

/// Returns the palette fill color for a susceptibility code.
pub fn fill_color(level: Susceptibility) -> &'static str {
    match level {
        Susceptibility::Low => COLOR_LOW,
        Susceptibility::Moderate => COLOR_MODERATE,
        Susceptibility::High => COLOR_HIGH,
        Susceptibility::VeryHigh => COLOR_VERY_HIGH,
        Susceptibility::DebrisFlow => COLOR_DEBRIS_FLOW,
    }
}

/// What an absent or unrecognized susceptibility code should read as.
///
/// Upstream datasets disagree: some treat missing polygons as "no data
/// collected" (gray), others as "no elevated hazard" (green). Both renderings
/// exist in deployed variants, so the choice is configuration.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum MissingCodeStyle {
    #[default]
    NoData,
    NoElevatedHazard,
}

impl MissingCodeStyle {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "safe" | "green" | "no-elevated-hazard" | "no_elevated_hazard" => {
                MissingCodeStyle::NoElevatedHazard
            }
            _ => MissingCodeStyle::NoData,
        }
    }

    pub fn fill_color(self) -> &'static str {
        match self {
            MissingCodeStyle::NoData => COLOR_NO_DATA,
            MissingCodeStyle::NoElevatedHazard => COLOR_LOW,
        }
    }
}

/// Resolved paint for one polygon, ready for the map bridge.
///
/// Stroke and opacity constants match the deployed styling: thin translucent
/// white outline over a 60%-opaque fill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeaturePaint {
    #[serde(rename = "fillColor")]
    pub fill_color: &'static str,
    #[serde(rename = "fillOpacity")]
    pub fill_opacity: f64,
    pub color: &'static str,
    pub weight: f64,
    pub opacity: f64,
}

impl FeaturePaint {
    pub fn for_level(level: Option<Susceptibility>, missing: MissingCodeStyle) -> Self {
        let fill = match level {
            Some(level) => fill_color(level),
            None => missing.fill_color(),
        };
        Self {
            fill_color: fill,
            fill_opacity: 0.6,
            color: "rgba(255,255,255,0.4)",
            weight: 0.5,
            opacity: 1.0,
        }
    }
}
