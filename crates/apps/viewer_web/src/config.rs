use foundation::LatLng;
use hazards::{HazardKind, MissingCodeStyle};
use serde::Deserialize;

/// Which hazard layers start visible.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum StartupLayers {
    #[default]
    All,
    FloodOnly,
}

impl StartupLayers {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "flood-only" | "flood_only" | "flood" => StartupLayers::FloodOnly,
            _ => StartupLayers::All,
        }
    }

    pub fn visible(self, kind: HazardKind) -> bool {
        match self {
            StartupLayers::All => true,
            StartupLayers::FloodOnly => kind == HazardKind::Flood,
        }
    }
}

/// Page-supplied viewer configuration.
///
/// Every field has a deployment default (the Negros Oriental instance), so a
/// page can init with `{}` and still get a working map.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: f64,
    /// Appended to every geocode query to keep results in-region.
    pub search_region: String,
    pub facility_radius_m: u32,
    /// `"all"` or `"flood-only"`.
    pub startup_layers: String,
    /// `"no-data"` (gray) or `"safe"` (green) for missing susceptibility.
    pub missing_code_style: String,
    /// Backend base URL; empty means same-origin.
    pub api_base: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: 9.3,
            center_lng: 123.3,
            zoom: 9.0,
            search_region: "Negros Oriental, Philippines".to_string(),
            facility_radius_m: 3000,
            startup_layers: "all".to_string(),
            missing_code_style: "no-data".to_string(),
            api_base: String::new(),
        }
    }
}

impl MapConfig {
    pub fn center(&self) -> LatLng {
        LatLng::new(self.center_lat, self.center_lng)
    }

    pub fn startup_layers(&self) -> StartupLayers {
        StartupLayers::from_str(&self.startup_layers)
    }

    pub fn missing_code_style(&self) -> MissingCodeStyle {
        MissingCodeStyle::from_str(&self.missing_code_style)
    }
}
