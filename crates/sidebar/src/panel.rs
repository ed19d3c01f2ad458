use foundation::{LatLng, format_coord};
use hazards::{HazardKind, MissingCodeStyle, Susceptibility, fill_color};
use protocol::{FetchError, HazardReading, LocationHazards, LocationInfo, NearbyFacilities};

use crate::facilities::FacilityCategory;
use crate::selection::{SelectionToken, SelectionTracker};

/// Cards rendered per facility category; the remainder becomes an overflow
/// note.
pub const MAX_CARDS_PER_CATEGORY: usize = 10;

/// Lifecycle of one independently-loading sidebar panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState<T> {
    Idle,
    Loading,
    Populated(T),
    Failed(String),
}

impl<T> PanelState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, PanelState::Loading)
    }
}

/// Location identity panel view-model.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationPanel {
    /// Administrative names resolved by the backend.
    Named {
        barangay: String,
        municipality: String,
        province: String,
        lat: String,
        lng: String,
    },
    /// Fallback when the lookup fails or finds nothing: coordinates only.
    CoordinatesOnly { lat: String, lng: String },
}

/// One row of the hazard breakdown panel.
#[derive(Debug, Clone, PartialEq)]
pub struct HazardEntry {
    pub title: &'static str,
    /// Display label straight from the backend (`"High Susceptibility"`,
    /// `"No Data Available"`, ...).
    pub label: String,
    /// Swatch color for the reading's susceptibility code.
    pub swatch: &'static str,
    pub risk_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskSummary {
    pub score: f64,
    pub category: String,
    pub message: String,
    pub color: String,
    pub safety_level: String,
    pub recommendation_summary: String,
    pub recommendation_details: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HazardsPanel {
    pub entries: [HazardEntry; 3],
    pub overall: Option<RiskSummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NearestSummary {
    pub title: &'static str,
    pub name: String,
    pub distance: String,
    pub is_walkable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FacilityCard {
    pub name: String,
    pub type_display: String,
    pub distance_display: String,
    pub coord: LatLng,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FacilityGroup {
    pub category: FacilityCategory,
    pub cards: Vec<FacilityCard>,
    /// Total records in this category, including those beyond the card cap.
    pub total: usize,
}

impl FacilityGroup {
    pub fn overflow(&self) -> usize {
        self.total.saturating_sub(self.cards.len())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FacilitiesPanel {
    pub nearest: Vec<NearestSummary>,
    pub groups: Vec<FacilityGroup>,
    pub total: usize,
}

impl FacilitiesPanel {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// The InfoPanelController: sidebar visibility plus three independent panels
/// gated by the selection token.
///
/// Commit contract:
/// - `begin_selection` moves every panel to `Loading` synchronously, before
///   any network round trip completes.
/// - every `commit_*` compares its token against the tracker; a stale commit
///   returns `false` and changes nothing.
/// - panels are not coupled: one panel's failure never blocks another.
#[derive(Debug, Default)]
pub struct Sidebar {
    pub open: bool,
    tracker: SelectionTracker,
    location: PanelState<LocationPanel>,
    hazards: PanelState<HazardsPanel>,
    facilities: PanelState<FacilitiesPanel>,
}

impl<T> Default for PanelState<T> {
    fn default() -> Self {
        PanelState::Idle
    }
}

impl Sidebar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(&self) -> &PanelState<LocationPanel> {
        &self.location
    }

    pub fn hazards(&self) -> &PanelState<HazardsPanel> {
        &self.hazards
    }

    pub fn facilities(&self) -> &PanelState<FacilitiesPanel> {
        &self.facilities
    }

    pub fn tracker(&self) -> &SelectionTracker {
        &self.tracker
    }

    /// Starts a new selection: opens the sidebar, replaces the pin
    /// coordinate, and puts all three panels into `Loading`.
    pub fn begin_selection(&mut self, coord: LatLng) -> SelectionToken {
        let token = self.tracker.select(coord);
        self.open = true;
        self.location = PanelState::Loading;
        self.hazards = PanelState::Loading;
        self.facilities = PanelState::Loading;
        token
    }

    /// Commits the location lookup. A failed lookup degrades to the
    /// coordinates-only fallback rather than an error state.
    pub fn commit_location(
        &mut self,
        token: SelectionToken,
        result: Result<LocationInfo, FetchError>,
    ) -> bool {
        if !self.tracker.is_current(token) {
            return false;
        }
        let coord = match self.tracker.current() {
            Some(point) => point.coord,
            None => return false,
        };
        let lat = format_coord(coord.lat_deg);
        let lng = format_coord(coord.lng_deg);

        self.location = match result {
            Ok(info) if info.success => PanelState::Populated(LocationPanel::Named {
                barangay: info.barangay,
                municipality: info.municipality,
                province: info.province,
                lat,
                lng,
            }),
            _ => PanelState::Populated(LocationPanel::CoordinatesOnly { lat, lng }),
        };
        true
    }

    pub fn commit_hazards(
        &mut self,
        token: SelectionToken,
        result: Result<LocationHazards, FetchError>,
        missing: MissingCodeStyle,
    ) -> bool {
        if !self.tracker.is_current(token) {
            return false;
        }
        self.hazards = match result {
            Ok(data) => PanelState::Populated(hazards_panel(&data, missing)),
            Err(err) => PanelState::Failed(format!("Unable to retrieve hazard levels: {err}")),
        };
        true
    }

    pub fn commit_facilities(
        &mut self,
        token: SelectionToken,
        result: Result<NearbyFacilities, FetchError>,
    ) -> bool {
        if !self.tracker.is_current(token) {
            return false;
        }
        self.facilities = match result {
            Ok(data) => PanelState::Populated(facilities_panel(&data)),
            Err(err) => PanelState::Failed(format!("Unable to load nearby facilities: {err}")),
        };
        true
    }
}

fn hazards_panel(data: &LocationHazards, missing: MissingCodeStyle) -> HazardsPanel {
    HazardsPanel {
        entries: [
            hazard_entry(HazardKind::Flood, &data.flood, missing),
            hazard_entry(HazardKind::Landslide, &data.landslide, missing),
            hazard_entry(HazardKind::Liquefaction, &data.liquefaction, missing),
        ],
        overall: data.overall_risk.as_ref().map(|risk| RiskSummary {
            score: risk.score,
            category: risk.category.clone(),
            message: risk.message.clone(),
            color: risk.color.clone(),
            safety_level: risk.safety_level.clone(),
            recommendation_summary: risk.recommendation_summary.clone(),
            recommendation_details: risk.recommendation_details.clone(),
        }),
    }
}

fn hazard_entry(
    kind: HazardKind,
    reading: &HazardReading,
    missing: MissingCodeStyle,
) -> HazardEntry {
    let swatch = reading
        .level
        .as_deref()
        .and_then(Susceptibility::from_code)
        .map(fill_color)
        .unwrap_or_else(|| missing.fill_color());

    HazardEntry {
        title: kind.display_name(),
        label: reading.label.clone(),
        swatch,
        risk_label: reading.risk_label.clone(),
    }
}

fn facilities_panel(data: &NearbyFacilities) -> FacilitiesPanel {
    let mut nearest = Vec::new();
    for (title, entry) in [
        ("Nearest evacuation center", &data.summary.nearest_evacuation),
        ("Nearest hospital", &data.summary.nearest_hospital),
        ("Nearest fire station", &data.summary.nearest_fire_station),
    ] {
        if let Some(facility) = entry {
            nearest.push(NearestSummary {
                title,
                name: facility.name.clone(),
                distance: facility.distance.clone(),
                is_walkable: facility.is_walkable,
            });
        }
    }

    let mut groups = Vec::new();
    for (category, records) in [
        (FacilityCategory::Evacuation, &data.evacuation_centers),
        (FacilityCategory::Medical, &data.medical),
        (FacilityCategory::Emergency, &data.emergency_services),
        (FacilityCategory::Essential, &data.essential_services),
        (FacilityCategory::Government, &data.other),
    ] {
        if records.is_empty() {
            continue;
        }
        groups.push(FacilityGroup {
            category,
            cards: records
                .iter()
                .take(MAX_CARDS_PER_CATEGORY)
                .map(|r| FacilityCard {
                    name: r.name.clone(),
                    type_display: r.type_display.clone(),
                    distance_display: crate::facilities::display_distance(r),
                    coord: LatLng::new(r.lat, r.lng),
                })
                .collect(),
            total: records.len(),
        });
    }

    // The overlay draws markers from the record lists; deriving the total
    // from the same lists keeps the panel and the markers in agreement even
    // when the wire counts block is absent or stale.
    let total = groups.iter().map(|g| g.total).sum();

    FacilitiesPanel {
        nearest,
        groups,
        total,
    }
}
