use foundation::{LatLng, MARKER_MATCH_EPS_DEG};
use protocol::{FacilityRecordJson, NearbyFacilities};

use crate::panel::MAX_CARDS_PER_CATEGORY;

/// Disaster-priority facility categories, in render order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FacilityCategory {
    Evacuation,
    Medical,
    Emergency,
    Essential,
    Government,
}

impl FacilityCategory {
    pub fn heading(self) -> &'static str {
        match self {
            FacilityCategory::Evacuation => "Evacuation Centers",
            FacilityCategory::Medical => "Medical Facilities",
            FacilityCategory::Emergency => "Emergency Services",
            FacilityCategory::Essential => "Essential Services",
            FacilityCategory::Government => "Government & Other",
        }
    }

    /// Marker and card accent color for the category.
    pub fn color(self) -> &'static str {
        match self {
            FacilityCategory::Evacuation => "#dc2626",
            FacilityCategory::Medical => "#2563eb",
            FacilityCategory::Emergency => "#f97316",
            FacilityCategory::Essential => "#059669",
            FacilityCategory::Government => "#6b7280",
        }
    }
}

/// One rendered facility marker.
#[derive(Debug, Clone, PartialEq)]
pub struct FacilityMarker {
    pub name: String,
    pub type_display: String,
    pub distance_display: String,
    pub category: FacilityCategory,
    pub coord: LatLng,
}

/// The dynamic facility marker collection.
///
/// The whole set is replaced atomically per facility query; there is no
/// incremental merge. Markers mirror the rendered cards, so only the first
/// `MAX_CARDS_PER_CATEGORY` records of each category get one.
#[derive(Debug, Default)]
pub struct FacilityOverlay {
    markers: Vec<FacilityMarker>,
}

impl FacilityOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markers(&self) -> &[FacilityMarker] {
        &self.markers
    }

    /// Clears all existing markers and re-adds one per rendered record.
    pub fn rebuild(&mut self, data: &NearbyFacilities) {
        self.markers.clear();
        for (category, records) in [
            (FacilityCategory::Evacuation, &data.evacuation_centers),
            (FacilityCategory::Medical, &data.medical),
            (FacilityCategory::Emergency, &data.emergency_services),
            (FacilityCategory::Essential, &data.essential_services),
            (FacilityCategory::Government, &data.other),
        ] {
            for record in records.iter().take(MAX_CARDS_PER_CATEGORY) {
                self.markers.push(marker(category, record));
            }
        }
    }

    pub fn clear(&mut self) {
        self.markers.clear();
    }

    /// Resolves a facility card to its marker by coordinate equality within
    /// `MARKER_MATCH_EPS_DEG`, preferring the closest match.
    ///
    /// The collaborator supplies no stable identifier, so this tolerance
    /// match is the only join available; two facilities closer than the
    /// tolerance (~1 m) would be conflated.
    pub fn find_marker(&self, coord: LatLng) -> Option<&FacilityMarker> {
        self.find_marker_index(coord).map(|i| &self.markers[i])
    }

    /// Index variant of [`find_marker`](Self::find_marker), for callers that
    /// address bridge markers positionally.
    pub fn find_marker_index(&self, coord: LatLng) -> Option<usize> {
        self.markers
            .iter()
            .enumerate()
            .filter(|(_, m)| m.coord.approx_eq(coord, MARKER_MATCH_EPS_DEG))
            .min_by(|(_, a), (_, b)| {
                let da = a.coord.distance_m(coord);
                let db = b.coord.distance_m(coord);
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(i, _)| i)
    }
}

fn marker(category: FacilityCategory, record: &FacilityRecordJson) -> FacilityMarker {
    FacilityMarker {
        name: record.name.clone(),
        type_display: record.type_display.clone(),
        distance_display: display_distance(record),
        category,
        coord: LatLng::new(record.lat, record.lng),
    }
}

/// Backend-formatted distance when present, locally formatted otherwise.
pub(crate) fn display_distance(record: &FacilityRecordJson) -> String {
    if record.distance_display.is_empty() {
        foundation::format_distance_m(record.distance_meters)
    } else {
        record.distance_display.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::{FacilityCategory, FacilityOverlay};
    use foundation::LatLng;
    use protocol::{FacilityRecordJson, NearbyFacilities};
    use pretty_assertions::assert_eq;

    fn record(name: &str, lat: f64, lng: f64) -> FacilityRecordJson {
        FacilityRecordJson {
            name: name.to_string(),
            lat,
            lng,
            ..FacilityRecordJson::default()
        }
    }

    #[test]
    fn rebuild_replaces_the_whole_marker_set() {
        let mut overlay = FacilityOverlay::new();

        let mut first = NearbyFacilities::default();
        first.medical.push(record("Old Clinic", 9.31, 123.31));
        overlay.rebuild(&first);
        assert_eq!(overlay.markers().len(), 1);

        let mut second = NearbyFacilities::default();
        second
            .evacuation_centers
            .push(record("New School", 9.32, 123.32));
        second.other.push(record("City Hall", 9.33, 123.33));
        overlay.rebuild(&second);

        let names: Vec<&str> = overlay.markers().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["New School", "City Hall"]);
    }

    #[test]
    fn rebuild_with_zero_facilities_leaves_zero_markers() {
        let mut overlay = FacilityOverlay::new();
        let mut data = NearbyFacilities::default();
        data.medical.push(record("Clinic", 9.31, 123.31));
        overlay.rebuild(&data);
        assert_eq!(overlay.markers().len(), 1);

        overlay.rebuild(&NearbyFacilities::default());
        assert!(overlay.markers().is_empty());
    }

    #[test]
    fn markers_cap_at_rendered_cards_per_category() {
        let mut data = NearbyFacilities::default();
        for i in 0..15 {
            data.medical.push(record(&format!("Clinic {i}"), 9.3, 123.3 + i as f64 * 0.01));
        }
        let mut overlay = FacilityOverlay::new();
        overlay.rebuild(&data);
        assert_eq!(overlay.markers().len(), 10);
    }

    #[test]
    fn find_marker_matches_within_tolerance() {
        let mut data = NearbyFacilities::default();
        data.medical.push(record("Clinic", 9.312345, 123.301234));
        let mut overlay = FacilityOverlay::new();
        overlay.rebuild(&data);

        // A card click reports coordinates that survived a float round trip
        // through the DOM; they differ from the marker in the last decimals.
        let clicked = LatLng::new(9.312344, 123.301235);
        let hit = overlay.find_marker(clicked).unwrap();
        assert_eq!(hit.name, "Clinic");

        assert!(overlay.find_marker(LatLng::new(9.3150, 123.3012)).is_none());
    }

    #[test]
    fn find_marker_prefers_the_closest_candidate() {
        let mut data = NearbyFacilities::default();
        data.medical.push(record("Far", 9.300008, 123.3));
        data.medical.push(record("Near", 9.300001, 123.3));
        let mut overlay = FacilityOverlay::new();
        overlay.rebuild(&data);

        let hit = overlay.find_marker(LatLng::new(9.3, 123.3)).unwrap();
        assert_eq!(hit.name, "Near");
    }

    #[test]
    fn missing_distance_display_falls_back_to_local_formatting() {
        let mut short = record("Clinic", 9.31, 123.31);
        short.distance_meters = 320.0;
        assert_eq!(super::display_distance(&short), "320 m");

        let mut long = record("Hospital", 9.35, 123.35);
        long.distance_meters = 4260.0;
        assert_eq!(super::display_distance(&long), "4.3 km");

        let mut preformatted = record("Station", 9.31, 123.31);
        preformatted.distance_display = "½ km".to_string();
        assert_eq!(super::display_distance(&preformatted), "½ km");
    }

    #[test]
    fn category_colors_are_stable() {
        assert_eq!(FacilityCategory::Evacuation.color(), "#dc2626");
        assert_eq!(FacilityCategory::Medical.color(), "#2563eb");
        assert_eq!(FacilityCategory::Government.color(), "#6b7280");
    }
}
