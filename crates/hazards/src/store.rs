use foundation::LatLng;
use protocol::{FeatureCollection, FetchError};
use serde::Serialize;

use crate::layer::{Footprint, HAZARD_KINDS, HazardKind, HazardLayer};
use crate::symbology::MissingCodeStyle;

/// Result of one layer's dataset load. Failures are isolated per layer: a
/// failed flood fetch never blocks landslide or liquefaction.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    NotLoaded,
    Loaded { feature_count: usize },
    Failed(FetchError),
}

/// Owns the three hazard overlays and their load state.
///
/// The store is sans-IO: the app crate performs the fetches and feeds decoded
/// (or failed) responses in. Visibility toggles never touch feature data, so
/// toggling a layer off and back on reproduces the identical feature set
/// without a refetch.
#[derive(Debug)]
pub struct HazardLayerStore {
    layers: [HazardLayer; 3],
    outcomes: [LoadOutcome; 3],
    missing: MissingCodeStyle,
}

impl HazardLayerStore {
    pub fn new(missing: MissingCodeStyle, initially_visible: impl Fn(HazardKind) -> bool) -> Self {
        Self {
            layers: HAZARD_KINDS.map(|kind| HazardLayer::new(kind, initially_visible(kind))),
            outcomes: [
                LoadOutcome::NotLoaded,
                LoadOutcome::NotLoaded,
                LoadOutcome::NotLoaded,
            ],
            missing,
        }
    }

    fn index(kind: HazardKind) -> usize {
        match kind {
            HazardKind::Flood => 0,
            HazardKind::Landslide => 1,
            HazardKind::Liquefaction => 2,
        }
    }

    pub fn layer(&self, kind: HazardKind) -> &HazardLayer {
        &self.layers[Self::index(kind)]
    }

    pub fn outcome(&self, kind: HazardKind) -> &LoadOutcome {
        &self.outcomes[Self::index(kind)]
    }

    /// Commits one dataset response, replacing the layer's features.
    pub fn commit_dataset(&mut self, kind: HazardKind, data: &FeatureCollection) {
        let i = Self::index(kind);
        self.layers[i].replace_features(data, self.missing);
        self.outcomes[i] = LoadOutcome::Loaded {
            feature_count: self.layers[i].features.len(),
        };
    }

    /// Records a failed dataset load. The layer keeps whatever features it
    /// already had.
    pub fn commit_failure(&mut self, kind: HazardKind, err: FetchError) {
        self.outcomes[Self::index(kind)] = LoadOutcome::Failed(err);
    }

    /// Toggles a layer's presence on the map surface without touching data.
    pub fn set_visible(&mut self, kind: HazardKind, visible: bool) {
        self.layers[Self::index(kind)].visible = visible;
    }

    pub fn is_visible(&self, kind: HazardKind) -> bool {
        self.layers[Self::index(kind)].visible
    }

    /// Exports one layer as styled GeoJSON for the map bridge: each feature
    /// carries its resolved paint so the bridge applies colors verbatim.
    pub fn styled_geojson(&self, kind: HazardKind) -> String {
        let layer = self.layer(kind);
        let features: Vec<StyledFeature<'_>> = layer
            .features
            .iter()
            .map(|f| StyledFeature {
                kind: "Feature",
                properties: StyledProperties {
                    susceptibility: f.susceptibility.map(|s| s.code()),
                    paint: f.paint,
                },
                geometry: StyledGeometry::from(&f.footprint),
            })
            .collect();

        let collection = StyledCollection {
            kind: "FeatureCollection",
            features,
        };
        // Serialization of plain structs with string keys cannot fail.
        serde_json::to_string(&collection).unwrap_or_else(|_| "{}".to_string())
    }
}

#[derive(Serialize)]
struct StyledCollection<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    features: Vec<StyledFeature<'a>>,
}

#[derive(Serialize)]
struct StyledFeature<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    properties: StyledProperties<'a>,
    geometry: StyledGeometry,
}

#[derive(Serialize)]
struct StyledProperties<'a> {
    susceptibility: Option<&'a str>,
    paint: crate::symbology::FeaturePaint,
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum StyledGeometry {
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<[f64; 2]>>> },
}

impl From<&Footprint> for StyledGeometry {
    fn from(footprint: &Footprint) -> Self {
        match footprint {
            Footprint::Polygon(rings) => StyledGeometry::Polygon {
                coordinates: rings_to_lng_lat(rings),
            },
            Footprint::MultiPolygon(polygons) => StyledGeometry::MultiPolygon {
                coordinates: polygons.iter().map(|p| rings_to_lng_lat(p)).collect(),
            },
        }
    }
}

fn rings_to_lng_lat(rings: &[Vec<LatLng>]) -> Vec<Vec<[f64; 2]>> {
    rings
        .iter()
        .map(|ring| ring.iter().map(|p| [p.lng_deg, p.lat_deg]).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{HazardLayerStore, LoadOutcome};
    use crate::layer::HazardKind;
    use crate::symbology::MissingCodeStyle;
    use protocol::{FeatureCollection, FetchError};
    use pretty_assertions::assert_eq;

    fn flood_collection() -> FeatureCollection {
        serde_json::from_value(serde_json::json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"susceptibility": "VHS"},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[123.3, 9.3], [123.4, 9.3], [123.4, 9.4], [123.3, 9.3]]]
                }
            }]
        }))
        .unwrap()
    }

    fn store() -> HazardLayerStore {
        HazardLayerStore::new(MissingCodeStyle::NoData, |_| true)
    }

    #[test]
    fn per_layer_failures_are_isolated() {
        let mut store = store();
        store.commit_failure(HazardKind::Flood, FetchError::Status(500));
        store.commit_dataset(HazardKind::Landslide, &flood_collection());

        assert_eq!(
            store.outcome(HazardKind::Flood),
            &LoadOutcome::Failed(FetchError::Status(500))
        );
        assert_eq!(
            store.outcome(HazardKind::Landslide),
            &LoadOutcome::Loaded { feature_count: 1 }
        );
        assert_eq!(store.outcome(HazardKind::Liquefaction), &LoadOutcome::NotLoaded);
    }

    #[test]
    fn visibility_toggle_is_idempotent_over_data() {
        let mut store = store();
        store.commit_dataset(HazardKind::Flood, &flood_collection());
        let before = store.layer(HazardKind::Flood).features.clone();

        store.set_visible(HazardKind::Flood, false);
        assert!(!store.is_visible(HazardKind::Flood));
        store.set_visible(HazardKind::Flood, true);
        assert!(store.is_visible(HazardKind::Flood));

        assert_eq!(store.layer(HazardKind::Flood).features, before);
        assert_eq!(
            store.outcome(HazardKind::Flood),
            &LoadOutcome::Loaded { feature_count: 1 }
        );
    }

    #[test]
    fn startup_visibility_policy_is_respected() {
        let store =
            HazardLayerStore::new(MissingCodeStyle::NoData, |k| k == HazardKind::Flood);
        assert!(store.is_visible(HazardKind::Flood));
        assert!(!store.is_visible(HazardKind::Landslide));
        assert!(!store.is_visible(HazardKind::Liquefaction));
    }

    #[test]
    fn styled_geojson_bakes_paint_into_properties() {
        let mut store = store();
        store.commit_dataset(HazardKind::Flood, &flood_collection());

        let json: serde_json::Value =
            serde_json::from_str(&store.styled_geojson(HazardKind::Flood)).unwrap();
        let feature = &json["features"][0];
        assert_eq!(feature["properties"]["susceptibility"], "VHS");
        assert_eq!(feature["properties"]["paint"]["fillColor"], "#ef4444");
        // Bridge-side coordinates go back out in GeoJSON lng/lat order.
        assert_eq!(feature["geometry"]["type"], "Polygon");
        assert_eq!(feature["geometry"]["coordinates"][0][0][0], 123.3);
        assert_eq!(feature["geometry"]["coordinates"][0][0][1], 9.3);
    }

    #[test]
    fn styled_geojson_keeps_multipolygons_multi() {
        let data: FeatureCollection = serde_json::from_value(serde_json::json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"susceptibility": "HS"},
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[123.0, 9.0], [123.1, 9.0], [123.1, 9.1], [123.0, 9.0]]],
                        [[[124.0, 9.5], [124.1, 9.5], [124.1, 9.6], [124.0, 9.5]]]
                    ]
                }
            }]
        }))
        .unwrap();

        let mut store = store();
        store.commit_dataset(HazardKind::Landslide, &data);

        let json: serde_json::Value =
            serde_json::from_str(&store.styled_geojson(HazardKind::Landslide)).unwrap();
        let geometry = &json["features"][0]["geometry"];
        assert_eq!(geometry["type"], "MultiPolygon");
        // Two disjoint members, not one polygon with a hole.
        assert_eq!(geometry["coordinates"].as_array().unwrap().len(), 2);
        assert_eq!(geometry["coordinates"][1][0][0][0], 124.0);
    }
}
