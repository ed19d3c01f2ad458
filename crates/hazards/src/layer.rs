use foundation::LatLng;
use protocol::{FeatureCollection, Geometry};

use crate::susceptibility::Susceptibility;
use crate::symbology::{FeaturePaint, MissingCodeStyle};

/// The three toggleable hazard overlays.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum HazardKind {
    Flood,
    Landslide,
    Liquefaction,
}

pub const HAZARD_KINDS: [HazardKind; 3] = [
    HazardKind::Flood,
    HazardKind::Landslide,
    HazardKind::Liquefaction,
];

impl HazardKind {
    pub fn name(self) -> &'static str {
        match self {
            HazardKind::Flood => "flood",
            HazardKind::Landslide => "landslide",
            HazardKind::Liquefaction => "liquefaction",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "flood" => Some(HazardKind::Flood),
            "landslide" => Some(HazardKind::Landslide),
            "liquefaction" => Some(HazardKind::Liquefaction),
            _ => None,
        }
    }

    /// Backend dataset endpoint for this hazard.
    pub fn dataset_path(self) -> &'static str {
        match self {
            HazardKind::Flood => "/api/flood-data/",
            HazardKind::Landslide => "/api/landslide-data/",
            HazardKind::Liquefaction => "/api/liquefaction-data/",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            HazardKind::Flood => "Flood Susceptibility",
            HazardKind::Landslide => "Landslide Susceptibility",
            HazardKind::Liquefaction => "Liquefaction Susceptibility",
        }
    }

    /// Debris flow is a landslide-only classification; on any other layer
    /// the code is treated as unrecognized.
    pub fn accepts(self, level: Susceptibility) -> bool {
        level != Susceptibility::DebrisFlow || self == HazardKind::Landslide
    }
}

/// Feature footprint in lat/lng order, keeping the source Polygon vs
/// MultiPolygon distinction so the export round-trips the shape. Disjoint
/// MultiPolygon members must not collapse into holes of a single polygon.
#[derive(Debug, Clone, PartialEq)]
pub enum Footprint {
    /// One outer ring plus any holes.
    Polygon(Vec<Vec<LatLng>>),
    /// Disjoint polygons, each with its own ring list.
    MultiPolygon(Vec<Vec<Vec<LatLng>>>),
}

impl Footprint {
    /// Iterates all rings, outer and holes alike, across all members.
    pub fn rings(&self) -> Box<dyn Iterator<Item = &Vec<LatLng>> + '_> {
        match self {
            Footprint::Polygon(rings) => Box::new(rings.iter()),
            Footprint::MultiPolygon(polygons) => {
                Box::new(polygons.iter().flat_map(|poly| poly.iter()))
            }
        }
    }
}

/// One styled feature. Immutable once loaded; replaced wholesale on reload.
#[derive(Debug, Clone, PartialEq)]
pub struct HazardFeature {
    pub footprint: Footprint,
    pub susceptibility: Option<Susceptibility>,
    pub paint: FeaturePaint,
}

/// Named collection of hazard features plus a visibility flag.
#[derive(Debug, Clone, PartialEq)]
pub struct HazardLayer {
    pub kind: HazardKind,
    pub features: Vec<HazardFeature>,
    pub visible: bool,
}

impl HazardLayer {
    pub fn new(kind: HazardKind, visible: bool) -> Self {
        Self {
            kind,
            features: Vec::new(),
            visible,
        }
    }

    /// Replaces this layer's features from a dataset response.
    ///
    /// Unknown or absent susceptibility codes resolve to the configured
    /// fallback paint, never an error.
    pub fn replace_features(&mut self, data: &FeatureCollection, missing: MissingCodeStyle) {
        self.features.clear();
        self.features.reserve(data.features.len());

        for feature in &data.features {
            let level = feature
                .properties
                .susceptibility
                .as_deref()
                .and_then(Susceptibility::from_code)
                .filter(|&level| self.kind.accepts(level));

            self.features.push(HazardFeature {
                footprint: footprint_from(&feature.geometry),
                susceptibility: level,
                paint: FeaturePaint::for_level(level, missing),
            });
        }
    }
}

fn footprint_from(geometry: &Geometry) -> Footprint {
    match geometry {
        Geometry::Polygon { coordinates } => Footprint::Polygon(rings_to_lat_lng(coordinates)),
        Geometry::MultiPolygon { coordinates } => {
            Footprint::MultiPolygon(coordinates.iter().map(|p| rings_to_lat_lng(p)).collect())
        }
    }
}

fn rings_to_lat_lng(rings: &[Vec<[f64; 2]>]) -> Vec<Vec<LatLng>> {
    rings
        .iter()
        .map(|ring| {
            ring.iter()
                .map(|&[lng, lat]| LatLng::new(lat, lng))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{Footprint, HazardKind, HazardLayer};
    use crate::susceptibility::Susceptibility;
    use crate::symbology::MissingCodeStyle;
    use protocol::FeatureCollection;

    fn collection(codes: &[Option<&str>]) -> FeatureCollection {
        let features: Vec<serde_json::Value> = codes
            .iter()
            .map(|code| {
                serde_json::json!({
                    "type": "Feature",
                    "properties": {"susceptibility": code},
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[123.3, 9.3], [123.4, 9.3], [123.4, 9.4], [123.3, 9.3]]]
                    }
                })
            })
            .collect();
        serde_json::from_value(serde_json::json!({
            "type": "FeatureCollection",
            "features": features
        }))
        .unwrap()
    }

    #[test]
    fn geojson_lng_lat_becomes_lat_lng() {
        let mut layer = HazardLayer::new(HazardKind::Flood, true);
        layer.replace_features(&collection(&[Some("HS")]), MissingCodeStyle::NoData);
        let first = layer.features[0].footprint.rings().next().unwrap()[0];
        assert_eq!((first.lat_deg, first.lng_deg), (9.3, 123.3));
    }

    #[test]
    fn multipolygon_members_stay_disjoint() {
        let data: FeatureCollection = serde_json::from_value(serde_json::json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"susceptibility": "MS"},
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

        let mut layer = HazardLayer::new(HazardKind::Flood, true);
        layer.replace_features(&data, MissingCodeStyle::NoData);

        let Footprint::MultiPolygon(polygons) = &layer.features[0].footprint else {
            panic!("multipolygon collapsed to a single polygon");
        };
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[1][0][0], foundation::LatLng::new(9.5, 124.0));
    }

    #[test]
    fn unknown_code_gets_fallback_paint_not_error() {
        let mut layer = HazardLayer::new(HazardKind::Flood, true);
        layer.replace_features(
            &collection(&[Some("BOGUS"), None]),
            MissingCodeStyle::NoData,
        );
        for feature in &layer.features {
            assert_eq!(feature.susceptibility, None);
            assert_eq!(feature.paint.fill_color, "#9ca3af");
        }
    }

    #[test]
    fn debris_flow_only_valid_on_landslide_layer() {
        let data = collection(&[Some("DF")]);

        let mut landslide = HazardLayer::new(HazardKind::Landslide, true);
        landslide.replace_features(&data, MissingCodeStyle::NoData);
        assert_eq!(
            landslide.features[0].susceptibility,
            Some(Susceptibility::DebrisFlow)
        );

        let mut flood = HazardLayer::new(HazardKind::Flood, true);
        flood.replace_features(&data, MissingCodeStyle::NoData);
        assert_eq!(flood.features[0].susceptibility, None);
    }

    #[test]
    fn reload_replaces_features_wholesale() {
        let mut layer = HazardLayer::new(HazardKind::Liquefaction, true);
        layer.replace_features(
            &collection(&[Some("LS"), Some("MS")]),
            MissingCodeStyle::NoData,
        );
        assert_eq!(layer.features.len(), 2);

        layer.replace_features(&collection(&[Some("HS")]), MissingCodeStyle::NoData);
        assert_eq!(layer.features.len(), 1);
        assert_eq!(
            layer.features[0].susceptibility,
            Some(Susceptibility::High)
        );
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in super::HAZARD_KINDS {
            assert_eq!(HazardKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(HazardKind::from_name("lava"), None);
    }
}
