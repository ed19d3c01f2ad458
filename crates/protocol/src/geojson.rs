use serde::{Deserialize, Serialize};

/// Hazard dataset response: a GeoJSON FeatureCollection restricted to the
/// polygonal geometries the backend actually emits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default = "feature_collection_type")]
    pub kind: String,
    #[serde(default)]
    pub features: Vec<HazardFeatureJson>,
}

fn feature_collection_type() -> String {
    "FeatureCollection".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardFeatureJson {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub properties: HazardProperties,
    pub geometry: Geometry,
}

/// Per-feature properties. Only `susceptibility` drives styling; the rest is
/// carried through untouched for popups and debugging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HazardProperties {
    #[serde(default)]
    pub susceptibility: Option<String>,
    #[serde(default)]
    pub original_code: Option<String>,
    #[serde(default)]
    pub dataset_id: Option<u64>,
}

/// Polygonal GeoJSON geometry. Coordinates are GeoJSON order: [lng, lat].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<[f64; 2]>>> },
}

impl Geometry {
    /// Iterates all rings of the geometry, outer and holes alike.
    pub fn rings(&self) -> Box<dyn Iterator<Item = &Vec<[f64; 2]>> + '_> {
        match self {
            Geometry::Polygon { coordinates } => Box::new(coordinates.iter()),
            Geometry::MultiPolygon { coordinates } => {
                Box::new(coordinates.iter().flat_map(|poly| poly.iter()))
            }
        }
    }
}
