use serde::{Deserialize, Serialize};

/// `GET /api/location-info/?lat&lng` — administrative names for a point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub barangay: String,
    #[serde(default)]
    pub municipality: String,
    #[serde(default)]
    pub province: String,
}

/// `GET /api/location-hazards/?lat&lng` — per-hazard readings for a point.
///
/// `overall_risk` is only present on newer backend deployments; the panel
/// simply omits the section when it is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationHazards {
    pub flood: HazardReading,
    pub landslide: HazardReading,
    pub liquefaction: HazardReading,
    #[serde(default)]
    pub overall_risk: Option<RiskAssessment>,
}

/// One hazard's classification at the selected point.
///
/// `level` is the susceptibility code (`LS`/`MS`/`HS`/`VHS`/`DF`) or null
/// when no polygon covers the point. `label` is always display-ready.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HazardReading {
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub risk_label: Option<String>,
}

/// Aggregated risk score and recommendation block computed by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub safety_level: String,
    #[serde(default)]
    pub recommendation_summary: String,
    #[serde(default)]
    pub recommendation_details: String,
}

/// `GET /api/nearby-facilities/?lat&lng&radius` — disaster-priority grouping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NearbyFacilities {
    #[serde(default)]
    pub summary: FacilitySummary,
    #[serde(default)]
    pub evacuation_centers: Vec<FacilityRecordJson>,
    #[serde(default)]
    pub medical: Vec<FacilityRecordJson>,
    #[serde(default)]
    pub emergency_services: Vec<FacilityRecordJson>,
    #[serde(default)]
    pub essential_services: Vec<FacilityRecordJson>,
    #[serde(default)]
    pub other: Vec<FacilityRecordJson>,
    #[serde(default)]
    pub counts: FacilityCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacilitySummary {
    #[serde(default)]
    pub nearest_evacuation: Option<NearestFacility>,
    #[serde(default)]
    pub nearest_hospital: Option<NearestFacility>,
    #[serde(default)]
    pub nearest_fire_station: Option<NearestFacility>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NearestFacility {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub distance: String,
    #[serde(default)]
    pub is_walkable: bool,
}

/// One facility as reported by the backend. No stable identifier is supplied;
/// the overlay matches cards to markers by coordinate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacilityRecordJson {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub facility_type: String,
    #[serde(default)]
    pub type_display: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub distance_meters: f64,
    #[serde(default)]
    pub distance_display: String,
    #[serde(default)]
    pub is_walkable: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityCounts {
    #[serde(default)]
    pub evacuation: usize,
    #[serde(default)]
    pub medical: usize,
    #[serde(default)]
    pub emergency_services: usize,
    #[serde(default)]
    pub essential: usize,
    #[serde(default)]
    pub other: usize,
    #[serde(default)]
    pub total: usize,
}

/// `POST /api/upload-shapefile/` result. The backend returns either a
/// success body with the record count or an `error` string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub records_created: u64,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{LocationHazards, LocationInfo, NearbyFacilities, UploadOutcome};
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_location_info() {
        let body = r#"{"success": true, "barangay": "Daro", "municipality": "Dumaguete", "province": "Negros Oriental"}"#;
        let info: LocationInfo = serde_json::from_str(body).unwrap();
        assert!(info.success);
        assert_eq!(info.barangay, "Daro");
        assert_eq!(info.municipality, "Dumaguete");
    }

    #[test]
    fn decodes_hazards_with_null_level_and_no_overall_risk() {
        // Older backend deployments omit overall_risk and risk_label.
        let body = r#"{
            "flood": {"level": "HS", "label": "High Susceptibility"},
            "landslide": {"level": null, "label": "No Data Available"},
            "liquefaction": {"level": "MS", "label": "Moderate Susceptibility"}
        }"#;
        let hazards: LocationHazards = serde_json::from_str(body).unwrap();
        assert_eq!(hazards.flood.level.as_deref(), Some("HS"));
        assert_eq!(hazards.landslide.level, None);
        assert_eq!(hazards.landslide.label, "No Data Available");
        assert_eq!(hazards.overall_risk, None);
    }

    #[test]
    fn decodes_hazards_with_overall_risk() {
        let body = r##"{
            "flood": {"level": "VHS", "label": "Very High Susceptibility",
                      "risk_label": "Very high risk - Severe flooding likely"},
            "landslide": {"level": "DF", "label": "Debris Flow"},
            "liquefaction": {"level": "LS", "label": "Low Susceptibility"},
            "overall_risk": {
                "score": 87.5, "category": "VERY HIGH RISK",
                "message": "Not recommended for development",
                "color": "#ef4444", "safety_level": "DANGER",
                "recommendation_summary": "VERY HIGH FLOOD RISK + DEBRIS FLOW ZONE",
                "recommendation_details": "..."
            }
        }"##;
        let hazards: LocationHazards = serde_json::from_str(body).unwrap();
        let risk = hazards.overall_risk.unwrap();
        assert_eq!(risk.score, 87.5);
        assert_eq!(risk.safety_level, "DANGER");
    }

    #[test]
    fn decodes_nearby_facilities() {
        let body = r#"{
            "summary": {
                "nearest_evacuation": {"name": "Daro Elementary School", "distance": "320 m", "is_walkable": true},
                "nearest_hospital": {"name": "Provincial Hospital", "distance": "1.2 km", "is_walkable": false},
                "nearest_fire_station": null
            },
            "evacuation_centers": [
                {"name": "Daro Elementary School", "facility_type": "school",
                 "type_display": "School", "lat": 9.3121, "lng": 123.3011,
                 "distance_meters": 320.0, "distance_display": "320 m", "is_walkable": true}
            ],
            "medical": [], "emergency_services": [], "essential_services": [], "other": [],
            "counts": {"evacuation": 1, "medical": 0, "emergency_services": 0,
                       "essential": 0, "other": 0, "total": 1}
        }"#;
        let nearby: NearbyFacilities = serde_json::from_str(body).unwrap();
        assert_eq!(nearby.counts.total, 1);
        assert_eq!(nearby.evacuation_centers[0].name, "Daro Elementary School");
        assert!(nearby.summary.nearest_fire_station.is_none());
    }

    #[test]
    fn decodes_upload_outcomes() {
        let ok: UploadOutcome =
            serde_json::from_str(r#"{"success": true, "records_created": 412}"#).unwrap();
        assert!(ok.success);
        assert_eq!(ok.records_created, 412);

        let err: UploadOutcome =
            serde_json::from_str(r#"{"error": "Invalid dataset type"}"#).unwrap();
        assert!(!err.success);
        assert_eq!(err.error.as_deref(), Some("Invalid dataset type"));
    }
}
