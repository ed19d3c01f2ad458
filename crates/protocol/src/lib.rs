//! Wire types for the hazard backend and the public geocoder.
//!
//! This crate defines the JSON contracts consumed by the viewer:
//! - Hazard dataset responses (GeoJSON feature collections)
//! - Point lookups (location info, location hazards, nearby facilities)
//! - Shapefile upload results
//! - Nominatim geocode candidates
//!
//! The types are transport-agnostic; the app crate owns the actual fetches.

pub mod error;
pub mod geocode;
pub mod geojson;
pub mod lookup;

pub use error::FetchError;
pub use geocode::{GeocodeCandidate, first_candidate};
pub use geojson::{FeatureCollection, Geometry, HazardFeatureJson, HazardProperties};
pub use lookup::{
    FacilityCounts, FacilityRecordJson, FacilitySummary, HazardReading, LocationHazards,
    LocationInfo, NearbyFacilities, NearestFacility, RiskAssessment, UploadOutcome,
};
