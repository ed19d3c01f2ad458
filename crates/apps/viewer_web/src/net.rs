//! Collaborator round trips. Every function maps transport failures into the
//! `FetchError` taxonomy; callers decide how a failure degrades.

use foundation::LatLng;
use gloo_net::http::Request;
use hazards::HazardKind;
use protocol::{
    FeatureCollection, FetchError, GeocodeCandidate, LocationHazards, LocationInfo,
    NearbyFacilities, UploadOutcome,
};
use serde::de::DeserializeOwned;

async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }
    let text = resp
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| FetchError::Decode(e.to_string()))
}

pub async fn fetch_dataset(
    api_base: &str,
    kind: HazardKind,
) -> Result<FeatureCollection, FetchError> {
    fetch_json(&format!("{api_base}{}", kind.dataset_path())).await
}

pub async fn fetch_location_info(
    api_base: &str,
    coord: LatLng,
) -> Result<LocationInfo, FetchError> {
    fetch_json(&format!(
        "{api_base}/api/location-info/?lat={}&lng={}",
        coord.lat_deg, coord.lng_deg
    ))
    .await
}

pub async fn fetch_location_hazards(
    api_base: &str,
    coord: LatLng,
) -> Result<LocationHazards, FetchError> {
    fetch_json(&format!(
        "{api_base}/api/location-hazards/?lat={}&lng={}",
        coord.lat_deg, coord.lng_deg
    ))
    .await
}

pub async fn fetch_nearby_facilities(
    api_base: &str,
    coord: LatLng,
    radius_m: u32,
) -> Result<NearbyFacilities, FetchError> {
    fetch_json(&format!(
        "{api_base}/api/nearby-facilities/?lat={}&lng={}&radius={}",
        coord.lat_deg, coord.lng_deg, radius_m
    ))
    .await
}

/// Region-qualified Nominatim search, top five candidates.
pub async fn geocode_search(
    query: &str,
    region: &str,
) -> Result<Vec<GeocodeCandidate>, FetchError> {
    let qualified = if region.is_empty() {
        query.to_string()
    } else {
        format!("{query}, {region}")
    };
    let encoded: String = js_sys::encode_uri_component(&qualified).into();
    fetch_json(&format!(
        "https://nominatim.openstreetmap.org/search?format=json&q={encoded}&limit=5"
    ))
    .await
}

/// Multipart shapefile upload. The backend answers 200 with a record count or
/// an error status with an `error` body; both decode into `UploadOutcome`.
pub async fn upload_shapefile(
    api_base: &str,
    file: &web_sys::File,
    dataset_type: &str,
) -> Result<UploadOutcome, FetchError> {
    let form = web_sys::FormData::new()
        .map_err(|_| FetchError::Network("FormData unavailable".to_string()))?;
    form.append_with_blob("shapefile", file)
        .map_err(|_| FetchError::Network("could not attach shapefile".to_string()))?;
    form.append_with_str("dataset_type", dataset_type)
        .map_err(|_| FetchError::Network("could not attach dataset type".to_string()))?;

    let resp = Request::post(&format!("{api_base}/api/upload-shapefile/"))
        .body(form)
        .map_err(|e| FetchError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let text = resp
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    let mut outcome: UploadOutcome =
        serde_json::from_str(&text).map_err(|e| FetchError::Decode(e.to_string()))?;
    if !resp.ok() && outcome.error.is_none() {
        outcome.error = Some(format!("upload failed with status {}", resp.status()));
    }
    Ok(outcome)
}
