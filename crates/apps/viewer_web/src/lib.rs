//! Hazard Atlas web viewer: the MapController.
//!
//! The page loads this module, calls `init_viewer` once, and forwards map
//! input (clicks, layer toggles, searches, facility card clicks, uploads)
//! into the exported functions. All state lives here; the page's `MapBridge`
//! global is a thin Leaflet glue that draws what it is told.

use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};

use console_error_panic_hook::set_once;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use foundation::LatLng;
use hazards::{HAZARD_KINDS, HazardKind, HazardLayerStore};
use protocol::first_candidate;
use sidebar::{FacilityOverlay, Sidebar};

mod bridge;
mod config;
mod dom;
mod net;

use config::MapConfig;

// Guard to prevent double-initialization of global state (relevant during hot reload).
static INITIALIZED: AtomicBool = AtomicBool::new(false);

struct App {
    config: MapConfig,
    store: HazardLayerStore,
    sidebar: Sidebar,
    overlay: FacilityOverlay,
}

thread_local! {
    static STATE: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn with_app<R>(f: impl FnOnce(&mut App) -> R) -> Option<R> {
    STATE.with(|state| state.borrow_mut().as_mut().map(f))
}

fn log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

#[wasm_bindgen(start)]
pub fn start() {
    set_once();
}

/// Initializes the viewer from a page-supplied JSON config (`"{}"` for the
/// deployment defaults) and kicks off the three hazard dataset loads.
#[wasm_bindgen]
pub fn init_viewer(config_json: &str) {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        log("init_viewer called twice; ignoring");
        return;
    }

    let config: MapConfig = serde_json::from_str(config_json).unwrap_or_else(|err| {
        log(&format!("bad viewer config, using defaults: {err}"));
        MapConfig::default()
    });

    let center = config.center();
    bridge::init_map(center.lat_deg, center.lng_deg, config.zoom);

    let startup = config.startup_layers();
    let store = HazardLayerStore::new(config.missing_code_style(), |kind| startup.visible(kind));

    STATE.with(|state| {
        *state.borrow_mut() = Some(App {
            config,
            store,
            sidebar: Sidebar::new(),
            overlay: FacilityOverlay::new(),
        });
    });

    // Three independent loads: one layer failing must not block the others.
    for kind in HAZARD_KINDS {
        load_hazard_layer(kind);
    }
}

fn load_hazard_layer(kind: HazardKind) {
    let Some(api_base) = with_app(|app| app.config.api_base.clone()) else {
        return;
    };
    spawn_local(async move {
        let result = net::fetch_dataset(&api_base, kind).await;
        with_app(|app| match result {
            Ok(data) => {
                app.store.commit_dataset(kind, &data);
                bridge::set_hazard_layer(kind.name(), &app.store.styled_geojson(kind));
                bridge::show_layer(kind.name(), app.store.is_visible(kind));
            }
            Err(err) => {
                app.store.commit_failure(kind, err.clone());
                log(&format!("{} dataset load failed: {err}", kind.name()));
            }
        });
    });
}

/// Map click entry point, invoked by the bridge for clicks on bare map and
/// on hazard polygons alike.
#[wasm_bindgen]
pub fn map_clicked(lat: f64, lng: f64) {
    select_location(LatLng::new(lat, lng));
}

/// Toggles a hazard overlay. Data is untouched; toggling a layer back on
/// re-shows the exact same feature set without a refetch.
#[wasm_bindgen]
pub fn set_layer_visible(name: &str, visible: bool) {
    let Some(kind) = HazardKind::from_name(name) else {
        log(&format!("unknown hazard layer {name:?}"));
        return;
    };
    if with_app(|app| app.store.set_visible(kind, visible)).is_some() {
        bridge::show_layer(kind.name(), visible);
    }
}

/// Free-text location search via the public geocoder. Zero results produce a
/// visible not-found message and neither move the map nor drop a marker.
#[wasm_bindgen]
pub fn search_location(query: String) {
    let query = query.trim().to_string();
    if query.is_empty() {
        dom::show_search_status("Enter a location to search");
        return;
    }
    let Some(region) = with_app(|app| app.config.search_region.clone()) else {
        return;
    };

    dom::clear_search_status();
    spawn_local(async move {
        match net::geocode_search(&query, &region)
            .await
            .and_then(first_candidate)
            .and_then(|candidate| candidate.coords())
        {
            Ok((lat, lng)) => {
                bridge::fly_to(lat, lng, 15.0);
                select_location(LatLng::new(lat, lng));
            }
            Err(protocol::FetchError::Empty) => {
                dom::show_search_status(
                    "Location not found. Try \"Dumaguete\", \"Bais\", or a barangay name",
                );
            }
            Err(err) => {
                dom::show_search_status("Search failed, please try again");
                log(&format!("geocode search failed: {err}"));
            }
        }
    });
}

/// Facility card click: pans to the facility and opens its marker popup,
/// matched by coordinate within the documented tolerance.
#[wasm_bindgen]
pub fn facility_card_clicked(lat: f64, lng: f64) {
    let coord = LatLng::new(lat, lng);
    let index = with_app(|app| app.overlay.find_marker_index(coord)).flatten();
    match index {
        Some(index) => {
            bridge::fly_to(lat, lng, 17.0);
            bridge::open_facility_popup(index as u32);
        }
        None => log(&format!("no facility marker near ({lat}, {lng})")),
    }
}

#[wasm_bindgen]
pub fn set_sidebar_open(open: bool) {
    if with_app(|app| app.sidebar.open = open).is_some() {
        dom::set_sidebar_open(open);
    }
}

/// Uploads a shapefile for one dataset type and, on success, re-fetches the
/// affected hazard layer in place of the original's full page reload.
#[wasm_bindgen]
pub fn upload_hazard_shapefile(file: web_sys::File, dataset_type: String) {
    let Some(kind) = HazardKind::from_name(&dataset_type) else {
        dom::show_upload_result(false, "Select a valid dataset type");
        return;
    };
    let Some(api_base) = with_app(|app| app.config.api_base.clone()) else {
        return;
    };

    dom::show_upload_progress();
    spawn_local(async move {
        match net::upload_shapefile(&api_base, &file, kind.name()).await {
            Ok(outcome) if outcome.success => {
                dom::show_upload_result(
                    true,
                    &format!("Successfully processed {} records", outcome.records_created),
                );
                load_hazard_layer(kind);
            }
            Ok(outcome) => {
                let reason = outcome.error.unwrap_or_else(|| "Upload failed".to_string());
                dom::show_upload_result(false, &reason);
            }
            Err(err) => {
                dom::show_upload_result(false, "Network error during upload");
                log(&format!("shapefile upload failed: {err}"));
            }
        }
    });
}

fn select_location(coord: LatLng) {
    let Some(context) = with_app(|app| {
        let token = app.sidebar.begin_selection(coord);
        dom::set_sidebar_open(true);
        dom::render_location(app.sidebar.location());
        dom::render_hazards(app.sidebar.hazards());
        dom::render_facilities(app.sidebar.facilities());
        bridge::set_pin(coord.lat_deg, coord.lng_deg);
        (
            token,
            app.config.api_base.clone(),
            app.config.facility_radius_m,
            app.config.missing_code_style(),
        )
    }) else {
        return;
    };
    let (token, api_base, radius_m, missing) = context;

    // Three independent lookups; each panel renders as its fetch resolves,
    // and a commit carrying a superseded token is discarded.
    {
        let api_base = api_base.clone();
        spawn_local(async move {
            let result = net::fetch_location_info(&api_base, coord).await;
            with_app(|app| {
                if app.sidebar.commit_location(token, result) {
                    dom::render_location(app.sidebar.location());
                }
            });
        });
    }

    {
        let api_base = api_base.clone();
        spawn_local(async move {
            let result = net::fetch_location_hazards(&api_base, coord).await;
            with_app(|app| {
                if app.sidebar.commit_hazards(token, result, missing) {
                    dom::render_hazards(app.sidebar.hazards());
                }
            });
        });
    }

    spawn_local(async move {
        let result = net::fetch_nearby_facilities(&api_base, coord, radius_m).await;
        with_app(|app| {
            let data = result.as_ref().ok().cloned();
            if !app.sidebar.commit_facilities(token, result) {
                return;
            }
            dom::render_facilities(app.sidebar.facilities());

            // The marker set is replaced atomically alongside the panel.
            bridge::clear_facility_markers();
            if let Some(data) = data {
                app.overlay.rebuild(&data);
                for marker in app.overlay.markers() {
                    bridge::add_facility_marker(
                        marker.coord.lat_deg,
                        marker.coord.lng_deg,
                        marker.category.color(),
                        &facility_popup_html(marker),
                    );
                }
            } else {
                app.overlay.clear();
            }
        });
    });
}

fn facility_popup_html(marker: &sidebar::FacilityMarker) -> String {
    format!(
        r#"<div class="facility-popup">
  <strong>{}</strong>
  <div>{}</div>
  <div>{} away</div>
</div>"#,
        dom::escape(&marker.name),
        dom::escape(&marker.type_display),
        dom::escape(&marker.distance_display),
    )
}
