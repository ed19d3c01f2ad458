//! Bindings to the page's `MapBridge` global (`www/map_bridge.js`), the thin
//! Leaflet glue. The bridge draws what it is told and forwards every map
//! click back into `map_clicked`, including clicks on hazard polygons, so
//! clicking a polygon behaves identically to clicking bare map background.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = MapBridge, js_name = initMap)]
    pub fn init_map(lat: f64, lng: f64, zoom: f64);

    /// Replaces a hazard layer's rendered features from styled GeoJSON
    /// (paint baked into each feature's properties).
    #[wasm_bindgen(js_namespace = MapBridge, js_name = setHazardLayer)]
    pub fn set_hazard_layer(name: &str, styled_geojson: &str);

    #[wasm_bindgen(js_namespace = MapBridge, js_name = showLayer)]
    pub fn show_layer(name: &str, visible: bool);

    /// Places the single selection pin, replacing any previous one.
    #[wasm_bindgen(js_namespace = MapBridge, js_name = setPin)]
    pub fn set_pin(lat: f64, lng: f64);

    #[wasm_bindgen(js_namespace = MapBridge, js_name = flyTo)]
    pub fn fly_to(lat: f64, lng: f64, zoom: f64);

    #[wasm_bindgen(js_namespace = MapBridge, js_name = clearFacilityMarkers)]
    pub fn clear_facility_markers();

    /// Appends one facility marker; markers are addressed positionally in
    /// insertion order by `openFacilityPopup`.
    #[wasm_bindgen(js_namespace = MapBridge, js_name = addFacilityMarker)]
    pub fn add_facility_marker(lat: f64, lng: f64, color: &str, popup_html: &str);

    #[wasm_bindgen(js_namespace = MapBridge, js_name = openFacilityPopup)]
    pub fn open_facility_popup(index: u32);
}
