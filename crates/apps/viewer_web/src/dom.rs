//! Sidebar DOM rendering: typed view-models in, markup out.
//!
//! Every dynamic string goes through [`escape`] before it reaches the DOM.
//! The only exception is `recommendation_details`, which is backend-authored
//! HTML and inserted as-is, matching the deployed behavior.

use sidebar::{
    FacilitiesPanel, FacilityGroup, HazardsPanel, LocationPanel, PanelState,
};
use web_sys::Document;

const SIDEBAR_ID: &str = "sidebar";
const LOCATION_ID: &str = "location-info";
const HAZARDS_ID: &str = "hazard-details";
const FACILITIES_ID: &str = "facilities-section";
const SEARCH_STATUS_ID: &str = "search-status";
const UPLOAD_RESULT_ID: &str = "upload-result";

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

fn set_html(id: &str, html: &str) {
    if let Some(doc) = document()
        && let Some(el) = doc.get_element_by_id(id)
    {
        el.set_inner_html(html);
    }
}

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn set_sidebar_open(open: bool) {
    if let Some(doc) = document()
        && let Some(el) = doc.get_element_by_id(SIDEBAR_ID)
    {
        let _ = if open {
            el.class_list().remove_1("hidden")
        } else {
            el.class_list().add_1("hidden")
        };
    }
}

pub fn render_location(state: &PanelState<LocationPanel>) {
    let html = match state {
        PanelState::Idle => String::new(),
        PanelState::Loading => {
            r#"<p class="panel-loading">Loading location information...</p>"#.to_string()
        }
        PanelState::Populated(LocationPanel::Named {
            barangay,
            municipality,
            province,
            lat,
            lng,
        }) => format!(
            r#"<div class="location-named">
  <div class="location-barangay">{}</div>
  <div class="location-admin">{}, {}</div>
  <div class="location-coords">Latitude: {} &middot; Longitude: {}</div>
</div>"#,
            escape(barangay),
            escape(municipality),
            escape(province),
            escape(lat),
            escape(lng),
        ),
        PanelState::Populated(LocationPanel::CoordinatesOnly { lat, lng }) => format!(
            r#"<div class="location-coords-only">
  <strong>Selected Location</strong>
  <span>Latitude: {}</span>
  <span>Longitude: {}</span>
</div>"#,
            escape(lat),
            escape(lng),
        ),
        PanelState::Failed(reason) => {
            format!(r#"<p class="panel-error">{}</p>"#, escape(reason))
        }
    };
    set_html(LOCATION_ID, &html);
}

pub fn render_hazards(state: &PanelState<HazardsPanel>) {
    let html = match state {
        PanelState::Idle => String::new(),
        PanelState::Loading => {
            r#"<p class="panel-loading">Analyzing hazard levels...</p>"#.to_string()
        }
        PanelState::Populated(panel) => hazards_html(panel),
        PanelState::Failed(reason) => {
            format!(r#"<p class="panel-error">{}</p>"#, escape(reason))
        }
    };
    set_html(HAZARDS_ID, &html);
}

fn hazards_html(panel: &HazardsPanel) -> String {
    let mut html = String::new();

    if let Some(risk) = &panel.overall {
        html.push_str(&format!(
            r#"<div class="overall-risk" style="border-color: {color}">
  <div class="overall-risk-category" style="color: {color}">{category}</div>
  <div class="overall-risk-score">{score:.1} / 100 &middot; {safety}</div>
  <div class="overall-risk-message">{message}</div>
  <details class="overall-risk-recommendation">
    <summary>{summary}</summary>
    {details}
  </details>
</div>"#,
            color = escape(&risk.color),
            category = escape(&risk.category),
            score = risk.score,
            safety = escape(&risk.safety_level),
            message = escape(&risk.message),
            summary = escape(&risk.recommendation_summary),
            // Backend-authored HTML, inserted verbatim.
            details = risk.recommendation_details,
        ));
    }

    html.push_str(r#"<div class="hazard-item">"#);
    for entry in &panel.entries {
        html.push_str(&format!(
            r#"<div class="hazard-row">
  <strong>{}:</strong>
  <div class="hazard-reading">
    <span class="hazard-swatch" style="background-color: {}"></span>
    <span>{}</span>
  </div>{}
</div>"#,
            escape(entry.title),
            entry.swatch,
            escape(&entry.label),
            entry
                .risk_label
                .as_ref()
                .map(|r| format!(r#"<div class="hazard-risk-label">{}</div>"#, escape(r)))
                .unwrap_or_default(),
        ));
    }
    html.push_str("</div>");
    html
}

pub fn render_facilities(state: &PanelState<FacilitiesPanel>) {
    let html = match state {
        PanelState::Idle => String::new(),
        PanelState::Loading => {
            r#"<p class="panel-loading">Loading nearby facilities from OpenStreetMap...</p>"#
                .to_string()
        }
        PanelState::Populated(panel) if panel.is_empty() => r#"<div class="facilities-empty">
  <p>No facilities found within the search radius</p>
  <p>Try selecting a location in a more populated area</p>
</div>"#
            .to_string(),
        PanelState::Populated(panel) => facilities_html(panel),
        PanelState::Failed(reason) => {
            format!(r#"<p class="panel-error">{}</p>"#, escape(reason))
        }
    };
    set_html(FACILITIES_ID, &html);
}

fn facilities_html(panel: &FacilitiesPanel) -> String {
    let mut html = format!(
        r#"<div class="facilities-total"><strong>Found {} facilities nearby</strong></div>"#,
        panel.total
    );

    if !panel.nearest.is_empty() {
        html.push_str(r#"<div class="facilities-summary">"#);
        for nearest in &panel.nearest {
            html.push_str(&format!(
                r#"<div class="nearest-row"><span>{}</span><strong>{}</strong> &middot; {}{}</div>"#,
                escape(nearest.title),
                escape(&nearest.name),
                escape(&nearest.distance),
                if nearest.is_walkable {
                    r#" <span class="walkable">walkable</span>"#
                } else {
                    ""
                },
            ));
        }
        html.push_str("</div>");
    }

    for group in &panel.groups {
        html.push_str(&group_html(group));
    }

    html.push_str(r#"<p class="facilities-attribution">Data from OpenStreetMap contributors</p>"#);
    html
}

fn group_html(group: &FacilityGroup) -> String {
    let mut html = format!(
        r#"<div class="facility-category">
<h5 style="color: {}">{} ({})</h5>"#,
        group.category.color(),
        escape(group.category.heading()),
        group.total,
    );

    for card in &group.cards {
        // data-lat/data-lng feed the delegated click handler in the page,
        // which calls back into facility_card_clicked.
        html.push_str(&format!(
            r#"<div class="facility-card" data-lat="{lat}" data-lng="{lng}" style="border-left-color: {color}">
  <div class="facility-name">{name}</div>
  <div class="facility-type">{kind}</div>
  <div class="facility-distance">{distance} away</div>
</div>"#,
            lat = card.coord.lat_deg,
            lng = card.coord.lng_deg,
            color = group.category.color(),
            name = escape(&card.name),
            kind = escape(&card.type_display),
            distance = escape(&card.distance_display),
        ));
    }

    if group.overflow() > 0 {
        html.push_str(&format!(
            r#"<p class="facility-overflow">... and {} more</p>"#,
            group.overflow()
        ));
    }
    html.push_str("</div>");
    html
}

pub fn show_search_status(message: &str) {
    set_html(
        SEARCH_STATUS_ID,
        &format!(r#"<p class="search-status">{}</p>"#, escape(message)),
    );
}

pub fn clear_search_status() {
    set_html(SEARCH_STATUS_ID, "");
}

pub fn show_upload_progress() {
    set_html(
        UPLOAD_RESULT_ID,
        r#"<p class="panel-loading">Uploading and processing shapefile...</p>"#,
    );
}

pub fn show_upload_result(success: bool, message: &str) {
    let class = if success {
        "upload-ok"
    } else {
        "upload-error"
    };
    set_html(
        UPLOAD_RESULT_ID,
        &format!(r#"<div class="{class}">{}</div>"#, escape(message)),
    );
}

#[cfg(test)]
mod tests {
    use super::escape;

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape(r#"<b>"Daro" & 'Piapi'</b>"#),
            "&lt;b&gt;&quot;Daro&quot; &amp; &#39;Piapi&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }
}
