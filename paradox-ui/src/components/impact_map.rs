//! Impact Map Component
//!
//! Leaflet map of the counties hit hardest.

use leptos::*;
use serde::Serialize;

use paradox::page::{ImpactSite, MAP_CENTER, MAP_ZOOM};

use crate::js_bridge;

const MAP_ID: &str = "impact-map";

#[derive(Serialize)]
struct Marker {
    lat: f64,
    lng: f64,
    severity: &'static str,
    popup: String,
}

#[component]
pub fn ImpactMap(sites: &'static [ImpactSite]) -> impl IntoView {
    let markers: Vec<Marker> = sites
        .iter()
        .map(|site| Marker {
            lat: site.lat,
            lng: site.lng,
            severity: site.severity.as_str(),
            popup: site.popup(),
        })
        .collect();
    let markers_json = serde_json::to_string(&markers).unwrap_or_else(|_| "[]".to_string());

    create_effect(move |_| {
        js_bridge::render_map(MAP_ID, &markers_json, MAP_CENTER, MAP_ZOOM);
    });
    on_cleanup(|| js_bridge::destroy_map(MAP_ID));

    view! {
        <div class="bg-white rounded-xl shadow p-6">
            <h3 class="text-lg font-semibold mb-4">"Climate Impact Map"</h3>
            <div id=MAP_ID class="impact-map rounded-lg" />
            <div class="flex space-x-6 mt-3 text-sm text-gray-600">
                <span><span class="inline-block w-3 h-3 rounded-full bg-red-600 mr-2" />"High severity"</span>
                <span><span class="inline-block w-3 h-3 rounded-full bg-orange-500 mr-2" />"Medium severity"</span>
            </div>
        </div>
    }
}
