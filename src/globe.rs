// Decorative 3D globe. The Rust side only describes the data - points,
// arcs, initial point of view - and hands it to a small JS shim
// (assets/globe.js) that drives globe.gl. Nothing flows back.

use leptos::prelude::*;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlobePoint {
    pub label: &'static str,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobeArc {
    pub start_lat: f64,
    pub start_lng: f64,
    pub end_lat: f64,
    pub end_lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointOfView {
    pub lat: f64,
    pub lng: f64,
    pub altitude: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobeConfig {
    pub points: Vec<GlobePoint>,
    pub arcs: Vec<GlobeArc>,
    pub point_of_view: PointOfView,
    pub auto_rotate_speed: f64,
}

/// Places I have worked from or with.
pub const CITIES: &[GlobePoint] = &[
    GlobePoint { label: "Faridabad, Encrobytes", lat: 28.4089, lng: 77.3178 },
    GlobePoint { label: "Bangalore, People Maketh", lat: 12.9716, lng: 77.5946 },
    GlobePoint { label: "Dubai, Evtaar", lat: 25.2048, lng: 55.2708 },
];

/// Arcs between consecutive cities, as index pairs into [`CITIES`].
pub const ARC_ROUTES: &[(usize, usize)] = &[(0, 1), (1, 2)];

impl GlobeConfig {
    pub fn site_default() -> GlobeConfig {
        let arcs = ARC_ROUTES
            .iter()
            .map(|&(from, to)| GlobeArc {
                start_lat: CITIES[from].lat,
                start_lng: CITIES[from].lng,
                end_lat: CITIES[to].lat,
                end_lng: CITIES[to].lng,
            })
            .collect();
        GlobeConfig {
            points: CITIES.to_vec(),
            arcs,
            point_of_view: PointOfView { lat: 20.0, lng: 70.0, altitude: 1.7 },
            auto_rotate_speed: 0.3,
        }
    }
}

#[wasm_bindgen]
extern "C" {
    /// `window.portfolioGlobe.init(elementId, configJson)` from assets/globe.js.
    /// `catch` so a missing shim or library degrades to an empty container.
    #[wasm_bindgen(js_namespace = ["window", "portfolioGlobe"], js_name = init, catch)]
    fn globe_init(element_id: &str, config_json: &str) -> Result<(), JsValue>;
}

#[component]
pub fn Earth3D() -> impl IntoView {
    const NODE_ID: &str = "earth-globe";

    Effect::new(move || {
        if let Ok(config) = serde_json::to_string(&GlobeConfig::site_default()) {
            let _ = globe_init(NODE_ID, &config);
        }
    });

    view! {
        <div class="globe-wrap">
            <div id=NODE_ID class="globe-canvas"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn arc_routes_index_real_cities() {
        for &(from, to) in ARC_ROUTES {
            assert!(from < CITIES.len());
            assert!(to < CITIES.len());
            assert_ne!(from, to);
        }
    }

    #[test]
    fn config_serializes_to_the_shim_shape() {
        let json = serde_json::to_string(&GlobeConfig::site_default()).unwrap();
        assert!(json.contains("\"points\""));
        assert!(json.contains("\"arcs\""));
        assert!(json.contains("\"startLat\""));
        assert!(json.contains("\"pointOfView\""));
        assert!(json.contains("\"autoRotateSpeed\""));
        assert!(json.contains("Bangalore, People Maketh"));
    }

    #[test]
    fn arcs_chain_the_cities_in_order() {
        let config = GlobeConfig::site_default();
        assert_eq!(config.arcs.len(), 2);
        assert_eq!(config.arcs[0].end_lat, config.arcs[1].start_lat);
        assert_eq!(config.arcs[0].end_lng, config.arcs[1].start_lng);
    }
}
