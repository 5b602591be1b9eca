//! Typed wrappers around Chart.js and Leaflet via `js_sys::eval()`.
//!
//! The helpers in `assets/js/paradox-charts.js` are evaluated once at startup
//! and promoted to `window.*` after both libraries have loaded. Every render
//! call polls until the helpers and its DOM node exist. Polls are keyed by
//! element id in `window.__paradoxPolls`, give up after [`MAX_POLLS`] ticks,
//! and are cancelled by the matching `destroy_*` call.

static CHARTS_JS: &str = include_str!("../assets/js/paradox-charts.js");

/// Poll ticks (100 ms each) before a pending render is abandoned
pub const MAX_POLLS: u32 = 300;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Paradox JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS literal
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Poll until the helpers and `#id` exist, then run `render`.
/// Replaces any poll already pending for the same id.
fn poll_then(id: &str, render: &str) -> String {
    format!(
        r#"
        (function() {{
            var polls = window.__paradoxPolls = window.__paradoxPolls || {{}};
            if (polls[{id}]) {{ clearInterval(polls[{id}]); }}
            var ticks = 0;
            polls[{id}] = setInterval(function() {{
                ticks += 1;
                if (window.__paradoxReady && document.getElementById({id})) {{
                    clearInterval(polls[{id}]);
                    delete polls[{id}];
                    {render}
                }} else if (ticks >= {max}) {{
                    clearInterval(polls[{id}]);
                    delete polls[{id}];
                    console.warn('Paradox render abandoned for', {id});
                }}
            }}, 100);
        }})();
        "#,
        max = MAX_POLLS,
    )
}

/// Stop a pending render for `id`, if any
fn cancel_poll(id: &str) -> String {
    format!(
        "if (window.__paradoxPolls && window.__paradoxPolls[{id}]) {{ \
            clearInterval(window.__paradoxPolls[{id}]); delete window.__paradoxPolls[{id}]; }}"
    )
}

/// Load the chart and map helpers once Chart.js and Leaflet are present.
pub fn init() {
    let store_js = format!("window.__paradoxScripts = {};", js_string(CHARTS_JS));
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForLibs = setInterval(function() {
                if (typeof Chart !== 'undefined' && typeof L !== 'undefined') {
                    clearInterval(waitForLibs);
                    (0, eval)(window.__paradoxScripts);
                    delete window.__paradoxScripts;
                    window.paradoxRenderChart = paradoxRenderChart;
                    window.paradoxDestroyChart = paradoxDestroyChart;
                    window.paradoxRenderMap = paradoxRenderMap;
                    window.paradoxDestroyMap = paradoxDestroyMap;
                    window.__paradoxReady = true;
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Draw a Chart.js chart into the canvas with `canvas_id`
pub fn render_chart(canvas_id: &str, config: &serde_json::Value) {
    let id = js_string(canvas_id);
    let config = js_string(&config.to_string());
    call_js(&poll_then(
        &id,
        &format!("window.paradoxRenderChart({id}, {config});"),
    ));
}

pub fn destroy_chart(canvas_id: &str) {
    let id = js_string(canvas_id);
    call_js(&format!(
        "{} if (window.paradoxDestroyChart) {{ window.paradoxDestroyChart({id}); }}",
        cancel_poll(&id)
    ));
}

/// Draw the Leaflet impact map. `sites_json` is an array of
/// `{lat, lng, severity, popup}` objects.
pub fn render_map(container_id: &str, sites_json: &str, center: (f64, f64), zoom: u8) {
    let id = js_string(container_id);
    let sites = js_string(sites_json);
    let (lat, lng) = center;
    call_js(&poll_then(
        &id,
        &format!("window.paradoxRenderMap({id}, {sites}, {lat}, {lng}, {zoom});"),
    ));
}

pub fn destroy_map(container_id: &str) {
    let id = js_string(container_id);
    call_js(&format!(
        "{} if (window.paradoxDestroyMap) {{ window.paradoxDestroyMap({id}); }}",
        cancel_poll(&id)
    ));
}

/// Blocking notification
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn poll_pending(id: &str) -> bool {
        let id = js_string(id);
        js_sys::eval(&format!("!!(window.__paradoxPolls && window.__paradoxPolls[{id}])"))
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }

    #[wasm_bindgen_test]
    fn test_destroy_cancels_pending_chart_render() {
        let config = serde_json::json!({ "type": "bar" });
        render_chart("chart-unmounted", &config);
        assert!(poll_pending("chart-unmounted"));

        destroy_chart("chart-unmounted");
        assert!(!poll_pending("chart-unmounted"));
    }

    #[wasm_bindgen_test]
    fn test_rerender_replaces_pending_map_poll() {
        render_map("map-unmounted", "[]", (0.0, 37.0), 6);
        render_map("map-unmounted", "[]", (0.0, 37.0), 6);
        assert!(poll_pending("map-unmounted"));

        destroy_map("map-unmounted");
        assert!(!poll_pending("map-unmounted"));
    }

    #[wasm_bindgen_test]
    fn test_poll_script_is_bounded_and_keyed() {
        let script = poll_then("\"chart-3\"", "draw();");
        assert!(script.contains(&format!("ticks >= {}", MAX_POLLS)));
        assert!(script.contains("polls[\"chart-3\"] = setInterval"));
        assert!(cancel_poll("\"chart-3\"").contains("clearInterval(window.__paradoxPolls[\"chart-3\"])"));
    }
}
