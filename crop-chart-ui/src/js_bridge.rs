//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js scatter chart lives in `assets/js/*.js` and is evaluated as
//! globals (no ES modules) exposed via `window.*`. This module provides
//! Rust wrappers that serialize data and call those globals.

use wasm_bindgen::JsValue;

// Embed the D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");

fn eval(code: &str) -> Result<JsValue, JsValue> {
    js_sys::eval(code)
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Crop JS call failed:', e); }}",
        code
    );
    if let Err(e) = eval(&wrapped) {
        log::warn!("[Crop Debug] js_bridge: eval failed: {:?}", e);
    }
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions via `function` declarations. They are
/// evaluated at global scope with an indirect `eval()` once D3 is ready, then
/// promoted to `window.*` explicitly. Call once at app startup.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, SCATTER_CHART_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = match serde_json::to_string(&all_js) {
        Ok(js) => format!("window.__cropChartScripts = {};", js),
        Err(e) => {
            log::error!("[Crop Debug] js_bridge: failed to encode chart scripts: {}", e);
            return;
        }
    };
    if let Err(e) = eval(&store_js) {
        log::warn!("[Crop Debug] js_bridge: storing chart scripts failed: {:?}", e);
        return;
    }

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__cropChartScripts);
                    delete window.__cropChartScripts;
                    if (typeof renderScatterChart !== 'undefined') window.renderScatterChart = renderScatterChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__cropChartsReady = true;
                    console.log('Crop charts initialized');
                }
            }, 100);
        })();
    "#;
    if let Err(e) = eval(init_js) {
        log::warn!("[Crop Debug] js_bridge: chart init failed: {:?}", e);
    }
}

/// Render (or re-render) the scatter chart into `container_id`.
///
/// `data_json` is the column-oriented `{x, y, state, district}` source and
/// `config_json` a serialized [`ScatterChartConfig`](crate::chart_config::ScatterChartConfig).
/// Both are spliced in as JS object literals, so they must be valid JSON.
/// Polls until D3, the chart scripts and the container element all exist.
pub fn render_scatter_chart(container_id: &str, data_json: &str, config_json: &str) {
    call_js(&format!(
        r#"
        (function() {{
            var data = {data_json};
            var config = {config_json};
            var poll = setInterval(function() {{
                if (window.__cropChartsReady &&
                    typeof window.renderScatterChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderScatterChart('{container_id}', data, config);
                    }} catch(e) {{ console.error('[Crop] renderScatterChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id))
    {
        el.set_inner_html("");
    }
}
