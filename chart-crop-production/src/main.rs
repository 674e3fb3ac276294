//! Crop Area vs Production
//!
//! Scatter chart of mean cultivated area against mean production, one point
//! per district, colored by district. A year slider and a state dropdown
//! choose which slice of the aggregate table is shown.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/crop_production.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is loaded into an in-memory SQLite database and the
//!    "Whole Year" aggregate table is built. A failed load is fatal: only the
//!    error panel is rendered.
//! 4. Whenever the slider or dropdown changes, the app asks the database for
//!    the (year, state) view and the state's district palette, and re-renders
//!    the chart with both.

use crop_chart_ui::chart_config::{ScatterChartConfig, CHART_HEIGHT, CHART_TITLE, CHART_WIDTH};
use crop_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, StateSelector, YearSlider,
};
use crop_chart_ui::js_bridge;
use crop_chart_ui::state::AppState;
use crop_data::view_state::ViewState;
use crop_db::models::YearRange;
use crop_db::Database;
use dioxus::prelude::*;

/// Crop production records, all seasons.
const CROP_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/crop_production.csv"));

/// Chart container DOM element ID used by D3.js to render into.
const CHART_ID: &str = "crop-scatter-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("crop-production-root"))
        .launch(App);
}

/// Everything the first render needs, produced by a successful load.
struct LoadedData {
    db: Database,
    year_range: YearRange,
    states: Vec<String>,
    initial: ViewState,
}

/// Load the CSV and read the control bounds. Any failure here is fatal.
fn load_database(csv: &str) -> anyhow::Result<LoadedData> {
    let db = Database::new()?;
    db.load_crop_csv(csv)?;
    let year_range = db
        .query_year_range()?
        .ok_or_else(|| anyhow::anyhow!("no \"Whole Year\" records to aggregate"))?;
    let states = db.query_states()?;
    let initial = ViewState::initial(year_range.start, &states)
        .ok_or_else(|| anyhow::anyhow!("aggregate table has no states"))?;
    Ok(LoadedData {
        db,
        year_range,
        states,
        initial,
    })
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Evaluate the D3 chart scripts once
    use_hook(js_bridge::init_charts);

    // Load and aggregate once, on mount
    use_effect(move || {
        match load_database(CROP_CSV) {
            Ok(loaded) => {
                log::info!(
                    "[Crop Debug] app: {} states, years {}..={}, initial view {} / {}",
                    loaded.states.len(),
                    loaded.year_range.start,
                    loaded.year_range.end,
                    loaded.initial.year,
                    loaded.initial.state
                );
                state.year_range.set(Some(loaded.year_range));
                state.states.set(loaded.states);
                state.select(loaded.initial);
                state.db.set(Some(loaded.db));
                state.loading.set(false);
            }
            Err(e) => {
                log::error!("Failed to load crop data: {:#}", e);
                state.error_msg.set(Some(format!("{:#}", e)));
                state.loading.set(false);
            }
        }
    });

    // Re-render the chart whenever the year or state changes
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };

        let view = state.view_state();
        if view.state.is_empty() {
            return;
        }
        render_view(&db, &view);
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: CHART_TITLE.to_string(),
                description: "Mean area and production of \"Whole Year\" crops per district".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; gap: 24px; align-items: flex-start;",
                    div {
                        style: "width: 220px; flex: none;",
                        YearSlider {}
                        StateSelector {}
                    }
                    ChartContainer {
                        id: CHART_ID.to_string(),
                        width: CHART_WIDTH,
                        height: CHART_HEIGHT,
                    }
                }
            }
        }
    }
}

/// Push the (year, state) view and its district palette into the chart.
fn render_view(db: &Database, view: &ViewState) {
    let refresh = match db.refresh_view(view) {
        Ok(r) => r,
        Err(e) => {
            log::warn!("View query failed for {} / {}: {}", view.year, view.state, e);
            js_bridge::destroy_chart(CHART_ID);
            return;
        }
    };
    log::info!(
        "[Crop Debug] app: {} / {} -> {} points, {} districts in palette",
        view.year,
        view.state,
        refresh.source.len(),
        refresh.palette.len()
    );

    let config = ScatterChartConfig::for_palette(&refresh.palette);
    let (data_json, config_json) = match (
        serde_json::to_string(&refresh.source),
        serde_json::to_string(&config),
    ) {
        (Ok(d), Ok(c)) => (d, c),
        (Err(e), _) | (_, Err(e)) => {
            log::error!("Failed to serialize chart payload: {}", e);
            return;
        }
    };

    js_bridge::render_scatter_chart(CHART_ID, &data_json, &config_json);
}
