//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! The database and the selected controls live here and are passed explicitly
//! to the filter and render code; nothing is captured in global closures.

use crop_data::view_state::ViewState;
use crop_db::models::YearRange;
use crop_db::Database;
use dioxus::prelude::*;

/// Shared application state for the crop production chart.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Slider bounds, from the aggregate table
    pub year_range: Signal<Option<YearRange>>,
    /// Dropdown options, sorted
    pub states: Signal<Vec<String>>,
    /// Currently selected year
    pub selected_year: Signal<i32>,
    /// Currently selected state
    pub selected_state: Signal<String>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            year_range: Signal::new(None),
            states: Signal::new(Vec::new()),
            selected_year: Signal::new(0),
            selected_state: Signal::new(String::new()),
        }
    }

    /// Snapshot of the two controls. Reading inside an effect subscribes it
    /// to both signals.
    pub fn view_state(&self) -> ViewState {
        ViewState::new((self.selected_year)(), (self.selected_state)())
    }

    /// Apply an initial view to the controls.
    pub fn select(&mut self, view: ViewState) {
        self.selected_year.set(view.year);
        self.selected_state.set(view.state);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
