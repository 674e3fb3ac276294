//! Reusable Dioxus RSX components for the crop production chart.

mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod state_selector;
mod year_slider;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use state_selector::StateSelector;
pub use year_slider::YearSlider;
