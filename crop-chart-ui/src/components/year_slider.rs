//! Year slider bounded by the years present in the aggregate table.

use crate::state::AppState;
use dioxus::prelude::*;

/// Range input over the aggregate's years, step 1.
///
/// Commits on `change` (drag end), so dragging across many years triggers a
/// single chart refresh.
#[component]
pub fn YearSlider() -> Element {
    let mut state = use_context::<AppState>();
    let year = (state.selected_year)();
    let Some(range) = (state.year_range)() else {
        return rsx! {};
    };

    let on_change = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<i32>() {
            let value = value.clamp(range.start, range.end);
            log::info!("[Crop Debug] year_slider: selected {}", value);
            state.selected_year.set(value);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; flex-direction: column; gap: 4px;",
            label {
                r#for: "year-slider",
                style: "font-weight: bold;",
                "Year: {year}"
            }
            input {
                id: "year-slider",
                r#type: "range",
                min: "{range.start}",
                max: "{range.end}",
                step: "1",
                value: "{year}",
                onchange: on_change,
            }
            div {
                style: "display: flex; justify-content: space-between; font-size: 11px; color: #666;",
                span { "{range.start}" }
                span { "{range.end}" }
            }
        }
    }
}
