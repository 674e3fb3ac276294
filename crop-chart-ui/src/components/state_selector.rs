//! Dropdown selector for choosing a state.

use crate::state::AppState;
use dioxus::prelude::*;

/// State dropdown.
/// Reads the sorted state names from AppState and updates selected_state on change.
#[component]
pub fn StateSelector() -> Element {
    let mut state = use_context::<AppState>();
    let states = state.states.read().clone();
    let selected = (state.selected_state)();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        log::info!("[Crop Debug] state_selector: selected {}", value);
        state.selected_state.set(value);
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; flex-direction: column; gap: 4px;",
            label {
                r#for: "state-select",
                style: "font-weight: bold;",
                "State:"
            }
            select {
                id: "state-select",
                onchange: on_change,
                for name in states.iter() {
                    option {
                        value: "{name}",
                        selected: *name == selected,
                        "{name}"
                    }
                }
            }
        }
    }
}
