use dioxus::prelude::*;

/// Shown while the CSV is parsed and aggregated.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "Aggregating crop data..."
        }
    }
}
