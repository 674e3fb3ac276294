//! Fixed-size container the D3.js chart renders into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id D3 renders into
    pub id: String,
    pub width: u32,
    pub height: u32,
}

/// A fixed canvas for the scatter chart. The inner div has no RSX children,
/// so D3 owns its contents.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "width: {}px; height: {}px; flex: none; border: 1px solid #EEEEEE;",
        props.width, props.height
    );

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
                style: "width: 100%; height: 100%;",
            }
        }
    }
}
