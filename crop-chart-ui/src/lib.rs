//! Shared Dioxus components and D3.js bridge for the crop production chart.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js scatter chart via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `chart_config`: Serializable scatter chart configuration
//! - `components`: Reusable RSX components (slider, selector, containers, etc.)

pub mod chart_config;
pub mod components;
pub mod js_bridge;
pub mod state;
