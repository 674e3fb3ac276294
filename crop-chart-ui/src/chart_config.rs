//! Configuration object handed to `renderScatterChart`.

use crop_data::palette::DistrictPalette;
use serde::Serialize;

pub const CHART_TITLE: &str = "Crop Area vs Production";
pub const X_AXIS_LABEL: &str = "Area";
pub const Y_AXIS_LABEL: &str = "Production";
pub const CHART_WIDTH: u32 = 1200;
pub const CHART_HEIGHT: u32 = 900;

/// Scatter chart settings plus the categorical color mapping.
///
/// Serialized with camelCase keys for the JS side.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScatterChartConfig {
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub width: u32,
    pub height: u32,
    pub point_size: u32,
    pub point_alpha: f64,
    pub legend_location: String,
    /// Data column shown in the hover tooltip.
    pub tooltip_field: String,
    /// Color domain: the districts of the selected state.
    pub factors: Vec<String>,
    /// One color per factor.
    pub palette: Vec<String>,
}

impl ScatterChartConfig {
    pub fn for_palette(palette: &DistrictPalette) -> Self {
        Self {
            title: CHART_TITLE.to_string(),
            x_axis_label: X_AXIS_LABEL.to_string(),
            y_axis_label: Y_AXIS_LABEL.to_string(),
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
            point_size: 12,
            point_alpha: 0.7,
            legend_location: "top_right".to_string(),
            tooltip_field: "district".to_string(),
            factors: palette.factors().to_vec(),
            palette: palette.colors().to_vec(),
        }
    }
}
