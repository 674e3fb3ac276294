//! Query result model structs.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend.

use crop_data::palette::DistrictPalette;
use serde::Serialize;

/// One row of the aggregate table.
///
/// `area` and `production` are means rounded to one decimal place; `None`
/// when every contributing cell was missing.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AggregateRow {
    pub state: String,
    pub district: String,
    pub year: i32,
    pub area: Option<f64>,
    pub production: Option<f64>,
}

/// Column-oriented chart data for one (year, state) selection.
///
/// The four vectors always have equal length; index `i` across them is one
/// scatter point. Missing means serialize as `null`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct CropView {
    /// Mean area.
    pub x: Vec<Option<f64>>,
    /// Mean production.
    pub y: Vec<Option<f64>>,
    pub state: Vec<String>,
    pub district: Vec<String>,
}

impl CropView {
    pub fn push(&mut self, row: AggregateRow) {
        self.x.push(row.area);
        self.y.push(row.production);
        self.state.push(row.state);
        self.district.push(row.district);
    }

    pub fn len(&self) -> usize {
        self.district.len()
    }

    pub fn is_empty(&self) -> bool {
        self.district.is_empty()
    }
}

impl FromIterator<AggregateRow> for CropView {
    fn from_iter<I: IntoIterator<Item = AggregateRow>>(iter: I) -> Self {
        let mut view = CropView::default();
        for row in iter {
            view.push(row);
        }
        view
    }
}

/// Inclusive year bounds of the aggregate table, used for the slider.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

/// Everything the chart needs after a control change: the new data source
/// and the color mapping for the selected state.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ViewRefresh {
    pub source: CropView,
    pub palette: DistrictPalette,
}
