//! Typed query methods over the aggregate table.
//!
//! All queries read `aggregates`, which is immutable once
//! [`Database::load_crop_csv`] returns. That makes every query here a pure
//! function of its arguments, and lets [`Database::query_crop_view`]
//! memoize its results by (year, state).

use crate::models::{AggregateRow, CropView, ViewRefresh, YearRange};
use crate::Database;
use crop_data::palette::DistrictPalette;
use crop_data::view_state::ViewState;
use rusqlite::params;

impl Database {
    /// Chart data for every district of `state` in `year`, ordered by district.
    ///
    /// A (year, state) pair with no aggregate rows yields an empty view, not
    /// an error. Results are cached per (year, state).
    pub fn query_crop_view(&self, year: i32, state: &str) -> anyhow::Result<CropView> {
        let key = ViewState::new(year, state);
        if let Some(view) = self.view_cache.borrow().get(&key) {
            return Ok(view.clone());
        }

        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT state, district, year, area, production FROM aggregates
             WHERE year = ?1 AND state = ?2
             ORDER BY district",
        )?;
        let view = stmt
            .query_map(params![year, state], |row| {
                Ok(AggregateRow {
                    state: row.get(0)?,
                    district: row.get(1)?,
                    year: row.get(2)?,
                    area: row.get(3)?,
                    production: row.get(4)?,
                })
            })?
            .collect::<Result<CropView, _>>()?;
        log::info!(
            "[Crop Debug] query: query_crop_view({}, {}) returned {} records",
            year,
            state,
            view.len()
        );

        self.view_cache.borrow_mut().insert(key, view.clone());
        Ok(view)
    }

    /// Sorted distinct districts of `state` across all years.
    ///
    /// This is the color domain for the state, so it does not depend on the
    /// selected year.
    pub fn query_state_districts(&self, state: &str) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT DISTINCT district FROM aggregates
             WHERE state = ?1
             ORDER BY district",
        )?;
        let rows = stmt
            .query_map(params![state], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        log::info!(
            "[Crop Debug] query: query_state_districts({}) returned {} records",
            state,
            rows.len()
        );
        Ok(rows)
    }

    /// District → color mapping for `state`.
    pub fn query_district_palette(&self, state: &str) -> anyhow::Result<DistrictPalette> {
        let districts = self.query_state_districts(state)?;
        Ok(DistrictPalette::for_districts(&districts))
    }

    /// Sorted distinct state names, the options of the state dropdown.
    pub fn query_states(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare("SELECT DISTINCT state FROM aggregates ORDER BY state")?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        log::info!(
            "[Crop Debug] query: query_states returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// The (min, max) year of the aggregate table, `None` when it is empty.
    pub fn query_year_range(&self) -> anyhow::Result<Option<YearRange>> {
        let conn = self.conn.borrow();
        let (start, end) = conn.query_row("SELECT MIN(year), MAX(year) FROM aggregates", [], |row| {
            Ok((row.get::<_, Option<i32>>(0)?, row.get::<_, Option<i32>>(1)?))
        })?;
        let range = match (start, end) {
            (Some(start), Some(end)) => Some(YearRange { start, end }),
            _ => None,
        };
        log::info!("[Crop Debug] query: query_year_range returned {:?}", range);
        Ok(range)
    }

    /// The whole aggregate table, ordered by state, district, year.
    pub fn query_aggregates(&self) -> anyhow::Result<Vec<AggregateRow>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT state, district, year, area, production FROM aggregates
             ORDER BY state, district, year",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(AggregateRow {
                    state: row.get(0)?,
                    district: row.get(1)?,
                    year: row.get(2)?,
                    area: row.get(3)?,
                    production: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Recompute what the chart shows for the current controls: the filtered
    /// data source plus the palette of the selected state.
    pub fn refresh_view(&self, view: &ViewState) -> anyhow::Result<ViewRefresh> {
        let source = self.query_crop_view(view.year, &view.state)?;
        let palette = self.query_district_palette(&view.state)?;
        Ok(ViewRefresh { source, palette })
    }
}
