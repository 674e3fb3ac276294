//! District color palettes.
//!
//! Colors are sampled evenly along a Viridis ramp so that a state's districts
//! always span the full ramp, from dark purple to yellow, whatever their count.

use serde::Serialize;

/// Viridis control points, interpolated linearly.
const VIRIDIS: [(u8, u8, u8); 9] = [
    (68, 1, 84),
    (71, 44, 122),
    (59, 81, 139),
    (44, 113, 142),
    (33, 144, 141),
    (39, 173, 129),
    (92, 200, 99),
    (170, 220, 50),
    (253, 231, 37),
];

/// Color at position `t` on the Viridis ramp. `t` is clamped to `[0, 1]`.
pub fn viridis_rgb(t: f64) -> (u8, u8, u8) {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let segs = (VIRIDIS.len() - 1) as f64;
    let x = t * segs;
    let i = x.floor() as usize;
    if i >= VIRIDIS.len() - 1 {
        return VIRIDIS[VIRIDIS.len() - 1];
    }
    let f = x - i as f64;
    let (r0, g0, b0) = VIRIDIS[i];
    let (r1, g1, b1) = VIRIDIS[i + 1];
    let lerp = |a: u8, b: u8| (a as f64 + f * (b as f64 - a as f64)).round() as u8;
    (lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

/// `n` hex colors spread evenly from one end of the ramp to the other.
pub fn viridis_palette(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let t = if n > 1 { i as f64 / (n - 1) as f64 } else { 0.0 };
            let (r, g, b) = viridis_rgb(t);
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        })
        .collect()
}

/// Categorical mapping from district name to color for one state.
///
/// Serialized as `{ "factors": [...], "palette": [...] }`, the shape the
/// scatter chart's color scale consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DistrictPalette {
    factors: Vec<String>,
    #[serde(rename = "palette")]
    colors: Vec<String>,
}

impl DistrictPalette {
    /// Build a palette over the given districts. Input order and duplicates
    /// do not matter; the domain is always sorted and distinct.
    pub fn for_districts<S: AsRef<str>>(districts: &[S]) -> Self {
        let mut factors: Vec<String> = districts.iter().map(|d| d.as_ref().to_string()).collect();
        factors.sort();
        factors.dedup();
        let colors = viridis_palette(factors.len());
        Self { factors, colors }
    }

    /// Color assigned to `district`, or `None` if it is outside the domain.
    pub fn color_for(&self, district: &str) -> Option<&str> {
        self.factors
            .binary_search_by(|f| f.as_str().cmp(district))
            .ok()
            .map(|i| self.colors[i].as_str())
    }

    pub fn factors(&self) -> &[String] {
        &self.factors
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}
