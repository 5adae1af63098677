//! Color ramps and data shaping shared by the chart panels.

use plotters::style::RGBColor;

/// Cell color for missing values in the heatmaps.
pub const MISSING_CELL: RGBColor = RGBColor(210, 210, 210);

/// Bar palette for categorical series.
pub const SERIES_COLORS: [RGBColor; 2] = [RGBColor(66, 133, 244), RGBColor(219, 68, 55)];

/// One histogram bin: `[start, end)` plus the number of samples inside.
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Splits `values` into `bins` equal-width bins spanning their min..max range.
///
/// The final bin is closed on the right so the maximum lands inside it.
/// Returns an empty vector for an empty sample.
pub fn histogram_bins(values: &[f64], bins: usize) -> Vec<Bin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // Degenerate range: one bin of nominal width holds everything.
    let width = if hi > lo { (hi - lo) / bins as f64 } else { 1.0 };

    let mut out: Vec<Bin> = (0..bins)
        .map(|i| Bin {
            start: lo + i as f64 * width,
            end: lo + (i + 1) as f64 * width,
            count: 0,
        })
        .collect();
    for &v in values {
        let mut idx = ((v - lo) / width).floor() as usize;
        if idx >= bins {
            idx = bins - 1;
        }
        out[idx].count += 1;
    }
    out
}

/// Linear interpolation between two colors, `t` in [0, 1].
fn lerp(a: RGBColor, b: RGBColor, t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let channel = |x: u8, y: u8| (f64::from(x) + (f64::from(y) - f64::from(x)) * t).round() as u8;
    RGBColor(channel(a.0, b.0), channel(a.1, b.1), channel(a.2, b.2))
}

/// Sequential yellow-to-red ramp over `t` in [0, 1].
pub fn sequential_ramp(t: f64) -> RGBColor {
    lerp(RGBColor(255, 255, 178), RGBColor(189, 0, 38), t)
}

/// Diverging blue-white-red ramp centered at 0, `t` in [-1, 1].
pub fn diverging_ramp(t: f64) -> RGBColor {
    let t = t.clamp(-1.0, 1.0);
    if t < 0.0 {
        lerp(RGBColor(255, 255, 255), RGBColor(59, 76, 192), -t)
    } else {
        lerp(RGBColor(255, 255, 255), RGBColor(180, 4, 38), t)
    }
}

/// Normalizes `value` into [0, 1] over `lo..hi`; 0.5 for a flat range.
pub fn normalize(value: f64, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
    } else {
        0.5
    }
}
