//! Line-style generation for multi-series plots.
//!
//! Styles are an enumerated configuration: each kind maps to a pure
//! generator producing one style per series. There is no global registry
//! and nothing to mutate at runtime; a kind plus a series count fully
//! determines the result.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Resolved style for one plotted series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Hex color, `#rrggbb`
    pub color: String,
    pub line_style: String,
    pub line_width: f64,
    pub marker_style: String,
    pub marker_size: f64,
}

/// Available style families
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineStyleKind {
    /// Full-spectrum colors, no markers (the default)
    Colorful,
    /// Full-spectrum colors with dot markers
    ColorfulDots,
    /// Dark-to-bright sequential colormap, no markers
    Inferno,
    /// Dark-to-bright sequential colormap with dot markers
    InfernoDots,
    /// Black-to-gray, for print
    Grayscale,
}

impl Default for LineStyleKind {
    fn default() -> Self {
        LineStyleKind::Colorful
    }
}

impl LineStyleKind {
    /// Generate one style per series
    pub fn generate(&self, line_count: usize) -> Vec<LineStyle> {
        match self {
            LineStyleKind::Colorful => ramp_styles(line_count, rainbow_color, "None"),
            LineStyleKind::ColorfulDots => ramp_styles(line_count, rainbow_color, "o"),
            LineStyleKind::Inferno => ramp_styles(line_count, inferno_color, "None"),
            LineStyleKind::InfernoDots => ramp_styles(line_count, inferno_color, "o"),
            LineStyleKind::Grayscale => ramp_styles(line_count, grayscale_color, "None"),
        }
    }
}

fn ramp_styles(line_count: usize, color: fn(f64) -> [u8; 3], marker: &str) -> Vec<LineStyle> {
    (0..line_count)
        .map(|i| {
            let t = if line_count > 1 {
                i as f64 / (line_count - 1) as f64
            } else {
                0.0
            };
            let [r, g, b] = color(t);
            LineStyle {
                color: format!("#{:02x}{:02x}{:02x}", r, g, b),
                line_style: "solid".to_string(),
                line_width: 1.5,
                marker_style: marker.to_string(),
                marker_size: 4.0,
            }
        })
        .collect()
}

/// Piecewise-linear interpolation across color anchors at `t` in `[0, 1]`
fn gradient(anchors: &[[u8; 3]], t: f64) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let segments = anchors.len() - 1;
    let pos = t * segments as f64;
    let lo = (pos.floor() as usize).min(segments - 1);
    let frac = pos - lo as f64;

    let a = anchors[lo];
    let b = anchors[lo + 1];
    [
        (a[0] as f64 + (b[0] as f64 - a[0] as f64) * frac).round() as u8,
        (a[1] as f64 + (b[1] as f64 - a[1] as f64) * frac).round() as u8,
        (a[2] as f64 + (b[2] as f64 - a[2] as f64) * frac).round() as u8,
    ]
}

fn rainbow_color(t: f64) -> [u8; 3] {
    gradient(
        &[
            [255, 0, 40],
            [255, 150, 0],
            [60, 180, 60],
            [0, 150, 255],
            [140, 0, 255],
        ],
        t,
    )
}

fn inferno_color(t: f64) -> [u8; 3] {
    // Ramp stops short of full yellow so the brightest line stays legible.
    gradient(
        &[
            [0, 0, 4],
            [87, 16, 110],
            [188, 55, 84],
            [249, 142, 9],
            [245, 219, 76],
        ],
        t * 0.9,
    )
}

fn grayscale_color(t: f64) -> [u8; 3] {
    gradient(&[[0, 0, 0], [178, 178, 178]], t)
}
