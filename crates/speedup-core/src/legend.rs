// File: crates/speedup-core/src/legend.rs
// Summary: Legend box sizing and placement in the plot corner that hides the fewest markers.

use crate::geometry::{clamp, RectI32};

const PAD: f32 = 8.0;
const SWATCH: f32 = 28.0;
const GAP: f32 = 8.0;
/// Distance between the legend box and the plot edges.
const OFFSET: i32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

impl Corner {
    /// Preference order when several corners hide the same number of markers.
    pub const PREFERENCE: [Corner; 4] = [Corner::UpperRight, Corner::UpperLeft, Corner::LowerLeft, Corner::LowerRight];
}

/// One legend row: where the swatch line runs and where the label starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendRow {
    pub swatch_from: (f32, f32),
    pub swatch_to: (f32, f32),
    pub text_x: f32,
    /// Vertical center of the row; text baselines derive from it.
    pub center_y: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendLayout {
    pub rect: RectI32,
    pub corner: Corner,
    pub rows: Vec<LegendRow>,
}

impl LegendLayout {
    /// Size the box from the label widths and pick the least obstructive corner of `plot`.
    ///
    /// `markers` are marker centers in pixels.
    pub fn compute(plot: RectI32, label_widths: &[f32], text_size: f32, markers: &[(f32, f32)]) -> Self {
        let row_h = text_size * 1.5;
        let widest = label_widths.iter().copied().fold(0.0f32, f32::max);
        let w = (PAD * 2.0 + SWATCH + GAP + widest).ceil() as i32;
        let h = (PAD * 2.0 + row_h * label_widths.len() as f32).ceil() as i32;

        // min_by_key keeps the first minimum, so ties resolve in PREFERENCE order.
        let corner = Corner::PREFERENCE
            .iter()
            .copied()
            .min_by_key(|c| {
                let r = place(plot, *c, w, h);
                markers.iter().filter(|&&(x, y)| r.contains(x, y)).count()
            })
            .unwrap_or(Corner::UpperRight);
        let rect = place(plot, corner, w, h);

        let rows = (0..label_widths.len())
            .map(|i| {
                let cy = rect.top as f32 + PAD + row_h * (i as f32 + 0.5);
                let x0 = rect.left as f32 + PAD;
                LegendRow {
                    swatch_from: (x0, cy),
                    swatch_to: (x0 + SWATCH, cy),
                    text_x: x0 + SWATCH + GAP,
                    center_y: cy,
                }
            })
            .collect();

        Self { rect, corner, rows }
    }
}

fn place(plot: RectI32, corner: Corner, w: i32, h: i32) -> RectI32 {
    let left = match corner {
        Corner::UpperLeft | Corner::LowerLeft => plot.left + OFFSET,
        Corner::UpperRight | Corner::LowerRight => plot.right - OFFSET - w,
    };
    let top = match corner {
        Corner::UpperLeft | Corner::UpperRight => plot.top + OFFSET,
        Corner::LowerLeft | Corner::LowerRight => plot.bottom - OFFSET - h,
    };
    // Oversized legends stay anchored inside the plot's top-left.
    let left = clamp(left, plot.left, plot.right.max(plot.left));
    let top = clamp(top, plot.top, plot.bottom.max(plot.top));
    RectI32::from_ltwh(left, top, w, h)
}
