// File: crates/speedup-core/src/view.rs
// Summary: Visible data ranges for a spec: data extents plus margins, computed in the axis' own space.

use crate::axis::{Axis, ScaleKind};
use crate::spec::ChartSpec;

/// Fraction of the data span added on each side of both axes.
pub const MARGIN: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    pub fn from_spec(spec: &ChartSpec) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in spec.series() {
            for (x, y) in s.points() {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        let (x_min, x_max) = padded(spec.x_scale(), x_min, x_max);
        let (y_min, y_max) = padded(ScaleKind::Linear, y_min, y_max);
        Self { x_min, x_max, y_min, y_max }
    }

    pub fn apply_to_axes(&self, x: &mut Axis, y: &mut Axis) {
        x.min = self.x_min;
        x.max = self.x_max;
        y.min = self.y_min;
        y.max = self.y_max;
    }
}

/// Pad `[lo, hi]` by [`MARGIN`] of its span in the scale's transformed space.
/// A degenerate range is widened around the single value first.
fn padded(kind: ScaleKind, lo: f64, hi: f64) -> (f64, f64) {
    let (mut tl, mut th) = (kind.forward(lo), kind.forward(hi));
    if (th - tl).abs() < 1e-9 {
        tl -= 0.5;
        th += 0.5;
    }
    let m = (th - tl) * MARGIN;
    (kind.inverse(tl - m), kind.inverse(th + m))
}
