// File: crates/speedup-core/src/scale.rs
// Summary: Data-to-pixel transforms for linear and log2 axes.

use crate::axis::{Axis, ScaleKind};

/// Data value on either axis (thread count or speedup).
pub type Value = f64;

/// Maps `[min, max]` of an axis onto `[lo_px, hi_px]`.
///
/// For a vertical axis pass the bottom pixel as `lo_px` and the top as `hi_px`;
/// the mapping itself does not care about direction.
#[derive(Clone, Copy, Debug)]
pub struct AxisScale {
    pub lo_px: f32,
    pub hi_px: f32,
    pub kind: ScaleKind,
    // cached endpoints in transformed (linear-in-pixels) space
    t_min: f64,
    t_max: f64,
}

impl AxisScale {
    pub fn new(kind: ScaleKind, lo_px: f32, hi_px: f32, mut vmin: Value, mut vmax: Value) -> Self {
        if kind == ScaleKind::Log2 {
            // Ensure strictly positive range for log scale
            let eps = 1e-12;
            vmin = if vmin <= eps { eps } else { vmin };
            vmax = if vmax <= vmin { vmin * 2.0 } else { vmax };
        } else if (vmax - vmin).abs() < 1e-12 {
            vmax = vmin + 1.0;
        }
        Self { lo_px, hi_px, kind, t_min: kind.forward(vmin), t_max: kind.forward(vmax) }
    }

    pub fn for_axis(axis: &Axis, lo_px: f32, hi_px: f32) -> Self {
        Self::new(axis.kind, lo_px, hi_px, axis.min, axis.max)
    }

    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        let span = (self.t_max - self.t_min).max(1e-12);
        let frac = (self.kind.forward(v) - self.t_min) / span;
        self.lo_px + frac as f32 * (self.hi_px - self.lo_px)
    }
}
