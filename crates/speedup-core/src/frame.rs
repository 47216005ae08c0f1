// File: crates/speedup-core/src/frame.rs
// Summary: Pure layout pass: plot rect, axes with view ranges, scales and tick lists.

use crate::axis::Axis;
use crate::chart::RenderOptions;
use crate::geometry::RectI32;
use crate::grid::{format_exact, format_fixed, nice_step, nice_ticks, step_decimals};
use crate::scale::AxisScale;
use crate::spec::ChartSpec;
use crate::view::ViewState;

/// Upper bound on auto-generated y ticks.
const MAX_Y_TICKS: usize = 9;

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Pixel position along the axis (x for the x-axis, y for the y-axis).
    pub px: f32,
    pub label: String,
}

/// Everything the renderer needs that does not touch a canvas.
#[derive(Clone, Debug)]
pub struct Frame {
    pub plot: RectI32,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub x_scale: AxisScale,
    pub y_scale: AxisScale,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
}

impl Frame {
    pub fn compute(spec: &ChartSpec, opts: &RenderOptions) -> Self {
        let plot = RectI32::from_ltrb(
            opts.insets.left as i32,
            opts.insets.top as i32,
            opts.width - opts.insets.right as i32,
            opts.height - opts.insets.bottom as i32,
        );

        let mut x_axis = Axis::new(spec.x_label(), 0.0, 1.0)
            .with_kind(spec.x_scale())
            .with_ticks(spec.x_values().to_vec());
        let mut y_axis = Axis::new(spec.y_label(), 0.0, 1.0);
        ViewState::from_spec(spec).apply_to_axes(&mut x_axis, &mut y_axis);

        let x_scale = AxisScale::for_axis(&x_axis, plot.left as f32, plot.right as f32);
        let y_scale = AxisScale::for_axis(&y_axis, plot.bottom as f32, plot.top as f32);

        let x_ticks = axis_ticks(&x_axis, &x_scale);
        let y_ticks = axis_ticks(&y_axis, &y_scale);

        Self { plot, x_axis, y_axis, x_scale, y_scale, x_ticks, y_ticks }
    }

    /// Marker centers for every series, in series order.
    pub fn marker_positions(&self, spec: &ChartSpec) -> Vec<(f32, f32)> {
        spec.series()
            .iter()
            .flat_map(|s| s.points())
            .map(|(x, y)| (self.x_scale.to_px(x), self.y_scale.to_px(y)))
            .collect()
    }
}

fn axis_ticks(axis: &Axis, scale: &AxisScale) -> Vec<Tick> {
    if let Some(fixed) = &axis.ticks {
        // Exact caller values, labeled as themselves regardless of scale kind.
        return fixed
            .iter()
            .map(|&value| Tick { value, px: scale.to_px(value), label: format_exact(value) })
            .collect();
    }
    // Only the y-axis gets here, and it is always linear.
    let step = nice_step(axis.max - axis.min, MAX_Y_TICKS);
    let decimals = step_decimals(step);
    nice_ticks(axis.min, axis.max, MAX_Y_TICKS)
        .into_iter()
        .map(|value| Tick { value, px: scale.to_px(value), label: format_fixed(value, decimals) })
        .collect()
}
