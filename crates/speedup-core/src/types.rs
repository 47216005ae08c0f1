// File: crates/speedup-core/src/types.rs
// Summary: Shared types and constants (figure size, paddings, stroke sizes).

/// Default surface width in pixels (a 10 inch figure at 100 dpi).
pub const WIDTH: i32 = 1000;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 600;

/// Stroke width for series lines.
pub const LINE_WIDTH: f32 = 1.75;
/// Radius of the circular point markers.
pub const MARKER_RADIUS: f32 = 4.0;

/// Point sizes for the three text roles.
pub const TITLE_SIZE: f32 = 17.0;
pub const LABEL_SIZE: f32 = 14.0;
pub const TICK_SIZE: f32 = 12.0;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    /// Room for the y label and tick labels on the left, title on top,
    /// x tick labels plus x label at the bottom.
    fn default() -> Self {
        Self::new(84, 32, 52, 68)
    }
}
