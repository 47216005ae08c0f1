// File: crates/speedup-core/src/lib.rs
// Summary: Core library entry point; exports the speedup chart model and the Skia renderer.

pub mod axis;
pub mod chart;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod grid;
pub mod legend;
pub mod scale;
pub mod series;
pub mod spec;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::{Axis, ScaleKind};
pub use chart::{ChartRenderer, RenderOptions};
pub use error::ChartError;
pub use frame::{Frame, Tick};
pub use legend::{Corner, LegendLayout};
pub use series::Series;
pub use spec::{ChartSpec, ChartSpecBuilder};
pub use text::TextShaper;
pub use theme::Theme;
pub use view::ViewState;
