// File: crates/speedup-core/src/error.rs
// Summary: Construction-time errors for series and chart specs.

use thiserror::Error;

/// Why a [`Series`](crate::Series) or [`ChartSpec`](crate::ChartSpec) was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("length mismatch in series '{label}': {x_len} x-values vs {y_len} y-values")]
    LengthMismatch {
        label: String,
        x_len: usize,
        y_len: usize,
    },

    #[error("series '{label}' does not share the chart's x-axis values")]
    XAxisMismatch { label: String },

    #[error("chart '{title}' has no series")]
    NoSeries { title: String },

    #[error("series '{label}' has no points")]
    EmptySeries { label: String },

    #[error("series '{label}' contains a non-finite value at index {index}")]
    NonFinite { label: String, index: usize },

    #[error("log2 x-axis needs positive values, got {value}")]
    NonPositiveLog { value: f64 },
}
