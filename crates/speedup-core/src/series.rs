// File: crates/speedup-core/src/series.rs
// Summary: One labeled speedup curve: x-values (thread counts) paired with y-values (speedups).

use crate::error::ChartError;

/// A labeled line series. Fields are private so the length invariant
/// (`x.len() == y.len()`, non-empty, all finite) holds for the value's lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    label: String,
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Series {
    /// Validate and build a series.
    pub fn try_new(label: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Result<Self, ChartError> {
        let label = label.into();
        if x.len() != y.len() {
            return Err(ChartError::LengthMismatch { label, x_len: x.len(), y_len: y.len() });
        }
        if x.is_empty() {
            return Err(ChartError::EmptySeries { label });
        }
        if let Some(index) = x.iter().chain(y.iter()).position(|v| !v.is_finite()) {
            return Err(ChartError::NonFinite { label, index: index % x.len() });
        }
        Ok(Self { label, x, y })
    }

    /// Build from slices, the shape the constant benchmark tables come in.
    pub fn from_slices(label: impl Into<String>, x: &[f64], y: &[f64]) -> Result<Self, ChartError> {
        Self::try_new(label, x.to_vec(), y.to_vec())
    }

    pub fn label(&self) -> &str { &self.label }
    pub fn x(&self) -> &[f64] { &self.x }
    pub fn y(&self) -> &[f64] { &self.y }
    pub fn len(&self) -> usize { self.x.len() }
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// (x, y) pairs in order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Smallest and largest y, or `None` for an empty series.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.y.iter().copied().fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}
