// File: crates/speedup-core/src/axis.rs
// Summary: Axis model with label, visible range, scale kind and optional fixed ticks.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScaleKind {
    #[default]
    Linear,
    /// Logarithmic, base 2. Positions go through `log2`, labels stay the raw values.
    Log2,
}

impl ScaleKind {
    /// Map a data value into the space the axis is linear in.
    #[inline]
    pub fn forward(self, v: f64) -> f64 {
        match self {
            ScaleKind::Linear => v,
            ScaleKind::Log2 => v.max(f64::MIN_POSITIVE).log2(),
        }
    }

    #[inline]
    pub fn inverse(self, t: f64) -> f64 {
        match self {
            ScaleKind::Linear => t,
            ScaleKind::Log2 => t.exp2(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
    /// When set, ticks sit exactly at these values instead of auto-generated steps.
    pub ticks: Option<Vec<f64>>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Linear, ticks: None }
    }

    pub fn with_kind(mut self, kind: ScaleKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_ticks(mut self, ticks: Vec<f64>) -> Self {
        self.ticks = Some(ticks);
        self
    }
}
