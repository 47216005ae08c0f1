// File: crates/speedup-core/src/spec.rs
// Summary: ChartSpec (everything one figure needs) and its validating builder.

use crate::axis::ScaleKind;
use crate::error::ChartError;
use crate::series::Series;

/// Fully determines one rendered figure.
///
/// Contract (checked by [`ChartSpecBuilder::build`]):
/// - at least one series;
/// - every series has the same x-values, in the same order;
/// - with [`ScaleKind::Log2`], every x-value is strictly positive.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    title: String,
    x_label: String,
    y_label: String,
    series: Vec<Series>,
    x_scale: ScaleKind,
}

impl ChartSpec {
    pub fn builder(title: impl Into<String>) -> ChartSpecBuilder {
        ChartSpecBuilder::new(title)
    }

    pub fn title(&self) -> &str { &self.title }
    pub fn x_label(&self) -> &str { &self.x_label }
    pub fn y_label(&self) -> &str { &self.y_label }
    pub fn series(&self) -> &[Series] { &self.series }
    pub fn x_scale(&self) -> ScaleKind { self.x_scale }

    /// The x-values every series shares.
    pub fn x_values(&self) -> &[f64] {
        // Non-empty by construction.
        self.series[0].x()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(Series::label)
    }
}

/// Accumulates series and labels; nothing is validated until `build`.
#[derive(Clone, Debug)]
pub struct ChartSpecBuilder {
    title: String,
    x_label: String,
    y_label: String,
    x_scale: ScaleKind,
    threads: Option<Vec<f64>>,
    pending: Vec<Pending>,
}

#[derive(Clone, Debug)]
enum Pending {
    Shared { label: String, y: Vec<f64> },
    Full(Series),
}

impl ChartSpecBuilder {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: "Number of Threads".to_string(),
            y_label: "Speedup".to_string(),
            x_scale: ScaleKind::Linear,
            threads: None,
            pending: Vec::new(),
        }
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    pub fn x_scale(mut self, kind: ScaleKind) -> Self {
        self.x_scale = kind;
        self
    }

    /// Shared x-axis for subsequent [`line`](Self::line) calls.
    pub fn threads(mut self, xs: &[f64]) -> Self {
        self.threads = Some(xs.to_vec());
        self
    }

    /// Add a series that uses the shared x-axis set by [`threads`](Self::threads).
    pub fn line(mut self, label: impl Into<String>, y: &[f64]) -> Self {
        self.pending.push(Pending::Shared { label: label.into(), y: y.to_vec() });
        self
    }

    /// Add an already-built series; its x-values must still match the others.
    pub fn series(mut self, series: Series) -> Self {
        self.pending.push(Pending::Full(series));
        self
    }

    pub fn build(self) -> Result<ChartSpec, ChartError> {
        let mut series = Vec::with_capacity(self.pending.len());
        for p in self.pending {
            let s = match p {
                Pending::Full(s) => s,
                Pending::Shared { label, y } => {
                    let x = self.threads.clone().unwrap_or_default();
                    Series::try_new(label, x, y)?
                }
            };
            series.push(s);
        }

        let Some(first) = series.first() else {
            return Err(ChartError::NoSeries { title: self.title });
        };
        let shared = first.x().to_vec();
        if let Some(s) = series.iter().find(|s| s.x() != shared.as_slice()) {
            return Err(ChartError::XAxisMismatch { label: s.label().to_string() });
        }
        if self.x_scale == ScaleKind::Log2 {
            if let Some(&value) = shared.iter().find(|&&v| v <= 0.0) {
                return Err(ChartError::NonPositiveLog { value });
            }
        }

        Ok(ChartSpec {
            title: self.title,
            x_label: self.x_label,
            y_label: self.y_label,
            series,
            x_scale: self.x_scale,
        })
    }
}
