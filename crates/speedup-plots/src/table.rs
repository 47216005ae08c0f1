// File: crates/speedup-plots/src/table.rs
// Summary: Series tables as CSV: `threads,<label>,<label>...` with one row per thread count.

use std::io::{Read, Write};

use speedup_core::{ChartError, ChartSpec, ScaleKind, Series};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("table has no header row")]
    MissingHeader,

    #[error("header needs a thread column followed by at least one series column")]
    NoSeriesColumns,

    #[error("row {row}: expected {expected} cells, found {found}")]
    Ragged { row: usize, expected: usize, found: usize },

    #[error("row {row}, column '{column}': '{value}' is not a number")]
    NotANumber { row: usize, column: String, value: String },

    #[error("table has no data rows")]
    NoRows,

    #[error(transparent)]
    Chart(#[from] ChartError),
}

/// Chart-level fields a CSV table does not carry.
#[derive(Clone, Debug)]
pub struct TableMeta {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_scale: ScaleKind,
}

impl TableMeta {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: crate::catalog::X_LABEL.to_string(),
            y_label: crate::catalog::Y_LABEL.to_string(),
            x_scale: ScaleKind::Linear,
        }
    }
}

/// Write the spec's shared x-axis and every series as columns.
pub fn write_csv<W: Write>(spec: &ChartSpec, writer: W) -> Result<(), TableError> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["threads".to_string()];
    header.extend(spec.labels().map(str::to_string));
    wtr.write_record(&header)?;

    for (i, x) in spec.x_values().iter().enumerate() {
        let mut row = vec![x.to_string()];
        row.extend(spec.series().iter().map(|s| s.y()[i].to_string()));
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Parse a table written by [`write_csv`] (or by hand) into a validated spec.
pub fn read_csv<R: Read>(reader: R, meta: TableMeta) -> Result<ChartSpec, TableError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() || headers.iter().all(str::is_empty) {
        return Err(TableError::MissingHeader);
    }
    if headers.len() < 2 {
        return Err(TableError::NoSeriesColumns);
    }

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];
    for (i, rec) in rdr.records().enumerate() {
        let rec = rec?;
        // 1-based, counting the header line
        let row = i + 2;
        if rec.len() != headers.len() {
            return Err(TableError::Ragged { row, expected: headers.len(), found: rec.len() });
        }
        for (col, cell) in rec.iter().enumerate() {
            let v = cell.parse::<f64>().map_err(|_| TableError::NotANumber {
                row,
                column: headers[col].to_string(),
                value: cell.to_string(),
            })?;
            columns[col].push(v);
        }
    }
    if columns[0].is_empty() {
        return Err(TableError::NoRows);
    }

    let threads = columns.remove(0);
    let mut builder = ChartSpec::builder(meta.title)
        .x_label(meta.x_label)
        .y_label(meta.y_label)
        .x_scale(meta.x_scale);
    for (label, ys) in headers.iter().skip(1).zip(columns) {
        builder = builder.series(Series::try_new(label, threads.clone(), ys)?);
    }
    Ok(builder.build()?)
}
