// File: crates/speedup-core/tests/spec.rs
// Purpose: Construction-time validation of series and chart specs.

mod common;

use speedup_core::{ChartError, ChartSpec, ScaleKind, Series};

#[test]
fn series_rejects_length_mismatch() {
    let err = Series::from_slices("YBWC", &[1.0, 2.0, 4.0], &[1.0, 1.6]).unwrap_err();
    assert_eq!(err, ChartError::LengthMismatch { label: "YBWC".into(), x_len: 3, y_len: 2 });
    assert!(err.to_string().contains("length mismatch"));
}

#[test]
fn series_rejects_empty_and_non_finite() {
    assert!(matches!(Series::from_slices("a", &[], &[]), Err(ChartError::EmptySeries { .. })));
    let err = Series::from_slices("b", &[1.0, 2.0], &[1.0, f64::NAN]).unwrap_err();
    assert_eq!(err, ChartError::NonFinite { label: "b".into(), index: 1 });
}

#[test]
fn builder_line_length_must_match_threads() {
    let err = ChartSpec::builder("t")
        .threads(&common::THREADS_8)
        .line("PVS", &[1.0, 1.2, 1.3])
        .build()
        .unwrap_err();
    assert!(matches!(err, ChartError::LengthMismatch { x_len: 4, y_len: 3, .. }));
}

#[test]
fn builder_requires_series() {
    let err = ChartSpec::builder("empty").build().unwrap_err();
    assert_eq!(err, ChartError::NoSeries { title: "empty".into() });
}

#[test]
fn builder_rejects_diverging_x_axes() {
    let other = Series::from_slices("odd", &[1.0, 2.0, 3.0, 8.0], &[1.0, 1.0, 1.0, 1.0]).unwrap();
    let err = ChartSpec::builder("t")
        .threads(&common::THREADS_8)
        .line("PVS", &[1.0, 1.2, 1.3, 1.4])
        .series(other)
        .build()
        .unwrap_err();
    assert_eq!(err, ChartError::XAxisMismatch { label: "odd".into() });
}

#[test]
fn log2_axis_needs_positive_threads() {
    let err = ChartSpec::builder("t")
        .x_scale(ScaleKind::Log2)
        .threads(&[0.0, 1.0, 2.0])
        .line("x", &[1.0, 1.0, 1.0])
        .build()
        .unwrap_err();
    assert_eq!(err, ChartError::NonPositiveLog { value: 0.0 });
}

#[test]
fn every_series_shares_the_x_axis() {
    let spec = common::nested_linear();
    assert_eq!(spec.series().len(), 5);
    for s in spec.series() {
        assert_eq!(s.x(), spec.x_values());
        assert_eq!(s.y().len(), spec.x_values().len());
    }
    assert_eq!(spec.x_label(), "Number of Threads");
    assert_eq!(spec.y_label(), "Speedup");
}

#[test]
fn sub_unity_speedups_are_kept() {
    let spec = common::nested_linear();
    let pvs = spec.series().iter().find(|s| s.label() == "PVS").unwrap();
    assert_eq!(pvs.y(), &[1.00, 1.86, 1.33, 0.24]);
    assert_eq!(pvs.y_range(), Some((0.24, 1.86)));
}
