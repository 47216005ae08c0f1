// File: crates/speedup-core/tests/common/mod.rs
// Purpose: Shared fixtures for the integration tests.

#![allow(dead_code)]

use speedup_core::{ChartSpec, ScaleKind};

pub const THREADS_64: [f64; 7] = [1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0];
pub const THREADS_8: [f64; 4] = [1.0, 2.0, 4.0, 8.0];

/// Single YBWC curve on a log2 thread axis.
pub fn ybwc_log2() -> ChartSpec {
    ChartSpec::builder("Inner Speedup Results for Mate in 1 (Depth 1)")
        .x_scale(ScaleKind::Log2)
        .threads(&THREADS_64)
        .line("YBWC", &[1.00, 1.60, 2.46, 3.00, 2.81, 2.18, 1.70])
        .build()
        .expect("valid spec")
}

/// Five curves on a linear 1..8 thread axis, values below 1.0 included.
pub fn nested_linear() -> ChartSpec {
    ChartSpec::builder("Nested Inner Speedup Results (Depth 3)")
        .threads(&THREADS_8)
        .line("YBWC", &[1.00, 2.51, 3.72, 1.39])
        .line("Naive Parallel Alpha Beta", &[1.00, 1.65, 2.68, 3.70])
        .line("Naive Parallel Alpha Beta with PV", &[1.00, 1.80, 2.88, 4.01])
        .line("Parallel Minimax", &[1.00, 1.86, 3.21, 4.80])
        .line("PVS", &[1.00, 1.86, 1.33, 0.24])
        .build()
        .expect("valid spec")
}
