// File: crates/speedup-plots/src/catalog.rs
// Summary: Measured speedup tables for every benchmark group, and their conversion to chart specs.
// Notes:
// - Values are kept exactly as measured, including sub-1.0 speedups and the
//   collapse of nested PVS/YBWC at 8 threads.
// - Curve order inside a figure is the legend order.

use speedup_core::{ChartError, ChartSpec, ScaleKind};

pub const YBWC: &str = "YBWC";
pub const NAIVE_AB_PV: &str = "Naive Parallel Alpha Beta with PV";
pub const NAIVE_AB: &str = "Naive Parallel Alpha Beta";
pub const MINIMAX: &str = "Parallel Minimax";
pub const PVS: &str = "PVS";

pub const X_LABEL: &str = "Number of Threads";
pub const Y_LABEL: &str = "Speedup";

const THREADS_64: &[f64] = &[1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0];
const THREADS_8: &[f64] = &[1.0, 2.0, 4.0, 8.0];

/// One algorithm's speedup at each thread count of its group.
#[derive(Clone, Copy, Debug)]
pub struct Curve {
    pub label: &'static str,
    pub speedup: &'static [f64],
}

/// One chart: a depth / measurement-kind combination.
#[derive(Clone, Copy, Debug)]
pub struct Figure {
    pub id: &'static str,
    pub title: &'static str,
    pub curves: &'static [Curve],
}

/// Figures that share a thread axis and scale.
#[derive(Clone, Copy, Debug)]
pub struct Group {
    pub id: &'static str,
    pub summary: &'static str,
    pub threads: &'static [f64],
    pub x_scale: ScaleKind,
    pub figures: &'static [Figure],
}

const fn c(label: &'static str, speedup: &'static [f64]) -> Curve {
    Curve { label, speedup }
}

pub static GROUPS: &[Group] = &[
    Group {
        id: "m1-inner",
        summary: "mate in 1, speedup over the same algorithm on one thread",
        threads: THREADS_64,
        x_scale: ScaleKind::Log2,
        figures: &[
            Figure {
                id: "depth1",
                title: "Inner Speedup Results for Mate in 1 (Depth 1)",
                curves: &[
                    c(YBWC, &[1.00, 1.60, 2.46, 3.00, 2.81, 2.18, 1.70]),
                    c(NAIVE_AB_PV, &[1.00, 1.81, 2.71, 3.11, 3.09, 2.46, 1.88]),
                    c(NAIVE_AB, &[1.00, 1.67, 2.68, 3.66, 3.42, 2.63, 1.74]),
                    c(MINIMAX, &[1.00, 1.79, 2.83, 3.39, 3.45, 2.48, 1.97]),
                    c(PVS, &[1.00, 1.58, 2.41, 2.83, 2.81, 2.11, 1.77]),
                ],
            },
            Figure {
                id: "depth2",
                title: "Inner Speedup Results for Mate in 1 (Depth 2)",
                curves: &[
                    c(YBWC, &[1.00, 1.64, 2.51, 3.14, 3.28, 2.62, 2.01]),
                    c(NAIVE_AB_PV, &[1.00, 1.77, 2.72, 3.26, 3.40, 2.84, 2.12]),
                    c(NAIVE_AB, &[1.00, 1.60, 2.58, 3.17, 3.43, 2.90, 2.24]),
                    c(MINIMAX, &[1.00, 1.81, 3.05, 4.17, 5.00, 4.81, 3.76]),
                    c(PVS, &[1.00, 1.61, 2.48, 2.93, 2.99, 2.38, 2.03]),
                ],
            },
        ],
    },
    Group {
        id: "m1-sequential",
        summary: "mate in 1, speedup over the sequential search",
        threads: THREADS_64,
        x_scale: ScaleKind::Log2,
        figures: &[
            Figure {
                id: "depth1",
                title: "Relative to Sequential Speedup Results (Depth 1)",
                curves: &[
                    c(YBWC, &[1.08, 1.72, 2.58, 3.13, 2.95, 2.25, 1.76]),
                    c(NAIVE_AB_PV, &[0.95, 1.71, 2.57, 2.96, 2.94, 2.35, 1.80]),
                    c(NAIVE_AB, &[0.96, 1.61, 2.58, 3.53, 3.30, 2.54, 1.69]),
                    c(MINIMAX, &[0.92, 1.56, 2.47, 3.08, 3.20, 2.36, 1.92]),
                    c(PVS, &[1.08, 1.69, 2.55, 2.97, 2.95, 2.16, 1.83]),
                ],
            },
            Figure {
                id: "depth2",
                title: "Relative to Sequential Speedup Results (Depth 2)",
                curves: &[
                    c(YBWC, &[1.03, 1.68, 2.53, 3.16, 3.29, 2.61, 2.00]),
                    c(NAIVE_AB_PV, &[0.95, 1.68, 2.58, 3.10, 3.25, 2.71, 2.03]),
                    c(NAIVE_AB, &[0.97, 1.55, 2.50, 3.07, 3.33, 2.83, 2.19]),
                    c(MINIMAX, &[0.96, 1.70, 2.87, 4.02, 4.88, 4.75, 3.74]),
                    c(PVS, &[0.99, 1.58, 2.41, 2.84, 2.89, 2.27, 1.95]),
                ],
            },
        ],
    },
    Group {
        id: "m2-inner",
        summary: "mate in 2, speedup over the same algorithm on one thread",
        threads: THREADS_64,
        x_scale: ScaleKind::Log2,
        figures: &[
            Figure {
                id: "depth3",
                title: "Inner Speedup Results for Mate in 2 (Depth 3)",
                curves: &[
                    c(NAIVE_AB, &[1.00, 1.66, 2.77, 4.00, 5.64, 6.28, 3.63]),
                    c(NAIVE_AB_PV, &[1.00, 1.78, 2.91, 4.10, 5.10, 5.51, 4.55]),
                    c(YBWC, &[1.00, 1.79, 2.89, 4.00, 4.60, 4.34, 3.17]),
                    c(PVS, &[1.00, 1.73, 2.93, 3.90, 4.55, 4.26, 3.37]),
                    c(MINIMAX, &[1.00, 1.88, 3.32, 5.02, 5.92, 7.05, 5.89]),
                ],
            },
            Figure {
                id: "depth4",
                title: "Inner Speedup Results for Mate in 2 (Depth 4)",
                curves: &[
                    c(NAIVE_AB, &[1.00, 1.53, 2.50, 3.66, 4.91, 5.60, 4.04]),
                    c(NAIVE_AB_PV, &[1.00, 1.81, 2.94, 4.22, 5.23, 5.62, 4.04]),
                    c(YBWC, &[1.00, 1.81, 2.89, 4.13, 4.89, 4.83, 3.48]),
                    c(PVS, &[1.00, 1.79, 3.01, 4.19, 4.54, 4.39, 3.34]),
                    c(MINIMAX, &[1.00, 1.87, 3.19, 4.59, 5.45, 6.56, 5.59]),
                ],
            },
        ],
    },
    Group {
        id: "m2-sequential",
        summary: "mate in 2, speedup over the sequential search",
        threads: THREADS_64,
        x_scale: ScaleKind::Log2,
        figures: &[
            Figure {
                id: "depth3",
                title: "Relative to Sequential Speedup Results (Depth 3)",
                curves: &[
                    c(NAIVE_AB, &[1.03, 1.72, 2.88, 4.15, 5.86, 6.55, 3.78]),
                    c(NAIVE_AB_PV, &[1.00, 1.78, 2.91, 4.10, 5.11, 5.50, 4.55]),
                    c(YBWC, &[0.98, 1.75, 2.84, 3.92, 4.51, 4.26, 3.11]),
                    c(PVS, &[0.97, 1.67, 2.83, 3.77, 4.40, 4.13, 3.27]),
                    c(MINIMAX, &[1.03, 1.92, 3.40, 5.12, 6.04, 7.17, 5.98]),
                ],
            },
            Figure {
                id: "depth4",
                title: "Relative to Sequential Speedup Results (Depth 4)",
                curves: &[
                    c(NAIVE_AB, &[1.05, 1.61, 2.63, 3.86, 5.16, 5.92, 4.30]),
                    c(NAIVE_AB_PV, &[1.00, 1.82, 2.95, 4.24, 5.24, 5.64, 4.05]),
                    c(YBWC, &[0.98, 1.78, 2.84, 4.07, 4.83, 4.76, 3.43]),
                    c(PVS, &[0.93, 1.66, 2.78, 3.83, 4.16, 4.01, 3.05]),
                    c(MINIMAX, &[1.04, 1.93, 3.30, 4.74, 5.62, 6.72, 5.72]),
                ],
            },
        ],
    },
    Group {
        id: "m3",
        summary: "deeper search, inner and relative-to-sequential speedups",
        threads: THREADS_64,
        x_scale: ScaleKind::Log2,
        figures: &[
            Figure {
                id: "inner-depth5",
                title: "Inner Speedup Results (Depth 5)",
                curves: &[
                    c(YBWC, &[1.00, 1.98, 3.39, 5.61, 6.98, 5.79, 4.74]),
                    c(NAIVE_AB_PV, &[1.00, 2.01, 3.46, 5.77, 7.72, 9.44, 8.05]),
                    c(MINIMAX, &[1.00, 1.94, 3.73, 6.45, 10.67, 13.69, 12.55]),
                    c(NAIVE_AB, &[1.00, 1.95, 3.37, 5.24, 7.45, 9.34, 8.15]),
                    c(PVS, &[1.00, 1.98, 3.41, 5.64, 6.34, 5.47, 4.62]),
                ],
            },
            Figure {
                id: "inner-depth6",
                title: "Inner Speedup Results (Depth 6)",
                curves: &[
                    c(YBWC, &[1.00, 1.99, 3.41, 5.59, 7.22, 6.84, 5.68]),
                    c(NAIVE_AB_PV, &[1.00, 2.01, 3.46, 5.70, 7.63, 9.23, 7.94]),
                    c(MINIMAX, &[1.00, 1.95, 3.74, 6.40, 10.39, 13.35, 12.62]),
                    c(NAIVE_AB, &[1.00, 1.92, 3.36, 5.12, 7.17, 9.01, 7.89]),
                    c(PVS, &[1.00, 1.99, 3.42, 5.56, 6.11, 5.39, 4.48]),
                ],
            },
            Figure {
                id: "sequential-depth5",
                title: "Relative to Sequential Speedup Results (Depth 5)",
                curves: &[
                    c(YBWC, &[0.97, 1.93, 3.31, 5.47, 6.81, 5.65, 4.63]),
                    c(NAIVE_AB_PV, &[1.00, 2.00, 3.46, 5.77, 7.72, 9.45, 8.05]),
                    c(MINIMAX, &[1.01, 1.95, 3.76, 6.49, 10.73, 13.78, 12.62]),
                    c(NAIVE_AB, &[1.00, 1.95, 3.38, 5.26, 7.47, 9.37, 8.18]),
                    c(PVS, &[0.96, 1.91, 3.28, 5.43, 6.11, 5.27, 4.45]),
                ],
            },
            Figure {
                id: "sequential-depth6",
                title: "Relative to Sequential Speedup Results (Depth 6)",
                curves: &[
                    c(YBWC, &[0.98, 1.94, 3.33, 5.46, 7.05, 6.68, 5.55]),
                    c(NAIVE_AB_PV, &[1.00, 2.01, 3.46, 5.70, 7.63, 9.23, 7.94]),
                    c(MINIMAX, &[1.00, 1.95, 3.75, 6.42, 10.42, 13.39, 12.67]),
                    c(NAIVE_AB, &[1.00, 1.92, 3.36, 5.13, 7.19, 9.03, 7.91]),
                    c(PVS, &[0.94, 1.87, 3.22, 5.23, 5.75, 5.07, 4.21]),
                ],
            },
        ],
    },
    Group {
        id: "nested-m1",
        summary: "nested parallelism on mate in 1, up to 8 threads",
        threads: THREADS_8,
        x_scale: ScaleKind::Linear,
        figures: &[
            Figure {
                id: "inner-depth1",
                title: "Nested Inner Speedup Results (Depth 1)",
                curves: &[
                    c(MINIMAX, &[1.00, 1.88, 2.94, 3.49]),
                    c(NAIVE_AB_PV, &[1.00, 1.66, 2.54, 3.04]),
                    c(YBWC, &[1.00, 1.60, 2.44, 2.98]),
                    c(PVS, &[1.00, 1.60, 2.46, 3.12]),
                    c(NAIVE_AB, &[1.00, 1.67, 2.65, 3.26]),
                ],
            },
            Figure {
                id: "inner-depth2",
                title: "Nested Inner Speedup Results (Depth 2)",
                curves: &[
                    c(MINIMAX, &[1.00, 1.84, 3.05, 4.48]),
                    c(NAIVE_AB_PV, &[1.00, 1.68, 2.62, 3.37]),
                    c(YBWC, &[1.00, 1.64, 2.53, 2.95]),
                    c(PVS, &[1.00, 1.33, 1.59, 1.65]),
                    c(NAIVE_AB, &[1.00, 1.64, 2.61, 3.40]),
                ],
            },
            Figure {
                id: "sequential-depth1",
                title: "Nested Relative to Sequential Speedup Results (Depth 1)",
                curves: &[
                    c(MINIMAX, &[0.87, 1.52, 2.47, 3.08]),
                    c(NAIVE_AB_PV, &[0.98, 1.62, 2.50, 2.99]),
                    c(YBWC, &[1.01, 1.62, 2.46, 3.02]),
                    c(PVS, &[1.01, 1.62, 2.48, 3.15]),
                    c(NAIVE_AB, &[0.97, 1.62, 2.58, 3.17]),
                ],
            },
            Figure {
                id: "sequential-depth2",
                title: "Nested Relative to Sequential Speedup Results (Depth 2)",
                curves: &[
                    c(MINIMAX, &[0.94, 1.69, 2.86, 4.32]),
                    c(NAIVE_AB_PV, &[0.98, 1.64, 2.58, 3.32]),
                    c(YBWC, &[0.99, 1.63, 2.51, 2.94]),
                    c(PVS, &[0.97, 1.30, 1.57, 1.66]),
                    c(NAIVE_AB, &[0.98, 1.60, 2.54, 3.32]),
                ],
            },
        ],
    },
    Group {
        id: "nested-m2",
        summary: "nested parallelism on mate in 2, up to 8 threads",
        threads: THREADS_8,
        x_scale: ScaleKind::Linear,
        figures: &[
            Figure {
                id: "inner-depth3",
                title: "Nested Inner Speedup Results (Depth 3)",
                curves: &[
                    c(YBWC, &[1.00, 2.51, 3.72, 1.39]),
                    c(NAIVE_AB, &[1.00, 1.65, 2.68, 3.70]),
                    c(NAIVE_AB_PV, &[1.00, 1.80, 2.88, 4.01]),
                    c(MINIMAX, &[1.00, 1.86, 3.21, 4.80]),
                    c(PVS, &[1.00, 1.86, 1.33, 0.24]),
                ],
            },
            Figure {
                id: "inner-depth4",
                title: "Nested Inner Speedup Results (Depth 4)",
                curves: &[
                    c(YBWC, &[1.00, 2.57, 3.70, 1.22]),
                    c(NAIVE_AB, &[1.00, 1.52, 2.42, 3.44]),
                    c(NAIVE_AB_PV, &[1.00, 1.80, 2.84, 4.01]),
                    c(MINIMAX, &[1.00, 1.86, 3.15, 4.47]),
                    c(PVS, &[1.00, 1.44, 0.73, 0.13]),
                ],
            },
            Figure {
                id: "sequential-depth3",
                title: "Nested Relative to Sequential Speedup Results (Depth 3)",
                curves: &[
                    c(YBWC, &[0.97, 2.43, 3.60, 1.35]),
                    c(NAIVE_AB, &[1.00, 1.65, 2.68, 3.71]),
                    c(NAIVE_AB_PV, &[1.00, 1.80, 2.88, 4.02]),
                    c(MINIMAX, &[1.23, 2.29, 3.95, 5.89]),
                    c(PVS, &[0.85, 1.59, 1.14, 0.21]),
                ],
            },
            Figure {
                id: "sequential-depth4",
                title: "Nested Relative to Sequential Speedup Results (Depth 4)",
                curves: &[
                    c(YBWC, &[0.96, 2.45, 3.49, 1.16]),
                    c(NAIVE_AB, &[1.00, 1.52, 2.42, 3.45]),
                    c(NAIVE_AB_PV, &[1.00, 1.79, 2.84, 4.00]),
                    c(MINIMAX, &[1.15, 2.14, 3.63, 5.16]),
                    c(PVS, &[0.80, 1.16, 0.62, 0.11]),
                ],
            },
        ],
    },
];

/// Look up a group by id.
pub fn group(id: &str) -> Option<&'static Group> {
    GROUPS.iter().find(|g| g.id == id)
}

impl Group {
    /// File-name stem for one of this group's figures: `<group>_<figure>`.
    pub fn stem(&self, figure: &Figure) -> String {
        format!("{}_{}", self.id, figure.id)
    }

    /// Build the spec for one figure of this group.
    pub fn chart_spec(&self, figure: &Figure) -> Result<ChartSpec, ChartError> {
        figure
            .curves
            .iter()
            .fold(
                ChartSpec::builder(figure.title)
                    .x_label(X_LABEL)
                    .y_label(Y_LABEL)
                    .x_scale(self.x_scale)
                    .threads(self.threads),
                |b, curve| b.line(curve.label, curve.speedup),
            )
            .build()
    }
}

/// Every figure of `group` as `(file stem, spec)`, in declaration order.
pub fn chart_specs(group: &Group) -> Result<Vec<(String, ChartSpec)>, ChartError> {
    group
        .figures
        .iter()
        .map(|f| Ok((group.stem(f), group.chart_spec(f)?)))
        .collect()
}
