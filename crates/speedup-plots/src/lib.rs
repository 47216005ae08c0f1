// File: crates/speedup-plots/src/lib.rs
// Summary: Benchmark catalog, CSV tables and CLI plumbing behind the `speedup-plots` binary.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod table;
pub mod window;

pub use catalog::{chart_specs, Curve, Figure, Group, GROUPS};
pub use table::{read_csv, write_csv, TableError, TableMeta};
