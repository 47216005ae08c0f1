// File: crates/speedup-core/src/grid.rs
// Summary: Tick/grid layout helpers: nice linear steps and tick label formatting.

/// Step multipliers tried for each power of ten, smallest first.
const NICE_MULTIPLIERS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Smallest "nice" step (1, 2, 2.5 or 5 × 10ⁿ) that covers `span` in at most
/// `max_ticks` ticks.
pub fn nice_step(span: f64, max_ticks: usize) -> f64 {
    let intervals = max_ticks.saturating_sub(1).max(1) as f64;
    let raw = (span.abs() / intervals).max(1e-12);
    let mag = 10f64.powf(raw.log10().floor());
    NICE_MULTIPLIERS
        .iter()
        .map(|m| m * mag)
        .find(|step| *step >= raw * (1.0 - 1e-9))
        .unwrap_or(10.0 * mag)
}

/// Multiples of a nice step inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite()) || max <= min {
        return vec![min];
    }
    let step = nice_step(max - min, max_ticks);
    let first = (min / step).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    (first..=last)
        .map(|k| {
            let v = k as f64 * step;
            // avoid "-0" labels
            if v == 0.0 { 0.0 } else { v }
        })
        .collect()
}

/// Number of decimals needed to print multiples of `step` without noise.
pub fn step_decimals(step: f64) -> usize {
    let mut d = 0usize;
    while d < 6 {
        let scaled = step * 10f64.powi(d as i32);
        if (scaled - scaled.round()).abs() < 1e-6 {
            break;
        }
        d += 1;
    }
    d
}

/// Format an auto-generated tick value with a fixed number of decimals.
pub fn format_fixed(v: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, v)
}

/// Format a caller-provided tick value as itself: `16` not `16.0` or `2^4`.
pub fn format_exact(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        let s = format!("{:.3}", v);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
