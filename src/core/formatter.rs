//! src/core/formatter.rs
//! Aligned text rendering of matrices and scalars.
//!
//! Every entry gets 10 decimals, then trailing zeros and a dangling `.` are
//! dropped. Anything with `|x| < 1e-12` prints as `0` so elimination noise
//! never shows up as `-0.0000000001`.

use crate::core::matrix::Matrix;

const DECIMALS: usize = 10;
const ZERO_TOLERANCE: f64 = 1e-12;

/// Renders one value the way matrix entries are rendered.
pub fn format_scalar(x: f64) -> String {
    let x = if x.abs() < ZERO_TOLERANCE { 0.0 } else { x };
    let s = format!("{:.*}", DECIMALS, x);
    if !s.contains('.') {
        // inf / NaN
        return s;
    }
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() { "0".to_string() } else { s.to_string() }
}

/// One row per line, `[ a  b  c ]`, each column right-aligned to its own
/// widest entry.
pub fn format_matrix(a: &Matrix) -> String {
    let cells: Vec<Vec<String>> = a
        .rows()
        .map(|row| row.iter().map(|&x| format_scalar(x)).collect())
        .collect();

    let widths: Vec<usize> = (0..a.ncols())
        .map(|j| cells.iter().map(|row| row[j].chars().count()).max().unwrap_or(0))
        .collect();

    cells
        .iter()
        .map(|row| {
            let parts: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| format!("{:>w$}", cell, w = w))
                .collect();
            format!("[ {} ]", parts.join("  "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
