//! Partial-pivot Gaussian elimination shared by `determinant` and `inverse`.
//!
//! Both operations select pivots through the same [`Eliminator`], so they
//! agree on what counts as a zero pivot. They only differ in what happens
//! then: the determinant degrades to `0.0`, the inverse fails with
//! [`MatrixError::Singular`].

use log::{debug, trace};

use crate::core::error::MatrixError;
use crate::core::matrix::{require_square, Matrix};

/// A pivot whose magnitude is below this is treated as zero.
pub const PIVOT_TOLERANCE: f64 = 1e-12;
/// Row updates with a factor below this are skipped.
pub const FACTOR_TOLERANCE: f64 = 1e-18;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SingularPolicy {
    /// Report the column as singular and let the caller stop early.
    Degenerate,
    /// Fail with `MatrixError::Singular`.
    Reject,
}

enum Pivot {
    Row(usize),
    Singular,
}

struct Eliminator {
    policy: SingularPolicy,
}

impl Eliminator {
    fn new(policy: SingularPolicy) -> Self {
        Self { policy }
    }

    /// Picks the row in `col..` with the largest `|value|` in column `col`,
    /// swaps it into place and returns whether a swap happened.
    fn pivot(&self, work: &mut Workspace, col: usize) -> Result<Pivot, MatrixError> {
        let mut best = col;
        let mut best_abs = work.rows[col][col].abs();
        for r in col + 1..work.rows.len() {
            let v = work.rows[r][col].abs();
            if v > best_abs {
                best = r;
                best_abs = v;
            }
        }

        if best_abs < PIVOT_TOLERANCE {
            debug!("column {} has no usable pivot (max |v| = {:e})", col, best_abs);
            return match self.policy {
                SingularPolicy::Degenerate => Ok(Pivot::Singular),
                SingularPolicy::Reject => Err(MatrixError::Singular),
            };
        }

        if best != col {
            trace!("swap rows {} and {}", col, best);
            work.rows.swap(col, best);
        }
        Ok(Pivot::Row(best))
    }
}

/// Locally owned copy of the rows being eliminated.
struct Workspace {
    rows: Vec<Vec<f64>>,
}

impl Workspace {
    fn copy_of(m: &Matrix) -> Self {
        Self { rows: m.to_rows() }
    }

    /// `[m | I]`
    fn augmented(m: &Matrix) -> Self {
        let n = m.nrows();
        let rows = m
            .rows()
            .enumerate()
            .map(|(i, row)| {
                let mut r = Vec::with_capacity(2 * n);
                r.extend_from_slice(row);
                r.extend((0..n).map(|j| if i == j { 1.0 } else { 0.0 }));
                r
            })
            .collect();
        Self { rows }
    }

    /// `rows[target][c] -= factor * rows[source][c]` for `c` in `from..`.
    fn subtract_scaled(&mut self, target: usize, source: usize, factor: f64, from: usize) {
        let (src, dst) = if source < target {
            let (head, tail) = self.rows.split_at_mut(target);
            (&head[source], &mut tail[0])
        } else {
            let (head, tail) = self.rows.split_at_mut(source);
            (&tail[0], &mut head[target])
        };
        for (d, s) in dst[from..].iter_mut().zip(&src[from..]) {
            *d -= factor * s;
        }
    }
}

/// Determinant by partial-pivot elimination. Returns `0.0` as soon as a
/// column has no usable pivot.
pub fn determinant(a: &Matrix) -> Result<f64, MatrixError> {
    let n = require_square(a)?;
    let eliminator = Eliminator::new(SingularPolicy::Degenerate);
    let mut work = Workspace::copy_of(a);
    let mut det = 1.0;

    for col in 0..n {
        match eliminator.pivot(&mut work, col)? {
            Pivot::Singular => return Ok(0.0),
            Pivot::Row(r) if r != col => det *= -1.0,
            Pivot::Row(_) => {}
        }
        let pivot = work.rows[col][col];
        det *= pivot;

        for r in col + 1..n {
            let factor = work.rows[r][col] / pivot;
            if factor.abs() < FACTOR_TOLERANCE {
                continue;
            }
            work.subtract_scaled(r, col, factor, col);
        }
    }
    Ok(det)
}

/// Inverse by Gauss-Jordan elimination on `[A | I]`.
pub fn inverse(a: &Matrix) -> Result<Matrix, MatrixError> {
    let n = require_square(a)?;
    let eliminator = Eliminator::new(SingularPolicy::Reject);
    let mut work = Workspace::augmented(a);

    for col in 0..n {
        // Reject turns a singular column into Err, so only Row comes back.
        eliminator.pivot(&mut work, col)?;

        let pivot = work.rows[col][col];
        for v in work.rows[col].iter_mut() {
            *v /= pivot;
        }

        for r in 0..n {
            if r == col {
                continue;
            }
            let factor = work.rows[r][col];
            if factor.abs() < FACTOR_TOLERANCE {
                continue;
            }
            work.subtract_scaled(r, col, factor, 0);
        }
    }

    let data = work.rows.into_iter().flat_map(|row| row.into_iter().skip(n)).collect();
    Ok(Matrix::from_parts(n, n, data))
}
