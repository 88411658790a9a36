//! Dense row-major matrix of `f64` plus the shape checks used by the
//! arithmetic and elimination engines.
//!
//! A `Matrix` always has at least one row and one column and every row has
//! the same length. Once built it is never mutated; operations return new
//! matrices.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::{MatrixError, ParseError};

/// `(rows, columns)` of a matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.cols)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Build from nested rows, rejecting empty or ragged input.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let cols = match rows.first() {
            None => return Err(ParseError::Empty.into()),
            Some(first) if first.is_empty() => return Err(ParseError::EmptyRow { row: 1 }.into()),
            Some(first) => first.len(),
        };
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(ParseError::RaggedRow {
                    row: i + 1,
                    expected: cols,
                    found: row.len(),
                }
                .into());
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, rows: rows.len(), cols })
    }

    /// Caller guarantees `data.len() == rows * cols` and both are non-zero.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert!(rows > 0 && cols > 0 && data.len() == rows * cols);
        Self { data, rows, cols }
    }

    /// `n x n` identity. Panics when `n == 0`.
    pub fn identity(n: usize) -> Self {
        assert!(n > 0, "identity matrix needs at least one row");
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self { data, rows: n, cols: n }
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.data.chunks(self.cols)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(col < self.cols, "column index out of bounds");
        &self.data[row * self.cols + col]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Matrix::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Self {
        m.to_rows()
    }
}

impl FromStr for Matrix {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::core::parser::parse_matrix(s)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::core::formatter::format_matrix(self))
    }
}

pub fn shape_of(m: &Matrix) -> Shape {
    m.shape()
}

pub fn require_same_shape(a: &Matrix, b: &Matrix) -> Result<(), MatrixError> {
    let (left, right) = (shape_of(a), shape_of(b));
    if left != right {
        return Err(MatrixError::ShapeMismatch { left, right });
    }
    Ok(())
}

/// `columns(a) == rows(b)`, the precondition of `a * b`.
pub fn require_inner_dimension(a: &Matrix, b: &Matrix) -> Result<(), MatrixError> {
    if a.ncols() != b.nrows() {
        return Err(MatrixError::DimensionMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    Ok(())
}

pub fn require_square(m: &Matrix) -> Result<usize, MatrixError> {
    if !m.is_square() {
        return Err(MatrixError::NotSquare { shape: m.shape() });
    }
    Ok(m.nrows())
}
