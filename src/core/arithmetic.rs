use crate::core::error::MatrixError;
use crate::core::matrix::{require_inner_dimension, require_same_shape, Matrix};

fn zip_with(a: &Matrix, b: &Matrix, op: impl Fn(f64, f64) -> f64) -> Result<Matrix, MatrixError> {
    require_same_shape(a, b)?;
    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| op(x, y))
        .collect();
    Ok(Matrix::from_parts(a.nrows(), a.ncols(), data))
}

/// Elementwise `a + b`.
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    zip_with(a, b, |x, y| x + y)
}

/// Elementwise `a - b`.
pub fn subtract(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    zip_with(a, b, |x, y| x - y)
}

pub fn transpose(a: &Matrix) -> Matrix {
    let (rows, cols) = (a.nrows(), a.ncols());
    let mut data = vec![0.0; rows * cols];
    for i in 0..rows {
        for j in 0..cols {
            data[j * rows + i] = a[(i, j)];
        }
    }
    Matrix::from_parts(cols, rows, data)
}

/// `a * b`. For a fixed output cell the products are accumulated in
/// increasing `k`; zero entries of `a` contribute nothing and are skipped.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    require_inner_dimension(a, b)?;
    let (n, inner, m) = (a.nrows(), a.ncols(), b.ncols());
    let mut data = vec![0.0; n * m];
    for i in 0..n {
        let out = &mut data[i * m..(i + 1) * m];
        for k in 0..inner {
            let aik = a[(i, k)];
            if aik == 0.0 {
                continue;
            }
            for (cell, &bkj) in out.iter_mut().zip(b.row(k)) {
                *cell += aik * bkj;
            }
        }
    }
    Ok(Matrix::from_parts(n, m, data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::matrix::Shape;

    fn m(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn add_and_subtract_elementwise() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = m(vec![vec![0.5, -2.0], vec![10.0, 0.0]]);
        assert_eq!(add(&a, &b).unwrap().to_rows(), vec![vec![1.5, 0.0], vec![13.0, 4.0]]);
        assert_eq!(subtract(&a, &b).unwrap().to_rows(), vec![vec![0.5, 4.0], vec![-7.0, 4.0]]);
    }

    #[test]
    fn add_rejects_shape_mismatch() {
        let a = m(vec![vec![1.0, 2.0]]);
        let b = m(vec![vec![1.0, 2.0, 3.0]]);
        assert_eq!(
            add(&a, &b).unwrap_err(),
            MatrixError::ShapeMismatch { left: Shape::new(1, 2), right: Shape::new(1, 3) }
        );
        assert!(subtract(&b, &a).is_err());
    }

    #[test]
    fn transpose_2x3() {
        let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let t = transpose(&a);
        assert_eq!(t.shape(), Shape::new(3, 2));
        assert_eq!(t.to_rows(), vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
    }

    #[test]
    fn matmul_2x2() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = m(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
        assert_eq!(multiply(&a, &b).unwrap().to_rows(), vec![vec![19.0, 22.0], vec![43.0, 50.0]]);
    }

    #[test]
    fn matmul_rectangular_with_zeros() {
        let a = m(vec![vec![0.0, 1.0, 0.0], vec![2.0, 0.0, 1.0]]);
        let b = m(vec![vec![1.0], vec![2.0], vec![3.0]]);
        let c = multiply(&a, &b).unwrap();
        assert_eq!(c.shape(), Shape::new(2, 1));
        assert_eq!(c.to_rows(), vec![vec![2.0], vec![5.0]]);
    }

    #[test]
    fn matmul_rejects_inner_mismatch() {
        let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(
            multiply(&a, &a).unwrap_err(),
            MatrixError::DimensionMismatch { left: Shape::new(2, 3), right: Shape::new(2, 3) }
        );
    }
}
