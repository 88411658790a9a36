use matcalc::{
    add, determinant, inverse, multiply, parse_matrix, subtract, transpose, Matrix, MatrixError,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

fn assert_close(a: &Matrix, b: &Matrix, eps: f64) {
    assert_eq!(a.shape(), b.shape());
    for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
        assert!(approx_eq(*x, *y, eps), "{}\n!=\n{}", a, b);
    }
}

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix {
    let data = (0..rows)
        .map(|_| (0..cols).map(|_| rng.gen_range(-10.0..10.0)).collect::<Vec<f64>>())
        .collect();
    Matrix::from_rows(data).unwrap()
}

/// Diagonally dominant, so always comfortably invertible.
fn random_invertible(rng: &mut StdRng, n: usize) -> Matrix {
    let mut rows = random_matrix(rng, n, n).to_rows();
    for (i, row) in rows.iter_mut().enumerate() {
        row[i] += 20.0 * n as f64;
    }
    Matrix::from_rows(rows).unwrap()
}

fn m(text: &str) -> Matrix {
    parse_matrix(text).expect("parse ok")
}

#[test]
fn add_then_subtract_reconstructs() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let (r, c) = (rng.gen_range(1..6), rng.gen_range(1..6));
        let a = random_matrix(&mut rng, r, c);
        let b = random_matrix(&mut rng, r, c);
        let back = subtract(&add(&a, &b).unwrap(), &b).unwrap();
        assert_close(&back, &a, 1e-9);
    }
}

#[test]
fn transpose_is_an_involution() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let (r, c) = (rng.gen_range(1..7), rng.gen_range(1..7));
        let a = random_matrix(&mut rng, r, c);
        assert_eq!(transpose(&transpose(&a)), a);
    }
}

#[test]
fn identity_has_unit_determinant() {
    for n in 1..=8 {
        assert_eq!(determinant(&Matrix::identity(n)).unwrap(), 1.0, "n = {n}");
    }
}

#[test]
fn zero_row_gives_zero_determinant() {
    assert_eq!(determinant(&m("1 2 3; 0 0 0; 4 5 6")).unwrap(), 0.0);
    assert_eq!(determinant(&m("0 0; 1 2")).unwrap(), 0.0);
}

#[test]
fn determinant_2x2() {
    assert_eq!(determinant(&m("1 2; 3 4")).unwrap(), -2.0);
}

#[test]
fn determinant_3x3() {
    let d = determinant(&m("2 -3 1; 2 0 -1; 1 4 5")).unwrap();
    assert!(approx_eq(d, 49.0, 1e-9), "got {d}");
}

#[test]
fn inverse_times_matrix_is_identity() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..30 {
        let n = rng.gen_range(1..7);
        let a = random_invertible(&mut rng, n);
        let inv = inverse(&a).unwrap();
        assert_close(&multiply(&a, &inv).unwrap(), &Matrix::identity(n), 1e-9);
        assert_close(&multiply(&inv, &a).unwrap(), &Matrix::identity(n), 1e-9);
    }
}

#[test]
fn inverse_with_pivoting_is_identity() {
    let a = m("0 2 1; 1 0 0; 3 1 4");
    let inv = inverse(&a).unwrap();
    assert_close(&multiply(&a, &inv).unwrap(), &Matrix::identity(3), 1e-12);
}

#[test]
fn inverse_of_singular_fails() {
    assert_eq!(inverse(&m("1 2; 2 4")).unwrap_err(), MatrixError::Singular);
}

#[test]
fn determinant_and_inverse_disagree_only_in_outcome() {
    let a = m("1 2 3; 4 5 6; 7 8 9");
    assert_eq!(determinant(&a).unwrap(), 0.0);
    assert!(inverse(&a).unwrap_err().is_singular());
}

#[test]
fn parse_forms_agree() {
    let expected = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    assert_eq!(m("1 2; 3 4"), expected);
    assert_eq!(m("1,2\n3,4"), expected);
    assert_eq!("1, 2\n3 4".parse::<Matrix>().unwrap(), expected);
}

#[test]
fn ragged_input_fails_to_parse() {
    assert!(parse_matrix("1 2; 3").unwrap_err().is_parse());
}

#[test]
fn matmul_2x2() {
    let c = multiply(&m("1 2; 3 4"), &m("5 6; 7 8")).expect("matmul ok");
    assert_eq!(c, m("19 22; 43 50"));
}

#[test]
fn matmul_shapes() {
    let a = m("1 2 3; 4 5 6");
    let c = multiply(&a, &transpose(&a)).unwrap();
    assert_eq!(c, m("14 32; 32 77"));
    assert!(matches!(
        multiply(&a, &a),
        Err(MatrixError::DimensionMismatch { .. })
    ));
}
