//! matcalc: dense matrix calculator.
//!
//! The numeric engine lives in [`core`] and is re-exported here; the CLI,
//! config and interactive shell are exposed so the binary and integration
//! tests can reach them through the library crate.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod shell;

pub use crate::core::{
    add, determinant, format_matrix, format_scalar, inverse, multiply, parse_matrix,
    require_same_shape, shape_of, subtract, transpose, Matrix, MatrixError, ParseError, Shape,
};
