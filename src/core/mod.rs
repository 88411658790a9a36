//! Numeric core: parsing, shape checks, arithmetic, elimination and
//! formatting. Pure functions over immutable matrices; no I/O.

pub mod arithmetic;
pub mod elimination;
pub mod error;
pub mod formatter;
pub mod matrix;
pub mod parser;

pub use arithmetic::{add, multiply, subtract, transpose};
pub use elimination::{determinant, inverse};
pub use error::{MatrixError, ParseError};
pub use formatter::{format_matrix, format_scalar};
pub use matrix::{require_same_shape, shape_of, Matrix, Shape};
pub use parser::parse_matrix;
