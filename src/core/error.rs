use std::fmt;

use crate::core::matrix::Shape;

/// Why a piece of text could not be turned into a matrix.
///
/// Row numbers are 1-based and count only non-blank rows.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    Empty,
    EmptyRow { row: usize },
    InvalidNumber { row: usize, token: String },
    RaggedRow { row: usize, expected: usize, found: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty matrix input"),
            ParseError::EmptyRow { row } => write!(f, "row {} has no elements", row),
            ParseError::InvalidNumber { row, token } => {
                write!(f, "invalid number '{}' in row {}", token, row)
            }
            ParseError::RaggedRow { row, expected, found } => write!(
                f,
                "inconsistent row lengths: row {} has {} elements, expected {}",
                row, found, expected
            ),
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    Parse(ParseError),
    ShapeMismatch { left: Shape, right: Shape },
    DimensionMismatch { left: Shape, right: Shape },
    NotSquare { shape: Shape },
    Singular,
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::Parse(e) => write!(f, "Parse Error: {}", e),
            MatrixError::ShapeMismatch { left, right } => {
                write!(f, "Shape mismatch: {} vs {}", left, right)
            }
            MatrixError::DimensionMismatch { left, right } => {
                write!(f, "Inner dimensions do not match: {} * {}", left, right)
            }
            MatrixError::NotSquare { shape } => {
                write!(f, "Matrix must be square, got {}", shape)
            }
            MatrixError::Singular => write!(f, "Matrix is singular and cannot be inverted"),
        }
    }
}

impl std::error::Error for MatrixError {}

impl From<ParseError> for MatrixError {
    fn from(e: ParseError) -> Self {
        MatrixError::Parse(e)
    }
}

impl MatrixError {
    pub fn is_parse(&self) -> bool { matches!(self, MatrixError::Parse(_)) }
    pub fn is_singular(&self) -> bool { matches!(self, MatrixError::Singular) }
}
