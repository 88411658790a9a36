//! Text → `Matrix`.
//!
//! Rows are separated by `;` when the input contains one anywhere, otherwise
//! by line breaks. Inside a row, a `,` switches to comma fields (each field
//! may still hold whitespace-separated numbers, so `1, 2 3` is three
//! columns); without commas the row is split on whitespace runs. Blank rows
//! are skipped.

use log::trace;

use crate::core::error::{MatrixError, ParseError};
use crate::core::matrix::Matrix;

pub fn parse_matrix(text: &str) -> Result<Matrix, MatrixError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty.into());
    }

    let raw_rows: Vec<&str> = if text.contains(';') {
        text.split(';').collect()
    } else {
        text.split(['\n', '\r']).collect()
    };

    let mut data = Vec::new();
    let mut width: Option<usize> = None;
    let mut rows = 0usize;
    for raw in raw_rows {
        let row = raw.trim();
        if row.is_empty() {
            continue;
        }
        rows += 1;

        let tokens: Vec<&str> = if row.contains(',') {
            row.split(',').flat_map(str::split_whitespace).collect()
        } else {
            row.split_whitespace().collect()
        };
        if tokens.is_empty() {
            return Err(ParseError::EmptyRow { row: rows }.into());
        }

        let mut values = Vec::with_capacity(tokens.len());
        for token in &tokens {
            let value = parse_number(token).ok_or_else(|| ParseError::InvalidNumber {
                row: rows,
                token: token.to_string(),
            })?;
            values.push(value);
        }

        match width {
            None => width = Some(values.len()),
            Some(expected) if expected != values.len() => {
                return Err(ParseError::RaggedRow {
                    row: rows,
                    expected,
                    found: values.len(),
                }
                .into());
            }
            Some(_) => {}
        }

        data.extend(values);
    }

    let Some(cols) = width else {
        return Err(ParseError::Empty.into());
    };
    trace!("parsed {}x{} matrix", rows, cols);
    Ok(Matrix::from_parts(rows, cols, data))
}

/// `f64` literal, also accepting `_` between two digits (`1_000.5`).
fn parse_number(token: &str) -> Option<f64> {
    if !token.contains('_') {
        return token.parse().ok();
    }
    let b = token.as_bytes();
    let grouped = b.iter().enumerate().all(|(i, &c)| {
        c != b'_'
            || (i > 0 && i + 1 < b.len() && b[i - 1].is_ascii_digit() && b[i + 1].is_ascii_digit())
    });
    if !grouped {
        return None;
    }
    token.replace('_', "").parse().ok()
}
