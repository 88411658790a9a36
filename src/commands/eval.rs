//! src/commands/eval.rs
//! One-shot evaluation: load operands, run one operation, print the result
//! as aligned text or JSON, optionally also writing it to a file.

use anyhow::{bail, Context, Result};
use log::info;
use serde::Serialize;
use std::fmt;

use crate::cli::OutputOpts;
use crate::core::{self, format_matrix, format_scalar, Matrix};
use crate::io::atomic::atomic_write;
use crate::io::source::Source;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Subtract,
    Multiply,
    Transpose,
    Determinant,
    Inverse,
}

impl Op {
    pub fn arity(self) -> usize {
        match self {
            Op::Add | Op::Subtract | Op::Multiply => 2,
            Op::Transpose | Op::Determinant | Op::Inverse => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Subtract => "sub",
            Op::Multiply => "mul",
            Op::Transpose => "transpose",
            Op::Determinant => "det",
            Op::Inverse => "inv",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Matrix(Matrix),
    Scalar(f64),
}

/// Runs `op` over already parsed operands. Numeric failures come back as a
/// [`MatrixError`](crate::core::MatrixError) inside the `anyhow::Error`.
pub fn evaluate(op: Op, operands: &[Matrix]) -> Result<Outcome> {
    let out = match (op, operands) {
        (Op::Add, [a, b]) => Outcome::Matrix(core::add(a, b)?),
        (Op::Subtract, [a, b]) => Outcome::Matrix(core::subtract(a, b)?),
        (Op::Multiply, [a, b]) => Outcome::Matrix(core::multiply(a, b)?),
        (Op::Transpose, [a]) => Outcome::Matrix(core::transpose(a)),
        (Op::Determinant, [a]) => Outcome::Scalar(core::determinant(a)?),
        (Op::Inverse, [a]) => Outcome::Matrix(core::inverse(a)?),
        _ => bail!("{} expects {} operand(s), got {}", op, op.arity(), operands.len()),
    };
    Ok(out)
}

pub fn render_text(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Matrix(m) => format_matrix(m),
        Outcome::Scalar(x) => format_scalar(*x),
    }
}

#[derive(Serialize)]
struct Report<'a> {
    op: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    shape: Option<[usize; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    matrix: Option<&'a Matrix>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<f64>,
}

pub fn render_json(op: Op, outcome: &Outcome) -> Result<String> {
    let report = match outcome {
        Outcome::Matrix(m) => Report {
            op: op.name(),
            shape: Some([m.nrows(), m.ncols()]),
            matrix: Some(m),
            value: None,
        },
        Outcome::Scalar(x) => Report { op: op.name(), shape: None, matrix: None, value: Some(*x) },
    };
    serde_json::to_string(&report).context("serializing result")
}

/// Entry point for the one-shot subcommands. Returns the rendered text that
/// was printed.
pub fn main(op: Op, args: &[String], output: &OutputOpts) -> Result<String> {
    if args.len() != op.arity() {
        bail!("{} expects {} operand(s), got {}", op, op.arity(), args.len());
    }
    if args.iter().filter(|a| a.as_str() == "-").count() > 1 {
        bail!("only one operand can be read from stdin");
    }

    let mut operands = Vec::with_capacity(args.len());
    for (arg, label) in args.iter().zip(["A", "B"]) {
        let text = Source::from_arg(arg).read()?;
        let m = core::parse_matrix(&text).with_context(|| format!("matrix {}", label))?;
        operands.push(m);
    }

    let outcome = evaluate(op, &operands)?;
    info!("{} -> {}", op, match &outcome {
        Outcome::Matrix(m) => m.shape().to_string(),
        Outcome::Scalar(_) => "scalar".to_string(),
    });

    let rendered = if output.json { render_json(op, &outcome)? } else { render_text(&outcome) };
    println!("{rendered}");

    if let Some(path) = &output.out {
        let mut bytes = rendered.clone();
        bytes.push('\n');
        atomic_write(path, bytes)
            .with_context(|| format!("writing {}", path.display()))?;
        info!("wrote {}", path.display());
    }
    Ok(rendered)
}
