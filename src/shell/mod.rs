//! Interactive menu shell.
//!
//! Pick an operation by number, then type each operand. A matrix ends at an
//! empty line, at end of input, or right after a line that contains `;`
//! (single-line form such as `1 2; 3 4`).

use anyhow::Context;
use colored::Colorize;
use crossterm::{cursor::MoveTo, execute, terminal::{Clear, ClearType}};
use log::{info, warn};
use std::io::{self, BufRead, Write};

use crate::commands::eval::{evaluate, Op, Outcome};
use crate::config::ShellSettings;
use crate::core::{format_matrix, format_scalar, parse_matrix, Matrix};

pub fn start(settings: &ShellSettings) -> anyhow::Result<()> {
    // Ctrl-C leaves quietly, like choosing 0.
    if let Err(e) = ctrlc::set_handler(|| {
        println!();
        std::process::exit(0);
    }) {
        warn!("could not install Ctrl-C handler: {e}");
    }

    // stdout stays unlocked: the Ctrl-C handler prints from its own thread.
    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), settings.clone());
    shell.run().context("shell I/O")
}

pub struct Shell<R, W> {
    input: R,
    out: W,
    settings: ShellSettings,
}

fn menu_op(choice: &str) -> Option<Op> {
    let op = match choice {
        "1" | "add" => Op::Add,
        "2" | "sub" => Op::Subtract,
        "3" | "mul" => Op::Multiply,
        "4" | "transpose" => Op::Transpose,
        "5" | "det" => Op::Determinant,
        "6" | "inv" => Op::Inverse,
        _ => return None,
    };
    Some(op)
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, out: W, settings: ShellSettings) -> Self {
        Self { input, out, settings }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.banner()?;
        loop {
            self.menu()?;
            let prompt = self.accent("choice ›");
            write!(self.out, "{} ", prompt)?;
            self.out.flush()?;

            let Some(choice) = self.read_line()? else {
                writeln!(self.out)?;
                break;
            };

            match choice.as_str() {
                "0" | "exit" | "quit" => {
                    writeln!(self.out, "bye.")?;
                    break;
                }
                "" => continue,
                "help" | "?" => self.hint()?,
                "clear" | "cls" => {
                    execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
                    self.banner()?;
                }
                other => match menu_op(other) {
                    Some(op) => self.run_op(op)?,
                    None => {
                        let tag = self.error_tag();
                        writeln!(self.out, "{} invalid choice '{}', try again", tag, other)?;
                    }
                },
            }
        }
        Ok(())
    }

    fn run_op(&mut self, op: Op) -> io::Result<()> {
        info!("shell: {}", op);
        match self.compute(op) {
            Ok(outcome) => self.show(op, &outcome),
            Err(e) => {
                let tag = self.error_tag();
                writeln!(self.out, "{} {:#}", tag, e)
            }
        }
    }

    fn compute(&mut self, op: Op) -> anyhow::Result<Outcome> {
        let mut operands = Vec::with_capacity(op.arity());
        for label in ["A", "B"].into_iter().take(op.arity()) {
            operands.push(self.read_matrix(label)?);
        }
        evaluate(op, &operands)
    }

    fn read_matrix(&mut self, label: &str) -> anyhow::Result<Matrix> {
        let prompt = self.accent(&format!("Enter matrix {label}:"));
        writeln!(self.out, "{}", prompt)?;
        if self.settings.hints {
            self.hint()?;
        }
        self.out.flush()?;

        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            if line.is_empty() {
                break;
            }
            let single_line = line.contains(';');
            lines.push(line);
            if single_line {
                break;
            }
        }
        parse_matrix(&lines.join("\n")).with_context(|| format!("matrix {label}"))
    }

    fn show(&mut self, op: Op, outcome: &Outcome) -> io::Result<()> {
        match (op, outcome) {
            (_, Outcome::Scalar(d)) => writeln!(self.out, "det(A) = {}", format_scalar(*d)),
            (Op::Transpose, Outcome::Matrix(m)) => writeln!(self.out, "A^T:\n{}", format_matrix(m)),
            (Op::Inverse, Outcome::Matrix(m)) => writeln!(self.out, "A^-1:\n{}", format_matrix(m)),
            (_, Outcome::Matrix(m)) => writeln!(self.out, "Result:\n{}", format_matrix(m)),
        }
    }

    /// One trimmed line, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn banner(&mut self) -> io::Result<()> {
        let title = if self.settings.color {
            "matcalc: dense matrix calculator".bold().truecolor(0, 255, 180).to_string()
        } else {
            "matcalc: dense matrix calculator".to_string()
        };
        writeln!(self.out, "{}\n", title)
    }

    fn menu(&mut self) -> io::Result<()> {
        let heading = self.accent("Matrix calculator: choose an operation");
        writeln!(
            self.out,
            "{}\n\
             1) add       A + B\n\
             2) subtract  A - B\n\
             3) multiply  A x B\n\
             4) transpose A^T\n\
             5) determinant det(A)\n\
             6) inverse   A^-1\n\
             0) exit",
            heading
        )
    }

    fn hint(&mut self) -> io::Result<()> {
        let text = "rows separated by ';' or new lines, columns by spaces or commas\n\
                    e.g. 1 2; 3 4   or   1,2,3\n                         4,5,6\n\
                    finish a multi-line matrix with an empty line";
        if self.settings.color {
            writeln!(self.out, "{}", text.truecolor(190, 190, 200))
        } else {
            writeln!(self.out, "{}", text)
        }
    }

    fn accent(&self, s: &str) -> String {
        if self.settings.color {
            s.truecolor(130, 0, 200).bold().to_string()
        } else {
            s.to_string()
        }
    }

    fn error_tag(&self) -> String {
        if self.settings.color {
            "error:".red().bold().to_string()
        } else {
            "error:".to_string()
        }
    }
}
