//! Where operand text comes from: inline text, `@PATH`, or `-` for stdin.

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl Source {
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Source::Stdin
        } else if let Some(path) = arg.strip_prefix('@') {
            Source::File(PathBuf::from(path))
        } else {
            Source::Inline(arg.to_string())
        }
    }

    pub fn read_with(&self, stdin: &mut impl Read) -> Result<String> {
        match self {
            Source::Inline(s) => Ok(s.clone()),
            Source::File(p) => {
                fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))
            }
            Source::Stdin => {
                let mut buf = String::new();
                stdin.read_to_string(&mut buf).context("reading stdin")?;
                Ok(buf)
            }
        }
    }

    pub fn read(&self) -> Result<String> {
        self.read_with(&mut std::io::stdin())
    }
}
