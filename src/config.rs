//! Settings file: built-in defaults + optional TOML config.
//!
//! - `Settings::default()` → colours and hints on, log level `warn`
//! - `Settings::from_toml_file(path)` → load a user file (missing keys keep defaults)
//! - `Settings::load(cli_path)` → `--config FILE` if given, else ~/.matcalc/config.toml if present

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub shell: ShellSettings,
    pub log: LogSettings,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ShellSettings {
    /// ANSI colours for prompts, banner and errors.
    pub color: bool,
    /// Print the input-format hint before every matrix prompt.
    pub hints: bool,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self { color: true, hints: true }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    /// `env_logger` filter used when MATCALC_LOG is unset and no -v was given.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self { level: "warn".to_string() }
    }
}

impl Settings {
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        toml::from_str(txt).context("parsing settings")
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&txt).with_context(|| format!("parsing {}", path.display()))
    }

    /// An explicitly named file must load; the default file is optional and
    /// a broken one only produces a warning.
    pub fn load(cli_path: &Option<PathBuf>) -> Result<Self> {
        if let Some(p) = cli_path {
            return Self::from_toml_file(p);
        }
        let Some(p) = default_config_path() else {
            return Ok(Self::default());
        };
        if !p.exists() {
            return Ok(Self::default());
        }
        Self::from_toml_file(&p).or_else(|e| {
            // runs before the logger is up, so this goes straight to stderr
            eprintln!("(warn) {:#}; using built-in settings", e);
            Ok(Self::default())
        })
    }
}

/// ~/.matcalc/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::home_dir().map(|h| h.join(".matcalc").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}
