//! matcalc main: one-shot subcommands, or the interactive shell by default.

use anyhow::Result;
use clap::Parser; // trait import enables MatcalcCli::parse()
use log::{debug, LevelFilter};

use matcalc::cli::{Command, MatcalcCli};
use matcalc::commands::eval::{self, Op};
use matcalc::config::{resolve_config_path, Settings};
use matcalc::shell;

fn set_console_title() {
    use crossterm::{execute, terminal::SetTitle};
    use std::io::IsTerminal;
    if std::io::stdout().is_terminal() {
        let _ = execute!(std::io::stdout(), SetTitle("matcalc"));
    }
}

/// `-v` flags beat the config file; MATCALC_LOG beats both.
fn init_logging(verbose: u8, configured: &str) {
    let default = match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("MATCALC_LOG", default))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let args = MatcalcCli::parse();

    let mut settings = Settings::load(&args.config)?;
    if args.no_color {
        settings.shell.color = false;
        colored::control::set_override(false);
    }
    init_logging(args.verbose, &settings.log.level);
    if let Some(p) = resolve_config_path(&args.config) {
        debug!("config path {} (exists: {})", p.display(), p.exists());
    }
    debug!("settings: {:?}", settings);

    let (op, operands, output) = match args.cmd {
        None | Some(Command::Shell) => {
            set_console_title();
            return shell::start(&settings.shell);
        }
        Some(Command::Add { a, b, output }) => (Op::Add, vec![a, b], output),
        Some(Command::Sub { a, b, output }) => (Op::Subtract, vec![a, b], output),
        Some(Command::Mul { a, b, output }) => (Op::Multiply, vec![a, b], output),
        Some(Command::Transpose { a, output }) => (Op::Transpose, vec![a], output),
        Some(Command::Det { a, output }) => (Op::Determinant, vec![a], output),
        Some(Command::Inv { a, output }) => (Op::Inverse, vec![a], output),
    };

    eval::main(op, &operands, &output)?;
    Ok(())
}
