use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "matcalc",
    about = "matcalc: dense matrix calculator (add, multiply, transpose, det, inverse)",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct MatcalcCli {
    /// Global: path to config (TOML); default: ~/.matcalc/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: disable ANSI colours
    #[arg(long = "no-color", action = ArgAction::SetTrue, global = true)]
    pub no_color: bool,

    /// Global: more log output (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

/// Flags shared by every one-shot operation.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct OutputOpts {
    /// Print the result as JSON
    #[arg(long = "json", action = ArgAction::SetTrue)]
    pub json: bool,

    /// Also write the rendered result to FILE
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive menu shell (default when no subcommand is given)
    Shell,

    /// A + B
    ///
    /// Operands are matrix text ("1 2; 3 4"), @FILE, or - for stdin.
    Add {
        #[arg(value_name = "A", allow_hyphen_values = true)]
        a: String,
        #[arg(value_name = "B", allow_hyphen_values = true)]
        b: String,
        #[command(flatten)]
        output: OutputOpts,
    },

    /// A - B
    #[command(visible_alias = "subtract")]
    Sub {
        #[arg(value_name = "A", allow_hyphen_values = true)]
        a: String,
        #[arg(value_name = "B", allow_hyphen_values = true)]
        b: String,
        #[command(flatten)]
        output: OutputOpts,
    },

    /// A × B
    #[command(visible_alias = "multiply")]
    Mul {
        #[arg(value_name = "A", allow_hyphen_values = true)]
        a: String,
        #[arg(value_name = "B", allow_hyphen_values = true)]
        b: String,
        #[command(flatten)]
        output: OutputOpts,
    },

    /// A^T
    Transpose {
        #[arg(value_name = "A", allow_hyphen_values = true)]
        a: String,
        #[command(flatten)]
        output: OutputOpts,
    },

    /// det(A)
    #[command(visible_alias = "determinant")]
    Det {
        #[arg(value_name = "A", allow_hyphen_values = true)]
        a: String,
        #[command(flatten)]
        output: OutputOpts,
    },

    /// A^-1
    #[command(visible_alias = "inverse")]
    Inv {
        #[arg(value_name = "A", allow_hyphen_values = true)]
        a: String,
        #[command(flatten)]
        output: OutputOpts,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        MatcalcCli::command().debug_assert();
    }

    #[test]
    fn parses_global_and_output_flags() {
        let cli = MatcalcCli::try_parse_from(["matcalc", "--no-color", "-vv", "det", "--json", "1 2; 3 4"])
            .expect("parse");
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
        match cli.cmd {
            Some(Command::Det { a, output }) => {
                assert_eq!(a, "1 2; 3 4");
                assert!(output.json);
                assert!(output.out.is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn aliases_resolve() {
        let cli = MatcalcCli::try_parse_from(["matcalc", "inverse", "1"]).expect("parse");
        assert!(matches!(cli.cmd, Some(Command::Inv { .. })));
    }

    #[test]
    fn negative_operand_is_a_value() {
        let cli = MatcalcCli::try_parse_from(["matcalc", "add", "-1 2", "3 -4"]).expect("parse");
        match cli.cmd {
            Some(Command::Add { a, b, .. }) => {
                assert_eq!(a, "-1 2");
                assert_eq!(b, "3 -4");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn no_subcommand_means_shell() {
        let cli = MatcalcCli::try_parse_from(["matcalc"]).expect("parse");
        assert!(cli.cmd.is_none());
    }
}
