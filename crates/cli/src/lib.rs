// crates/cli/src/lib.rs
//! Command line front end: argument parsing, subscriber setup and the
//! `select`, `match` and `translate` commands.

use std::io::{self, Write};

use clap::CommandFactory;
use tracing::subscriber::with_default;

pub mod error;
pub mod options;
mod select;
mod validate;

pub use error::{CliError, ExitCode, Result};
pub use options::{Cli, Command, LogOpts, MatchOpts, PatternOpts, SelectOpts, TranslateOpts};
pub use validate::exit_code_from_error_kind;

pub fn cli_command() -> clap::Command {
    Cli::command()
}

/// Run a parsed command line, writing command output to stdout.
pub fn run(cli: Cli) -> Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(cli, &mut out)
}

/// Run a parsed command line under its own subscriber, writing command
/// output to `out`.
pub fn run_with_output<W: Write>(cli: Cli, out: &mut W) -> Result<ExitCode> {
    let sub = logging::subscriber(cli.log.subscriber_config()).map_err(CliError::LogFile)?;
    with_default(sub, || execute(&cli.command, out))
}

pub fn execute<W: Write>(command: &Command, out: &mut W) -> Result<ExitCode> {
    match command {
        Command::Select(opts) => select::run_select(opts, out),
        Command::Match(opts) => select::run_match(opts),
        Command::Translate(opts) => select::run_translate(opts, out),
    }
}
