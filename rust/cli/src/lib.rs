//! # bluffsim CLI Library
//!
//! Command-line front end for the heads-up bluff EV model. All number
//! crunching lives in `bluffsim-engine` and `bluffsim-ai`; this crate parses
//! arguments, layers configuration and turns results into text.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["bluffsim", "batch", "--trials", "100", "--seed", "7"];
//! let code = bluffsim_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `hand`: Play one hand against an archetype and print its transcript
//! - `batch`: Aggregate EV statistics over many random hands per archetype
//! - `equity`: Heuristic equity of two hole cards on a street
//! - `ev`: EV of a single hero action
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

#[macro_use]
mod macros;

pub mod cli;
mod commands;
mod config;
mod error;
mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;

use cli::{BluffsimCli, Commands};
use commands::{
    HandArgs, handle_batch_command, handle_cfg_command, handle_equity_command, handle_ev_command,
    handle_hand_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let args = ["bluffsim", "ev", "--vs", "scaredy-cat", "--action", "raise"];
/// let code = bluffsim_cli::run(args, &mut out, &mut err);
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("0.6000"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["hand", "batch", "equity", "ev", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match BluffsimCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "bluffsim: heads-up bluff EV model");
            write_or_exit!(err, "Usage: bluffsim <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: bluffsim --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Hand {
            vs,
            cards,
            board,
            position,
            stack,
            villain_stack,
            seed,
            output,
        } => handle_hand_command(
            HandArgs {
                vs,
                cards,
                board,
                position,
                stack,
                villain_stack,
                seed,
                output,
            },
            out,
            err,
        ),
        Commands::Batch {
            trials,
            seed,
            vs,
            parallel,
            json,
        } => handle_batch_command(trials, seed, &vs, parallel, json, out),
        Commands::Equity { cards, stage } => {
            handle_equity_command(&cards, stage.as_deref(), out)
        }
        Commands::Ev {
            vs,
            action,
            size,
            pot,
            stage,
            cards,
        } => handle_ev_command(
            &vs,
            &action,
            size,
            pot,
            stage.as_deref(),
            cards.as_deref(),
            out,
        ),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            if ui::write_error(err, &e.to_string()).is_err() {
                return exit_code::ERROR;
            }
            exit_code::ERROR
        }
    }
}
