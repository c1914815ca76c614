//! Command handler modules for the bluffsim CLI.
//!
//! Each command lives in its own file with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in, never taken from the process
//! - Errors propagated via `CliError`

pub mod batch;
pub mod cfg;
pub mod equity;
pub mod ev;
pub mod hand;

pub use batch::handle_batch_command;
pub use cfg::handle_cfg_command;
pub use equity::handle_equity_command;
pub use ev::handle_ev_command;
pub use hand::{HandArgs, handle_hand_command};

use bluffsim_engine::game::Stage;

use crate::error::CliError;

/// Parse an optional `--stage` flag, defaulting to preflop.
pub(crate) fn parse_stage(stage: Option<&str>) -> Result<Stage, CliError> {
    Ok(match stage {
        Some(s) => s.parse()?,
        None => Stage::Preflop,
    })
}
