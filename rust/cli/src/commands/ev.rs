//! EV command handler: price one hero action against an archetype.

use crate::commands::parse_stage;
use crate::error::CliError;
use crate::formatters::format_action;
use bluffsim_ai::ev::{EvContext, expected_value};
use bluffsim_ai::policy::RIVER_BET_FRACTION;
use bluffsim_ai::create_opponent;
use bluffsim_engine::cards::HoleCards;
use bluffsim_engine::game::Stage;
use bluffsim_engine::player::Action;
use std::io::Write;

/// Handle the ev command.
///
/// Missing `pot` takes the stage's starting pot and a missing wager size
/// takes what the hero would bet there with nothing to answer. Hole cards only
/// matter for a river call, so they are only required on the river.
pub fn handle_ev_command(
    vs: &str,
    action: &str,
    size: Option<f64>,
    pot: Option<f64>,
    stage: Option<&str>,
    cards: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let opponent = create_opponent(vs)?;
    let action: Action = action.parse()?;
    let stage = parse_stage(stage)?;
    if stage.is_final() {
        return Err(CliError::InvalidInput(format!(
            "no decisions are taken at {}",
            stage
        )));
    }

    let pot = pot.unwrap_or_else(|| stage.starting_pot());
    let size = match size {
        Some(s) => s,
        None if action.is_wager() && stage == Stage::River => pot * RIVER_BET_FRACTION,
        None if action.is_wager() => opponent.bluff_size(stage, pot).1,
        None => 0.0,
    };
    for (name, value) in [("pot", pot), ("size", size)] {
        if !value.is_finite() || value < 0.0 {
            return Err(CliError::InvalidInput(format!(
                "{} must be a non-negative number",
                name
            )));
        }
    }

    let hole = match cards {
        Some(c) => HoleCards::parse(c)?,
        None if stage == Stage::River => {
            return Err(CliError::InvalidInput(
                "--cards is required on the river".into(),
            ));
        }
        // Equity is never consulted off the river.
        None => HoleCards::new("", ""),
    };

    let ctx = EvContext {
        pot,
        stage,
        hole_cards: &hole,
    };
    let ev = expected_value(opponent, action, size, &ctx);
    writeln!(
        out,
        "EV of {} vs {} at {} (pot {:.2}): {:.4} BB",
        format_action(action, size),
        opponent.name(),
        stage,
        pot,
        ev
    )?;
    Ok(())
}
