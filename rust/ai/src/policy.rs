//! Hero action selection.

use bluffsim_engine::game::{GameState, Stage};
use bluffsim_engine::player::Action;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::OpponentModel;
use crate::ev::{EvContext, expected_value};

/// Chance the hero re-raises when facing a villain bet with room to raise.
pub const RERAISE_PROBABILITY: f64 = 0.7;
/// River value bet as a fraction of the pot.
pub const RIVER_BET_FRACTION: f64 = 0.5;

/// What the hero does at one decision point, and what it is worth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub action: Action,
    pub size: f64,
    pub ev: f64,
}

/// Pick the hero's next action for the current state.
///
/// Facing a villain bet, raise or all-in the hero re-raises to twice the bet
/// or calls it, both clamped to the hero stack. With nothing to answer the
/// hero bets half the pot on the river and bluffs by the opponent's sizing
/// on earlier streets, checking when there is nothing left to bet.
///
/// `rng` is only drawn from when facing a bet.
pub fn choose_action<R: Rng + ?Sized>(
    state: &GameState,
    opponent: &dyn OpponentModel,
    rng: &mut R,
) -> Decision {
    let hero_stack = state.hero_stack();
    let (action, size) = match (state.outstanding_bet(), state.history().last()) {
        (Some(bet), Some(last)) => {
            let call_amt = bet.min(hero_stack);
            let raise_amt = (bet * 2.0).min(hero_stack);
            // An outstanding bet means the last villain move was a wager, so
            // this arm never matches. Kept as documented behaviour.
            if matches!(last.action, Action::Check | Action::Call) && raise_amt > 0.0 {
                (Action::Raise, raise_amt)
            } else if rng.random::<f64>() < RERAISE_PROBABILITY && raise_amt > call_amt {
                (Action::Raise, raise_amt)
            } else {
                (Action::Call, call_amt)
            }
        }
        _ if state.stage() == Stage::River => {
            (Action::Bet, (state.pot() * RIVER_BET_FRACTION).min(hero_stack))
        }
        _ => {
            let (action, size) = opponent.bluff_size(state.stage(), state.pot());
            let size = size.min(hero_stack);
            if size > 0.0 && hero_stack > 0.0 {
                (action, size)
            } else {
                (Action::Check, 0.0)
            }
        }
    };

    let ev = expected_value(opponent, action, size, &EvContext::from_state(state));
    Decision { action, size, ev }
}
