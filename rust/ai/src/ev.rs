//! Expected value of a hero action against a villain archetype.
//!
//! The model is a one-step lookahead: each villain response is priced once
//! and weighted by its probability. Nothing after the response is simulated.

use bluffsim_engine::cards::HoleCards;
use bluffsim_engine::equity::estimate_equity;
use bluffsim_engine::game::{GameState, Stage};
use bluffsim_engine::player::Action;

use crate::OpponentModel;

/// The slice of hand state the EV model reads.
#[derive(Debug, Clone, Copy)]
pub struct EvContext<'a> {
    pub pot: f64,
    pub stage: Stage,
    pub hole_cards: &'a HoleCards,
}

impl<'a> EvContext<'a> {
    pub fn from_state(state: &'a GameState) -> Self {
        Self {
            pot: state.pot(),
            stage: state.stage(),
            hole_cards: state.hole_cards(),
        }
    }
}

/// Payoff to the hero when the villain answers a `size` wager with `response`.
///
/// A fold wins the current pot. A river call goes to showdown at the
/// estimated river equity; an earlier call or any raise costs the wager,
/// scaled by the opponent's penalty. Bets and checks are worth nothing.
pub fn response_payoff(
    opponent: &dyn OpponentModel,
    response: Action,
    size: f64,
    ctx: &EvContext<'_>,
) -> f64 {
    match response {
        Action::Fold => ctx.pot,
        Action::Call if ctx.stage == Stage::River => {
            let equity = estimate_equity(ctx.hole_cards, Stage::River);
            equity * (ctx.pot + 2.0 * size) - (1.0 - equity) * size
        }
        Action::Call => -size * opponent.call_penalty(),
        Action::Raise => -size * opponent.raise_penalty(),
        _ => 0.0,
    }
}

/// Expected value of the hero taking `action` for `size`.
///
/// Folding is always 0.
///
/// # Examples
///
/// ```
/// use bluffsim_ai::Archetype;
/// use bluffsim_ai::ev::{expected_value, EvContext};
/// use bluffsim_engine::cards::HoleCards;
/// use bluffsim_engine::game::Stage;
/// use bluffsim_engine::player::Action;
///
/// let hole = HoleCards::new("7♦", "2♣");
/// let ctx = EvContext { pot: 1.5, stage: Stage::Preflop, hole_cards: &hole };
/// let ev = expected_value(Archetype::ScaredyCat.profile(), Action::Raise, 3.0, &ctx);
/// assert!((ev - 0.60).abs() < 1e-9);
/// ```
pub fn expected_value(
    opponent: &dyn OpponentModel,
    action: Action,
    size: f64,
    ctx: &EvContext<'_>,
) -> f64 {
    if action == Action::Fold {
        return 0.0;
    }
    opponent
        .responses(action)
        .iter()
        .map(|(response, p)| p * response_payoff(opponent, response, size, ctx))
        .sum()
}
