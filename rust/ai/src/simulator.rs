//! Plays one hand to resolution.

use bluffsim_engine::equity::estimate_equity;
use bluffsim_engine::errors::GameError;
use bluffsim_engine::game::{DecisionRecord, GameState, Stage};
use bluffsim_engine::logger::HandResult;
use bluffsim_engine::player::{Action, Actor};
use rand::Rng;

use crate::OpponentModel;
use crate::policy::choose_action;

/// Chips the villain puts in with `response` to a hero wager of `size`.
///
/// `pot` is the pot after the hero's contribution.
pub fn villain_amount(response: Action, size: f64, pot: f64, villain_stack: f64) -> f64 {
    match response {
        Action::Call => size.min(villain_stack),
        Action::Raise => (size * 2.0).min(villain_stack),
        Action::Bet => (pot * 0.5).min(villain_stack),
        _ => 0.0,
    }
}

/// Drives one [`GameState`] against one opponent until the hand resolves.
///
/// All randomness (villain responses, re-raise draws, the showdown) comes
/// from the generator passed to [`HandSimulator::play`].
pub struct HandSimulator<'a> {
    opponent: &'a dyn OpponentModel,
    state: GameState,
    result: Option<HandResult>,
}

impl<'a> HandSimulator<'a> {
    pub fn new(opponent: &'a dyn OpponentModel, state: GameState) -> Self {
        Self {
            opponent,
            state,
            result: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Play the hand out and award the pot.
    ///
    /// A failing decision step stops the betting but never escapes: the hand
    /// is resolved from wherever it stopped and flagged as aborted. Calling
    /// this again returns the first result without replaying.
    pub fn play<R: Rng + ?Sized>(&mut self, rng: &mut R) -> HandResult {
        if let Some(result) = self.result {
            return result;
        }

        let mut aborted = false;
        while !self.state.stage().is_final() {
            match self.step(rng) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) => {
                    tracing::warn!(
                        opponent = self.opponent.name(),
                        stage = %self.state.stage(),
                        error = %err,
                        "decision step failed, resolving hand early"
                    );
                    aborted = true;
                    break;
                }
            }
        }

        let result = self.resolve(rng, aborted);
        self.result = Some(result);
        result
    }

    /// One hero decision and the villain's answer. `Ok(false)` ends the hand.
    fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<bool, GameError> {
        let stage = self.state.stage();
        let decision = choose_action(&self.state, self.opponent, rng);
        self.state.record_decision(DecisionRecord {
            stage,
            action: decision.action,
            size: decision.size,
            ev: decision.ev,
        });
        tracing::debug!(
            %stage,
            action = %decision.action,
            size = decision.size,
            ev = decision.ev,
            "hero decision"
        );

        self.state.record(Actor::Hero, decision.action, decision.size)?;

        let response = self.opponent.responses(decision.action).sample(rng)?;
        let amount = villain_amount(
            response,
            decision.size,
            self.state.pot(),
            self.state.villain_stack(),
        );
        self.state.record(Actor::Villain, response, amount)?;
        tracing::debug!(action = %response, amount, pot = self.state.pot(), "villain response");

        self.state.apply_transition();

        if response == Action::Fold {
            self.state.force_stage(Stage::Terminal);
            return Ok(false);
        }
        if self.state.hero_stack() == 0.0 || self.state.villain_stack() == 0.0 {
            self.state.force_stage(Stage::Showdown);
            return Ok(false);
        }
        Ok(true)
    }

    fn resolve<R: Rng + ?Sized>(&mut self, rng: &mut R, aborted: bool) -> HandResult {
        let final_stage = self.state.stage();
        let winner = if final_stage == Stage::Terminal {
            match self.state.history().last() {
                Some(last) if last.actor == Actor::Villain && last.action == Action::Fold => {
                    Actor::Hero
                }
                _ => Actor::Villain,
            }
        } else {
            let equity = estimate_equity(self.state.hole_cards(), Stage::Showdown);
            if rng.random::<f64>() < equity {
                Actor::Hero
            } else {
                Actor::Villain
            }
        };
        self.state.award_pot(winner);

        let decisions = self.state.decisions();
        let total_ev: f64 = decisions.iter().map(|d| d.ev).sum();
        let decision_count = decisions.len();
        let average_ev = if decision_count > 0 {
            total_ev / decision_count as f64
        } else {
            0.0
        };

        tracing::debug!(
            %winner,
            pot = self.state.pot(),
            net_profit = self.state.net_profit(),
            "hand resolved"
        );

        HandResult {
            winner,
            net_profit: self.state.net_profit(),
            total_ev,
            decision_count,
            average_ev,
            final_stage,
            aborted,
        }
    }
}
