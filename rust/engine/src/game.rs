use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::cards::{Card, HoleCards};
use crate::errors::GameError;
use crate::logger::DecisionLogEntry;
use crate::player::{Action, Actor, Position};
use crate::rules;

/// Betting rounds plus the two resolution phases.
///
/// Streets only move forward along `Preflop -> Flop -> Turn -> River -> Showdown`.
/// `Terminal` (a fold) and `Showdown` (an exhausted stack) may be reached from
/// any street.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
    Terminal,
}

impl Stage {
    /// One step along the street ladder. Resolution phases map to themselves.
    pub fn next(self) -> Stage {
        match self {
            Stage::Preflop => Stage::Flop,
            Stage::Flop => Stage::Turn,
            Stage::Turn => Stage::River,
            Stage::River => Stage::Showdown,
            Stage::Showdown => Stage::Showdown,
            Stage::Terminal => Stage::Terminal,
        }
    }

    /// True once the hand has left the betting streets.
    pub fn is_final(self) -> bool {
        matches!(self, Stage::Showdown | Stage::Terminal)
    }

    /// Street implied by the number of pre-dealt board cards.
    pub fn from_board_len(len: usize) -> Result<Stage, GameError> {
        match len {
            0 => Ok(Stage::Preflop),
            3 => Ok(Stage::Flop),
            4 => Ok(Stage::Turn),
            5 => Ok(Stage::River),
            n => Err(GameError::BoardSize(n)),
        }
    }

    /// Fixed pot a hand starts with on this street, in big blinds.
    /// This is a convention, not the sum of earlier betting.
    pub fn starting_pot(self) -> f64 {
        match self {
            Stage::Preflop => 1.5,
            Stage::Flop => 4.0,
            Stage::Turn => 8.0,
            Stage::River => 16.0,
            Stage::Showdown | Stage::Terminal => 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Preflop => "PREFLOP",
            Stage::Flop => "FLOP",
            Stage::Turn => "TURN",
            Stage::River => "RIVER",
            Stage::Showdown => "SHOWDOWN",
            Stage::Terminal => "TERMINAL",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PREFLOP" => Ok(Stage::Preflop),
            "FLOP" => Ok(Stage::Flop),
            "TURN" => Ok(Stage::Turn),
            "RIVER" => Ok(Stage::River),
            "SHOWDOWN" => Ok(Stage::Showdown),
            "TERMINAL" => Ok(Stage::Terminal),
            _ => Err(GameError::UnknownName {
                kind: "stage",
                value: s.to_string(),
            }),
        }
    }
}

/// One move in the hand history. Append-only while the hand runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub actor: Actor,
    pub action: Action,
    /// Chips actually moved into the pot by this move (0 for fold/check)
    pub amount: f64,
}

/// EV attached to one hero decision point. Statistics only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub stage: Stage,
    pub action: Action,
    pub size: f64,
    pub ev: f64,
}

/// Stacks and seat used to open a table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    pub hero_stack: f64,
    pub villain_stack: f64,
    pub position: Position,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            hero_stack: 100.0,
            villain_stack: 100.0,
            position: Position::Button,
        }
    }
}

/// Everything one hand mutates. Created at hand start, dropped once resolved.
///
/// The pot always equals the street's starting pot plus every amount in
/// `history`, and no entry ever moves more than its actor had behind.
#[derive(Debug, Clone)]
pub struct GameState {
    pot: f64,
    hero_stack: f64,
    villain_stack: f64,
    stage: Stage,
    position: Position,
    hole_cards: HoleCards,
    board: Vec<Card>,
    history: Vec<HistoryEntry>,
    initial_stack: f64,
    decision_log: Vec<DecisionLogEntry>,
    decisions: Vec<DecisionRecord>,
}

impl GameState {
    /// Seat the players, post blinds by position and deal the hero's cards.
    ///
    /// The board decides the starting street: none is preflop, 3 cards start
    /// on the flop, 4 on the turn and 5 on the river.
    pub fn start_hand(
        table: &TableConfig,
        hole_cards: HoleCards,
        board: Vec<Card>,
    ) -> Result<Self, GameError> {
        for stack in [table.hero_stack, table.villain_stack] {
            if !stack.is_finite() || stack < 0.0 {
                return Err(GameError::InvalidAmount(stack));
            }
        }
        let stage = Stage::from_board_len(board.len())?;
        let (hero_blind, villain_blind) = table.position.blind_posts();
        let hero_stack = table.hero_stack - hero_blind.min(table.hero_stack);
        let villain_stack = table.villain_stack - villain_blind.min(table.villain_stack);

        Ok(Self {
            pot: stage.starting_pot(),
            hero_stack,
            villain_stack,
            stage,
            position: table.position,
            hole_cards,
            board,
            history: Vec::new(),
            initial_stack: hero_stack,
            decision_log: Vec::new(),
            decisions: Vec::new(),
        })
    }

    pub fn pot(&self) -> f64 {
        self.pot
    }
    pub fn hero_stack(&self) -> f64 {
        self.hero_stack
    }
    pub fn villain_stack(&self) -> f64 {
        self.villain_stack
    }
    pub fn stack(&self, actor: Actor) -> f64 {
        match actor {
            Actor::Hero => self.hero_stack,
            Actor::Villain => self.villain_stack,
        }
    }
    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn position(&self) -> Position {
        self.position
    }
    pub fn hole_cards(&self) -> &HoleCards {
        &self.hole_cards
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }
    pub fn initial_stack(&self) -> f64 {
        self.initial_stack
    }
    pub fn decision_log(&self) -> &[DecisionLogEntry] {
        &self.decision_log
    }
    pub fn decisions(&self) -> &[DecisionRecord] {
        &self.decisions
    }

    /// Hero profit relative to the stack snapshotted at hand start.
    pub fn net_profit(&self) -> f64 {
        self.hero_stack - self.initial_stack
    }

    /// Size of an unanswered villain bet, raise or all-in.
    pub fn outstanding_bet(&self) -> Option<f64> {
        rules::outstanding_bet(&self.history)
    }

    /// Append a move and apply its chips to the pot.
    ///
    /// Wagers are clamped to the actor's stack; a wager of the whole stack
    /// leaves exactly 0 behind. Returns the amount that went into the pot.
    pub fn record(&mut self, actor: Actor, action: Action, amount: f64) -> Result<f64, GameError> {
        if self.stage.is_final() {
            return Err(GameError::HandAlreadyComplete);
        }
        if !amount.is_finite() || amount < 0.0 {
            return Err(GameError::InvalidAmount(amount));
        }

        let moved = if action.is_wager() {
            let stack = match actor {
                Actor::Hero => &mut self.hero_stack,
                Actor::Villain => &mut self.villain_stack,
            };
            let moved = amount.min(*stack);
            *stack -= moved;
            self.pot += moved;
            moved
        } else {
            0.0
        };

        self.history.push(HistoryEntry {
            actor,
            action,
            amount: moved,
        });
        self.decision_log.push(DecisionLogEntry {
            actor,
            stage: self.stage,
            action,
            size: moved,
            pot: self.pot,
            stack: self.stack(actor),
        });
        Ok(moved)
    }

    pub fn record_decision(&mut self, decision: DecisionRecord) {
        self.decisions.push(decision);
    }

    /// Run the street state machine over the latest action pair.
    pub fn apply_transition(&mut self) -> Stage {
        let next = rules::next_stage(
            self.stage,
            &self.history,
            self.hero_stack,
            self.villain_stack,
        );
        if next != self.stage {
            tracing::debug!(from = %self.stage, to = %next, "stage transition");
        }
        self.stage = next;
        next
    }

    /// Force a resolution phase (fold or exhausted stack).
    pub fn force_stage(&mut self, stage: Stage) {
        self.stage = stage;
    }

    /// Move the pot onto the winner's stack. The pot value is kept for reporting.
    pub fn award_pot(&mut self, winner: Actor) {
        match winner {
            Actor::Hero => self.hero_stack += self.pot,
            Actor::Villain => self.villain_stack += self.pot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_board;

    fn hole() -> HoleCards {
        HoleCards::new("A♠", "K♥")
    }

    #[test]
    fn starting_pot_follows_board() {
        let table = TableConfig::default();
        let cases = [
            ("", Stage::Preflop, 1.5),
            ("A♣ K♦ 5♥", Stage::Flop, 4.0),
            ("A♣ K♦ 5♥ 8♠", Stage::Turn, 8.0),
            ("A♣ K♦ 5♥ 8♠ 2♦", Stage::River, 16.0),
        ];
        for (board, stage, pot) in cases {
            let gs = GameState::start_hand(&table, hole(), parse_board(board).unwrap()).unwrap();
            assert_eq!(gs.stage(), stage);
            assert_eq!(gs.pot(), pot);
        }
    }

    #[test]
    fn blinds_adjust_stacks_before_snapshot() {
        let table = TableConfig {
            position: Position::SmallBlind,
            ..TableConfig::default()
        };
        let gs = GameState::start_hand(&table, hole(), vec![]).unwrap();
        assert_eq!(gs.hero_stack(), 99.5);
        assert_eq!(gs.villain_stack(), 99.0);
        assert_eq!(gs.initial_stack(), 99.5);
        assert_eq!(gs.pot(), 1.5);
    }

    #[test]
    fn wagers_are_clamped_to_stack() {
        let table = TableConfig {
            hero_stack: 5.0,
            ..TableConfig::default()
        };
        let mut gs = GameState::start_hand(&table, hole(), vec![]).unwrap();
        let moved = gs.record(Actor::Hero, Action::Raise, 12.0).unwrap();
        assert_eq!(moved, 5.0);
        assert_eq!(gs.hero_stack(), 0.0);
        assert_eq!(gs.pot(), 6.5);
        assert_eq!(gs.history()[0].amount, 5.0);
    }

    #[test]
    fn non_wagers_move_no_chips() {
        let mut gs = GameState::start_hand(&TableConfig::default(), hole(), vec![]).unwrap();
        gs.record(Actor::Villain, Action::Check, 3.0).unwrap();
        assert_eq!(gs.pot(), 1.5);
        assert_eq!(gs.villain_stack(), 100.0);
    }

    #[test]
    fn rejects_invalid_amounts_and_finished_hands() {
        let mut gs = GameState::start_hand(&TableConfig::default(), hole(), vec![]).unwrap();
        assert!(matches!(
            gs.record(Actor::Hero, Action::Bet, f64::NAN),
            Err(GameError::InvalidAmount(_))
        ));
        assert_eq!(
            gs.record(Actor::Hero, Action::Bet, -1.0),
            Err(GameError::InvalidAmount(-1.0))
        );
        gs.force_stage(Stage::Terminal);
        assert_eq!(
            gs.record(Actor::Hero, Action::Bet, 1.0),
            Err(GameError::HandAlreadyComplete)
        );
    }

    #[test]
    fn decision_log_reports_pot_and_stack_after_move() {
        let mut gs = GameState::start_hand(&TableConfig::default(), hole(), vec![]).unwrap();
        gs.record(Actor::Hero, Action::Raise, 3.0).unwrap();
        let entry = gs.decision_log()[0];
        assert_eq!(entry.pot, 4.5);
        assert_eq!(entry.stack, 97.0);
        assert_eq!(entry.stage, Stage::Preflop);
    }

    #[test]
    fn award_pot_credits_winner() {
        let mut gs = GameState::start_hand(&TableConfig::default(), hole(), vec![]).unwrap();
        gs.record(Actor::Hero, Action::Raise, 3.0).unwrap();
        gs.award_pot(Actor::Hero);
        assert_eq!(gs.hero_stack(), 101.5);
        assert_eq!(gs.net_profit(), 1.5);
    }

    #[test]
    fn stage_ladder() {
        assert_eq!(Stage::Preflop.next(), Stage::Flop);
        assert_eq!(Stage::River.next(), Stage::Showdown);
        assert_eq!(Stage::Showdown.next(), Stage::Showdown);
        assert_eq!(Stage::Terminal.next(), Stage::Terminal);
        assert!(Stage::Preflop < Stage::Flop && Stage::River < Stage::Showdown);
    }
}
