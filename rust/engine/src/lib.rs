//! # bluffsim-engine: Heads-Up Hand State Core
//!
//! Bookkeeping for a heads-up hand between a hero and a scripted villain:
//! card tokens, the street state machine, pot and stack accounting, and the
//! heuristic equity estimate. Decision making lives in `bluffsim-ai`.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card tokens (Suit, Rank, Card, HoleCards) and board parsing
//! - [`deck`] - Seeded sampling of random starting hands
//! - [`equity`] - Heuristic win probability from hole cards and stage
//! - [`game`] - Stage ladder and the per-hand `GameState`
//! - [`player`] - Actors, seats and actions
//! - [`rules`] - Outstanding-bet detection and stage transitions
//! - [`logger`] - Decision log entries and JSONL hand records
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use bluffsim_engine::cards::HoleCards;
//! use bluffsim_engine::game::{GameState, Stage, TableConfig};
//! use bluffsim_engine::player::{Action, Actor};
//!
//! let hole = HoleCards::parse("A♠ K♥").unwrap();
//! let mut state = GameState::start_hand(&TableConfig::default(), hole, vec![]).unwrap();
//! assert_eq!(state.stage(), Stage::Preflop);
//! assert_eq!(state.pot(), 1.5);
//!
//! state.record(Actor::Hero, Action::Raise, 3.0).unwrap();
//! state.record(Actor::Villain, Action::Call, 3.0).unwrap();
//! assert_eq!(state.apply_transition(), Stage::Flop);
//! assert_eq!(state.pot(), 7.5);
//! ```

pub mod cards;
pub mod deck;
pub mod equity;
pub mod errors;
pub mod game;
pub mod logger;
pub mod player;
pub mod rules;
