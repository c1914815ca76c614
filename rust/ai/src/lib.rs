//! # bluffsim-ai: Decision and EV Engine
//!
//! Decides what the hero does against a scripted villain archetype, prices
//! each decision, and plays hands to completion on top of
//! [`bluffsim_engine`]'s state machine.
//!
//! ## Core Components
//!
//! - [`OpponentModel`] - Trait for villain response distributions and bluff sizing
//! - [`archetype`] - The three fixed villain profiles, kept as one table
//! - [`opponent`] - Action categories and weighted response sampling
//! - [`ev`] - Expected value of a hero action
//! - [`policy`] - Hero action selection
//! - [`simulator`] - One full hand, street by street
//! - [`batch`] - Many independent hands per archetype, aggregated
//!
//! ## Quick Start
//!
//! ```rust
//! use bluffsim_ai::{Archetype, HandSimulator};
//! use bluffsim_engine::cards::HoleCards;
//! use bluffsim_engine::game::{GameState, TableConfig};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let state = GameState::start_hand(
//!     &TableConfig::default(),
//!     HoleCards::parse("7♦ 2♣").unwrap(),
//!     vec![],
//! )
//! .unwrap();
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//! let mut sim = HandSimulator::new(Archetype::ScaredyCat.profile(), state);
//! let result = sim.play(&mut rng);
//! assert!(result.decision_count >= 1);
//! ```

use bluffsim_engine::errors::GameError;
use bluffsim_engine::game::Stage;
use bluffsim_engine::player::Action;

pub mod archetype;
pub mod batch;
pub mod ev;
pub mod opponent;
pub mod policy;
pub mod simulator;

pub use archetype::{Archetype, ArchetypeProfile};
pub use batch::{ArchetypeSummary, BatchExperiment};
pub use opponent::{ActionCategory, ResponseDistribution};
pub use policy::Decision;
pub use simulator::HandSimulator;

/// Trait defining a villain's scripted behaviour.
///
/// Implementors provide the fixed response table per action category and the
/// size the hero bluffs with against them. The all-in override is shared by
/// every implementor through [`OpponentModel::responses`].
///
/// # Example Implementation
///
/// ```rust
/// use bluffsim_ai::{ActionCategory, OpponentModel, ResponseDistribution};
/// use bluffsim_engine::game::Stage;
/// use bluffsim_engine::player::Action;
///
/// struct Calling;
///
/// impl OpponentModel for Calling {
///     fn response_table(&self, _category: ActionCategory) -> ResponseDistribution {
///         ResponseDistribution::certain(Action::Call)
///     }
///     fn bluff_size(&self, _stage: Stage, pot: f64) -> (Action, f64) {
///         (Action::Bet, pot * 0.5)
///     }
///     fn name(&self) -> &str {
///         "CALLING_STATION"
///     }
/// }
///
/// let dist = Calling.responses(Action::AllIn);
/// assert_eq!(dist.probability(Action::Fold), 1.0);
/// ```
pub trait OpponentModel: Send + Sync {
    /// Response distribution for an aggressive or passive hero action.
    fn response_table(&self, category: ActionCategory) -> ResponseDistribution;

    /// Bluff the hero fires on a street with no bet in front.
    fn bluff_size(&self, stage: Stage, pot: f64) -> (Action, f64);

    /// Multiplier on the hero's loss when the villain calls before the river.
    fn call_penalty(&self) -> f64 {
        1.0
    }

    /// Multiplier on the hero's loss when the villain raises.
    fn raise_penalty(&self) -> f64 {
        1.0
    }

    fn name(&self) -> &str;

    /// Response distribution for a concrete hero action.
    ///
    /// An all-in is always answered with a fold, whatever the table says.
    fn responses(&self, hero_action: Action) -> ResponseDistribution {
        match ActionCategory::of(hero_action) {
            ActionCategory::AllIn => ResponseDistribution::certain(Action::Fold),
            category => self.response_table(category),
        }
    }
}

/// Look up a built-in opponent by archetype name.
///
/// # Example
///
/// ```rust
/// use bluffsim_ai::create_opponent;
///
/// let villain = create_opponent("loose-aggressive").unwrap();
/// assert_eq!(villain.name(), "LOOSE_AGGRESSIVE");
/// assert!(create_opponent("maniac").is_err());
/// ```
pub fn create_opponent(name: &str) -> Result<&'static dyn OpponentModel, GameError> {
    let archetype: Archetype = name.parse()?;
    Ok(archetype.profile())
}
