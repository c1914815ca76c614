//! Action categories and the discrete response distributions built from them.

use bluffsim_engine::errors::GameError;
use bluffsim_engine::player::Action;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

/// How the opponent model reads a hero action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionCategory {
    /// Bet or raise
    Aggressive,
    /// Everything else except all-in
    Passive,
    /// Handled by a fixed override
    AllIn,
}

impl ActionCategory {
    pub fn of(action: Action) -> Self {
        if action == Action::AllIn {
            ActionCategory::AllIn
        } else if action.is_aggressive() {
            ActionCategory::Aggressive
        } else {
            ActionCategory::Passive
        }
    }
}

/// Villain responses with their probabilities, in table order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResponseDistribution {
    outcomes: Vec<(Action, f64)>,
}

impl ResponseDistribution {
    pub fn from_pairs(pairs: &[(Action, f64)]) -> Self {
        Self {
            outcomes: pairs.to_vec(),
        }
    }

    /// A single response with probability 1.
    pub fn certain(action: Action) -> Self {
        Self {
            outcomes: vec![(action, 1.0)],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Action, f64)> + '_ {
        self.outcomes.iter().copied()
    }

    pub fn total(&self) -> f64 {
        self.outcomes.iter().map(|(_, p)| p).sum()
    }

    /// Probability of `action`, 0 when absent.
    pub fn probability(&self, action: Action) -> f64 {
        self.outcomes
            .iter()
            .filter(|(a, _)| *a == action)
            .map(|(_, p)| p)
            .sum()
    }

    /// Draw one response, weighted by probability.
    ///
    /// Fails with [`GameError::EmptyDistribution`] when there is nothing with
    /// positive weight to draw from.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Action, GameError> {
        let index = WeightedIndex::new(self.outcomes.iter().map(|(_, p)| *p))
            .map_err(|_| GameError::EmptyDistribution)?;
        Ok(self.outcomes[index.sample(rng)].0)
    }
}
