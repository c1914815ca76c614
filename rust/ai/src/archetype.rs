//! The three scripted villain archetypes.
//!
//! All archetype behaviour lives in one static table so adding a profile means
//! adding a row, not a type.

use bluffsim_engine::errors::GameError;
use bluffsim_engine::game::Stage;
use bluffsim_engine::player::Action;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::OpponentModel;
use crate::opponent::{ActionCategory, ResponseDistribution};

/// Preflop bluff raise size in big blinds.
pub const PREFLOP_RAISE_SIZE: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Archetype {
    TightPassive,
    LooseAggressive,
    ScaredyCat,
}

impl Archetype {
    pub const ALL: [Archetype; 3] = [
        Archetype::TightPassive,
        Archetype::LooseAggressive,
        Archetype::ScaredyCat,
    ];

    pub fn profile(self) -> &'static ArchetypeProfile {
        match self {
            Archetype::TightPassive => &PROFILES[0],
            Archetype::LooseAggressive => &PROFILES[1],
            Archetype::ScaredyCat => &PROFILES[2],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Archetype::TightPassive => "TIGHT_PASSIVE",
            Archetype::LooseAggressive => "LOOSE_AGGRESSIVE",
            Archetype::ScaredyCat => "SCAREDY_CAT",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Archetype {
    type Err = GameError;

    /// Accepts the canonical name in any case, with `-`, `_` or no
    /// separator, plus the short forms `tp`, `la` and `sc`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "tightpassive" | "tp" => Ok(Archetype::TightPassive),
            "looseaggressive" | "la" => Ok(Archetype::LooseAggressive),
            "scaredycat" | "sc" => Ok(Archetype::ScaredyCat),
            _ => Err(GameError::UnknownName {
                kind: "archetype",
                value: s.to_string(),
            }),
        }
    }
}

/// Fixed behaviour of one archetype.
#[derive(Debug)]
pub struct ArchetypeProfile {
    pub archetype: Archetype,
    /// Responses to a hero bet or raise
    pub vs_aggressive: &'static [(Action, f64)],
    /// Responses to a hero check, call or fold
    pub vs_passive: &'static [(Action, f64)],
    /// Postflop bluff bet as a fraction of the pot
    pub bluff_fraction: f64,
    pub call_penalty: f64,
    pub raise_penalty: f64,
}

pub static PROFILES: [ArchetypeProfile; 3] = [
    ArchetypeProfile {
        archetype: Archetype::TightPassive,
        vs_aggressive: &[(Action::Fold, 0.65), (Action::Call, 0.30), (Action::Raise, 0.05)],
        vs_passive: &[(Action::Check, 0.80), (Action::Bet, 0.20)],
        bluff_fraction: 0.6,
        call_penalty: 1.0,
        raise_penalty: 1.0,
    },
    // Calls and raises punish the hero harder than the table alone says.
    ArchetypeProfile {
        archetype: Archetype::LooseAggressive,
        vs_aggressive: &[(Action::Fold, 0.10), (Action::Call, 0.30), (Action::Raise, 0.60)],
        vs_passive: &[(Action::Check, 0.05), (Action::Bet, 0.95)],
        bluff_fraction: 0.5,
        call_penalty: 1.3,
        raise_penalty: 1.5,
    },
    ArchetypeProfile {
        archetype: Archetype::ScaredyCat,
        vs_aggressive: &[(Action::Fold, 0.80), (Action::Call, 0.19), (Action::Raise, 0.01)],
        vs_passive: &[(Action::Check, 0.90), (Action::Bet, 0.10)],
        bluff_fraction: 0.4,
        call_penalty: 1.0,
        raise_penalty: 1.0,
    },
];

impl OpponentModel for ArchetypeProfile {
    fn response_table(&self, category: ActionCategory) -> ResponseDistribution {
        match category {
            ActionCategory::Aggressive => ResponseDistribution::from_pairs(self.vs_aggressive),
            ActionCategory::Passive => ResponseDistribution::from_pairs(self.vs_passive),
            ActionCategory::AllIn => ResponseDistribution::certain(Action::Fold),
        }
    }

    fn bluff_size(&self, stage: Stage, pot: f64) -> (Action, f64) {
        match stage {
            Stage::Preflop => (Action::Raise, PREFLOP_RAISE_SIZE),
            _ => (Action::Bet, pot * self.bluff_fraction),
        }
    }

    fn call_penalty(&self) -> f64 {
        self.call_penalty
    }

    fn raise_penalty(&self) -> f64 {
        self.raise_penalty
    }

    fn name(&self) -> &str {
        self.archetype.as_str()
    }
}
