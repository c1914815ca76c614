use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::GameError;

/// Who made a move: the modelled hero or the scripted villain.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Actor {
    Hero,
    Villain,
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actor::Hero => write!(f, "Hero"),
            Actor::Villain => write!(f, "Villain"),
        }
    }
}

/// Represents the hero's seat at the table.
/// Only the blinds change stacks when a table is created.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
pub enum Position {
    /// Button, posts nothing
    #[default]
    #[serde(rename = "BTN")]
    Button,
    /// Cutoff, posts nothing
    #[serde(rename = "CO")]
    Cutoff,
    /// Small blind: hero posts 0.5, villain posts the big blind
    #[serde(rename = "SB")]
    SmallBlind,
    /// Big blind: hero posts 1.0, villain posts the small blind
    #[serde(rename = "BB")]
    BigBlind,
}

impl Position {
    /// Amounts `(hero, villain)` taken off the stacks when the table is set up.
    pub fn blind_posts(self) -> (f64, f64) {
        match self {
            Position::SmallBlind => (0.5, 1.0),
            Position::BigBlind => (1.0, 0.5),
            Position::Button | Position::Cutoff => (0.0, 0.0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Button => "BTN",
            Position::Cutoff => "CO",
            Position::SmallBlind => "SB",
            Position::BigBlind => "BB",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BTN" | "BU" | "BUTTON" => Ok(Position::Button),
            "CO" | "CUTOFF" => Ok(Position::Cutoff),
            "SB" => Ok(Position::SmallBlind),
            "BB" => Ok(Position::BigBlind),
            _ => Err(GameError::UnknownName {
                kind: "position",
                value: s.to_string(),
            }),
        }
    }
}

/// A move in the two-player betting model.
/// Amounts live alongside the action in [`crate::game::HistoryEntry`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Fold and forfeit the hand
    Fold,
    /// Pass without putting chips in
    Check,
    /// Match the outstanding bet
    Call,
    /// Open the betting
    Bet,
    /// Raise over an outstanding bet
    Raise,
    /// Commit the whole stack
    AllIn,
}

impl Action {
    /// Bet and raise are the aggressive category for the opponent model.
    pub fn is_aggressive(self) -> bool {
        matches!(self, Action::Bet | Action::Raise)
    }

    /// Actions that move chips from a stack into the pot.
    pub fn is_wager(self) -> bool {
        matches!(
            self,
            Action::Call | Action::Bet | Action::Raise | Action::AllIn
        )
    }

    /// Villain moves the hero has to answer.
    pub fn puts_hero_to_act(self) -> bool {
        matches!(self, Action::Bet | Action::Raise | Action::AllIn)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Fold => "FOLD",
            Action::Check => "CHECK",
            Action::Call => "CALL",
            Action::Bet => "BET",
            Action::Raise => "RAISE",
            Action::AllIn => "ALL_IN",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        match normalized.as_str() {
            "fold" => Ok(Action::Fold),
            "check" => Ok(Action::Check),
            "call" => Ok(Action::Call),
            "bet" => Ok(Action::Bet),
            "raise" => Ok(Action::Raise),
            "allin" => Ok(Action::AllIn),
            _ => Err(GameError::UnknownName {
                kind: "action",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blinds_by_position() {
        assert_eq!(Position::SmallBlind.blind_posts(), (0.5, 1.0));
        assert_eq!(Position::BigBlind.blind_posts(), (1.0, 0.5));
        assert_eq!(Position::Button.blind_posts(), (0.0, 0.0));
        assert_eq!(Position::Cutoff.blind_posts(), (0.0, 0.0));
    }

    #[test]
    fn action_names_round_trip_through_from_str() {
        for a in [
            Action::Fold,
            Action::Check,
            Action::Call,
            Action::Bet,
            Action::Raise,
            Action::AllIn,
        ] {
            assert_eq!(a.as_str().parse::<Action>().unwrap(), a);
        }
        assert_eq!("all-in".parse::<Action>().unwrap(), Action::AllIn);
        assert!("shove".parse::<Action>().is_err());
    }

    #[test]
    fn aggressive_category_excludes_all_in() {
        assert!(Action::Bet.is_aggressive());
        assert!(Action::Raise.is_aggressive());
        assert!(!Action::AllIn.is_aggressive());
        assert!(!Action::Call.is_aggressive());
    }

    #[test]
    fn position_parsing_is_case_insensitive() {
        assert_eq!("sb".parse::<Position>().unwrap(), Position::SmallBlind);
        assert_eq!("BTN".parse::<Position>().unwrap(), Position::Button);
        assert!("utg".parse::<Position>().is_err());
    }
}
