//! Heuristic equity estimate from the hero's hole cards.
//!
//! This is not a hand evaluator: it ignores the board and any villain range
//! and only looks at rank height, suitedness and pairing, then scales the
//! result down on later streets.

use crate::cards::{HoleCards, Rank};
use crate::game::Stage;

/// Lowest equity the estimator reports.
pub const MIN_EQUITY: f64 = 0.05;
/// Highest equity the estimator reports.
pub const MAX_EQUITY: f64 = 0.95;
/// Strength used for a token whose rank cannot be read.
pub const MALFORMED_RANK_STRENGTH: f64 = 0.3;
/// Largest normalized rank gap still counted as connected.
pub const CONNECTED_GAP: f64 = 0.083;

const SUITED_CONNECTED_BONUS: f64 = 0.15;
const SUITED_BONUS: f64 = 0.07;
const CONNECTED_BONUS: f64 = 0.08;

/// Multiplier applied to raw strength on each stage.
pub fn stage_factor(stage: Stage) -> f64 {
    match stage {
        Stage::Preflop => 0.8,
        Stage::Flop => 0.6,
        Stage::Turn => 0.4,
        Stage::River => 0.2,
        Stage::Showdown | Stage::Terminal => 1.0,
    }
}

/// Estimate the hero's chance of winning, clamped to `[0.05, 0.95]`.
///
/// Seven-deuce is pinned to the floor whatever the suits. Pure: the same
/// input always gives the same output.
///
/// # Examples
///
/// ```
/// use bluffsim_engine::cards::HoleCards;
/// use bluffsim_engine::equity::estimate_equity;
/// use bluffsim_engine::game::Stage;
///
/// let trash = HoleCards::new("7♦", "2♣");
/// assert_eq!(estimate_equity(&trash, Stage::Preflop), 0.05);
///
/// let aces = HoleCards::new("A♠", "A♥");
/// assert!(estimate_equity(&aces, Stage::Showdown) > 0.9);
/// ```
pub fn estimate_equity(hole: &HoleCards, stage: Stage) -> f64 {
    let ranks = hole.ranks();
    if is_seven_deuce(ranks) {
        return MIN_EQUITY;
    }

    let values = ranks.map(|r| r.map_or(MALFORMED_RANK_STRENGTH, normalized));
    let mut strength = (values[0] + values[1]) / 2.0;

    let suited = hole.suited();
    let connected = (values[0] - values[1]).abs() <= CONNECTED_GAP;
    strength += match (suited, connected) {
        (true, true) => SUITED_CONNECTED_BONUS,
        (true, false) => SUITED_BONUS,
        (false, true) => CONNECTED_BONUS,
        (false, false) => 0.0,
    };

    (strength * stage_factor(stage)).clamp(MIN_EQUITY, MAX_EQUITY)
}

fn normalized(rank: Rank) -> f64 {
    rank.index() as f64 / 12.0
}

fn is_seven_deuce(ranks: [Option<Rank>; 2]) -> bool {
    matches!(
        ranks,
        [Some(Rank::Seven), Some(Rank::Two)] | [Some(Rank::Two), Some(Rank::Seven)]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAGES: [Stage; 6] = [
        Stage::Preflop,
        Stage::Flop,
        Stage::Turn,
        Stage::River,
        Stage::Showdown,
        Stage::Terminal,
    ];

    #[test]
    fn seven_deuce_is_pinned_in_either_order() {
        for stage in STAGES {
            assert_eq!(estimate_equity(&HoleCards::new("7♦", "2♣"), stage), 0.05);
            assert_eq!(estimate_equity(&HoleCards::new("2♦", "7♦"), stage), 0.05);
        }
    }

    #[test]
    fn offsuit_unconnected_uses_average_rank() {
        // A = 12/12, K = 11/12, gap 1/12 is wider than the connected threshold
        let e = estimate_equity(&HoleCards::new("A♠", "K♥"), Stage::Preflop);
        let expected = ((1.0 + 11.0 / 12.0) / 2.0) * 0.8;
        assert!((e - expected).abs() < 1e-12);
    }

    #[test]
    fn suited_bonus() {
        let e = estimate_equity(&HoleCards::new("Q♠", "9♠"), Stage::Flop);
        let expected = ((10.0 / 12.0 + 7.0 / 12.0) / 2.0 + 0.07) * 0.6;
        assert!((e - expected).abs() < 1e-12);
    }

    #[test]
    fn pairs_count_as_connected() {
        let e = estimate_equity(&HoleCards::new("8♠", "8♥"), Stage::Turn);
        let expected = (6.0 / 12.0 + 0.08) * 0.4;
        assert!((e - expected).abs() < 1e-12);
    }

    #[test]
    fn malformed_rank_falls_back_to_neutral() {
        let e = estimate_equity(&HoleCards::new("X♠", "?♥"), Stage::Showdown);
        // both 0.3, gap 0 counts as connected
        assert!((e - 0.38).abs() < 1e-12);
    }

    #[test]
    fn output_stays_in_bounds() {
        let tokens = ["A♠", "K♠", "2♥", "7♣", "T♦", "Zz", "", "9"];
        for a in tokens {
            for b in tokens {
                for stage in STAGES {
                    let e = estimate_equity(&HoleCards::new(a, b), stage);
                    assert!((MIN_EQUITY..=MAX_EQUITY).contains(&e), "{a} {b} {stage}: {e}");
                }
            }
        }
    }

    #[test]
    fn estimate_is_idempotent() {
        let hole = HoleCards::new("J♣", "T♣");
        assert_eq!(
            estimate_equity(&hole, Stage::River),
            estimate_equity(&hole, Stage::River)
        );
    }
}
