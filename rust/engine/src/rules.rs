//! Street transitions derived from the action history.

use crate::game::{HistoryEntry, Stage};
use crate::player::{Action, Actor};

/// Returns the size of the villain's last move when it still needs an answer.
///
/// Only the very last entry counts: a villain bet, raise or all-in that the
/// hero has not yet responded to.
///
/// # Examples
///
/// ```
/// use bluffsim_engine::game::HistoryEntry;
/// use bluffsim_engine::player::{Action, Actor};
/// use bluffsim_engine::rules::outstanding_bet;
///
/// let history = [
///     HistoryEntry { actor: Actor::Hero, action: Action::Check, amount: 0.0 },
///     HistoryEntry { actor: Actor::Villain, action: Action::Bet, amount: 2.0 },
/// ];
/// assert_eq!(outstanding_bet(&history), Some(2.0));
/// assert_eq!(outstanding_bet(&history[..1]), None);
/// ```
pub fn outstanding_bet(history: &[HistoryEntry]) -> Option<f64> {
    match history.last() {
        Some(last) if last.actor == Actor::Villain && last.action.puts_hero_to_act() => {
            Some(last.amount)
        }
        _ => None,
    }
}

/// Street state machine, applied after each hero/villain action pair.
///
/// Rules in priority order:
/// 1. a fold in either of the last two entries ends the hand (`Terminal`);
/// 2. two checks in a row advance one street;
/// 3. a call that closes the betting advances one street: either the villain
///    called, or the hero's latest move was a call and nothing is outstanding;
/// 4. an exhausted stack forces `Showdown`, overriding the above.
///
/// Fewer than two history entries leave the stage unchanged.
pub fn next_stage(
    stage: Stage,
    history: &[HistoryEntry],
    hero_stack: f64,
    villain_stack: f64,
) -> Stage {
    let [.., prev, last] = history else {
        return stage;
    };

    let mut next = stage;
    if prev.action == Action::Fold || last.action == Action::Fold {
        next = Stage::Terminal;
    } else if prev.action == Action::Check && last.action == Action::Check {
        next = stage.next();
    } else if closes_on_call(history, last) {
        next = stage.next();
    }

    if hero_stack == 0.0 || villain_stack == 0.0 {
        next = Stage::Showdown;
    }
    next
}

fn closes_on_call(history: &[HistoryEntry], last: &HistoryEntry) -> bool {
    if last.action == Action::Call {
        return outstanding_bet(history).is_none();
    }
    let hero_called = history
        .iter()
        .rev()
        .find(|e| e.actor == Actor::Hero)
        .is_some_and(|e| e.action == Action::Call);
    hero_called && outstanding_bet(history).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e(actor: Actor, action: Action, amount: f64) -> HistoryEntry {
        HistoryEntry {
            actor,
            action,
            amount,
        }
    }

    #[test]
    fn single_entry_keeps_stage() {
        let h = [e(Actor::Hero, Action::Check, 0.0)];
        assert_eq!(next_stage(Stage::Flop, &h, 10.0, 10.0), Stage::Flop);
    }

    #[test]
    fn fold_is_terminal() {
        let h = [
            e(Actor::Hero, Action::Bet, 2.0),
            e(Actor::Villain, Action::Fold, 0.0),
        ];
        assert_eq!(next_stage(Stage::Turn, &h, 10.0, 10.0), Stage::Terminal);
    }

    #[test]
    fn double_check_advances() {
        let h = [
            e(Actor::Hero, Action::Check, 0.0),
            e(Actor::Villain, Action::Check, 0.0),
        ];
        assert_eq!(next_stage(Stage::Preflop, &h, 10.0, 10.0), Stage::Flop);
        assert_eq!(next_stage(Stage::River, &h, 10.0, 10.0), Stage::Showdown);
    }

    #[test]
    fn villain_call_advances() {
        let h = [
            e(Actor::Hero, Action::Bet, 2.0),
            e(Actor::Villain, Action::Call, 2.0),
        ];
        assert_eq!(next_stage(Stage::Flop, &h, 10.0, 10.0), Stage::Turn);
    }

    #[test]
    fn hero_call_then_check_advances() {
        let h = [
            e(Actor::Villain, Action::Bet, 2.0),
            e(Actor::Hero, Action::Call, 2.0),
            e(Actor::Villain, Action::Check, 0.0),
        ];
        assert_eq!(next_stage(Stage::Turn, &h, 10.0, 10.0), Stage::River);
    }

    #[test]
    fn hero_call_into_new_bet_stays() {
        let h = [
            e(Actor::Hero, Action::Call, 2.0),
            e(Actor::Villain, Action::Bet, 3.0),
        ];
        assert_eq!(next_stage(Stage::Turn, &h, 10.0, 10.0), Stage::Turn);
    }

    #[test]
    fn raise_keeps_street_open() {
        let h = [
            e(Actor::Hero, Action::Raise, 3.0),
            e(Actor::Villain, Action::Raise, 6.0),
        ];
        assert_eq!(next_stage(Stage::Preflop, &h, 10.0, 10.0), Stage::Preflop);
    }

    #[test]
    fn empty_stack_forces_showdown() {
        let h = [
            e(Actor::Hero, Action::Raise, 3.0),
            e(Actor::Villain, Action::Raise, 6.0),
        ];
        assert_eq!(next_stage(Stage::Preflop, &h, 0.0, 10.0), Stage::Showdown);
        assert_eq!(next_stage(Stage::Flop, &h, 10.0, 0.0), Stage::Showdown);
    }

    #[test]
    fn outstanding_bet_only_for_villain_aggression() {
        let h = [e(Actor::Hero, Action::Bet, 2.0)];
        assert_eq!(outstanding_bet(&h), None);
        let h = [e(Actor::Villain, Action::AllIn, 40.0)];
        assert_eq!(outstanding_bet(&h), Some(40.0));
        let h = [e(Actor::Villain, Action::Call, 2.0)];
        assert_eq!(outstanding_bet(&h), None);
        assert_eq!(outstanding_bet(&[]), None);
    }
}
