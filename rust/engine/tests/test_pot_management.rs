use bluffsim_engine::cards::HoleCards;
use bluffsim_engine::game::{GameState, TableConfig};
use bluffsim_engine::player::{Action, Actor};

fn contributions(gs: &GameState) -> f64 {
    gs.history().iter().map(|e| e.amount).sum()
}

#[test]
fn pot_is_starting_pot_plus_history() {
    let mut gs =
        GameState::start_hand(&TableConfig::default(), HoleCards::new("A♠", "K♥"), vec![])
            .unwrap();
    let moves = [
        (Actor::Hero, Action::Raise, 3.0),
        (Actor::Villain, Action::Raise, 6.0),
        (Actor::Hero, Action::Call, 6.0),
        (Actor::Villain, Action::Bet, 6.75),
        (Actor::Hero, Action::Raise, 13.5),
        (Actor::Villain, Action::Call, 13.5),
    ];
    for (actor, action, amount) in moves {
        let pot_before = gs.pot();
        let stack_before = gs.stack(actor);
        let moved = gs.record(actor, action, amount).unwrap();
        assert!(moved >= 0.0 && moved <= stack_before);
        assert_eq!(gs.pot(), pot_before + moved);
        assert!((gs.pot() - (1.5 + contributions(&gs))).abs() < 1e-9);
    }
}

#[test]
fn heads_up_pot_after_call() {
    let mut gs =
        GameState::start_hand(&TableConfig::default(), HoleCards::new("T♠", "9♥"), vec![])
            .unwrap();
    gs.record(Actor::Hero, Action::Raise, 3.0).unwrap();
    gs.record(Actor::Villain, Action::Call, 3.0).unwrap();
    assert_eq!(gs.pot(), 7.5);
    assert_eq!(gs.hero_stack(), 97.0);
    assert_eq!(gs.villain_stack(), 97.0);
}

#[test]
fn stacks_never_go_negative() {
    let table = TableConfig {
        hero_stack: 10.0,
        villain_stack: 10.0,
        ..TableConfig::default()
    };
    let mut gs = GameState::start_hand(&table, HoleCards::new("T♠", "9♥"), vec![]).unwrap();
    gs.record(Actor::Hero, Action::Raise, 8.0).unwrap();
    gs.record(Actor::Villain, Action::Raise, 16.0).unwrap();
    assert_eq!(gs.hero_stack(), 2.0);
    assert_eq!(gs.villain_stack(), 0.0);
    assert_eq!(gs.pot(), 1.5 + 8.0 + 10.0);
}
