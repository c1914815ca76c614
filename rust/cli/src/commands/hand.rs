//! Single hand command handler.
//!
//! Plays one hand against a chosen archetype, prints the decision log and the
//! result tuple, and optionally appends the hand record to a JSONL file.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_board, format_decision_log, format_hole_cards, format_result};
use crate::ui;
use bluffsim_ai::{HandSimulator, create_opponent};
use bluffsim_engine::cards::{Card, HoleCards, parse_board};
use bluffsim_engine::game::GameState;
use bluffsim_engine::logger::{HandLogger, HandRecord};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::Write;

/// Flags of the `hand` command. `None` falls back to the configuration.
#[derive(Debug, Clone, Default)]
pub struct HandArgs {
    pub vs: String,
    pub cards: String,
    pub board: Option<String>,
    pub position: Option<String>,
    pub stack: Option<f64>,
    pub villain_stack: Option<f64>,
    pub seed: Option<u64>,
    pub output: Option<String>,
}

pub fn handle_hand_command(
    args: HandArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut cfg = config::load()?;
    if let Some(p) = args.position.as_deref() {
        cfg.position = p.parse()?;
    }
    if let Some(s) = args.stack {
        cfg.starting_stack = s;
    }
    if let Some(s) = args.villain_stack {
        cfg.villain_stack = s;
    }
    if let Some(s) = args.seed {
        cfg.seed = Some(s);
    }
    config::validate(&cfg)?;

    let opponent = create_opponent(&args.vs)?;
    let hole = HoleCards::parse(&args.cards)?;
    for token in hole.tokens() {
        if Card::parse(token).is_err() {
            ui::display_warning(
                err,
                &format!("{:?} is not a card, using neutral strength", token),
            )?;
        }
    }
    let board = parse_board(args.board.as_deref().unwrap_or(""))?;
    let seed = cfg.seed.unwrap_or_else(rand::random);

    let state = GameState::start_hand(&cfg.table(), hole.clone(), board.clone())?;
    writeln!(
        out,
        "Opponent: {} | Position: {} | Seed: {}",
        opponent.name(),
        cfg.position,
        seed
    )?;
    writeln!(
        out,
        "Hole cards: {} | Board: {}",
        format_hole_cards(&hole),
        format_board(&board)
    )?;
    writeln!(
        out,
        "Start: {} | Pot: {:.2} BB | Hero stack: {:.2} | Villain stack: {:.2}",
        state.stage(),
        state.pot(),
        state.hero_stack(),
        state.villain_stack()
    )?;

    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut sim = HandSimulator::new(opponent, state);
    let result = sim.play(&mut rng);
    let state = sim.into_state();

    for line in format_decision_log(state.decision_log()) {
        writeln!(out, "  {}", line)?;
    }
    writeln!(
        out,
        "Resolved at {} | Pot: {:.2} BB",
        result.final_stage,
        state.pot()
    )?;
    writeln!(out, "{}", format_result(&result))?;
    if result.aborted {
        ui::display_warning(err, "hand stopped early after a failed decision step")?;
    }

    if let Some(path) = args.output {
        let mut logger = HandLogger::create(&path)?;
        let record = HandRecord {
            hand_id: logger.next_id(),
            seed: Some(seed),
            opponent: opponent.name().to_string(),
            position: cfg.position.to_string(),
            hole_cards: hole.tokens().to_vec(),
            board: board.iter().map(|c| c.to_string()).collect(),
            decisions: state.decision_log().to_vec(),
            result: Some(result),
            ts: None,
        };
        logger.write(&record)?;
        writeln!(out, "Saved {} to {}", record.hand_id, path)?;
    }
    Ok(())
}
