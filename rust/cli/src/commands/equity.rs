//! Equity command handler: the heuristic estimate for two hole cards.

use crate::commands::parse_stage;
use crate::error::CliError;
use crate::formatters::format_hole_cards;
use bluffsim_engine::cards::HoleCards;
use bluffsim_engine::equity::estimate_equity;
use std::io::Write;

pub fn handle_equity_command(
    cards: &str,
    stage: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hole = HoleCards::parse(cards)?;
    let stage = parse_stage(stage)?;
    let equity = estimate_equity(&hole, stage);
    writeln!(
        out,
        "Equity {} at {}: {:.4}",
        format_hole_cards(&hole),
        stage,
        equity
    )?;
    Ok(())
}
