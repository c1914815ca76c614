//! Text formatters for hand transcripts, results and batch tables.
//!
//! Pure functions only; command handlers decide where the text goes.
//!
//! ## Unicode vs ASCII Fallback
//!
//! Suits print as ♥ ♦ ♣ ♠ where the terminal is assumed to cope, and as
//! h d c s otherwise (older Windows consoles).
//!
//! ## Example
//!
//! ```rust
//! use bluffsim_engine::cards::{Card, Rank, Suit};
//! use bluffsim_cli::formatters::{format_board, format_card};
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_board(&[ace_spades]).starts_with("[A"));
//! ```

use bluffsim_ai::ArchetypeSummary;
use bluffsim_engine::cards::{Card, HoleCards, Suit};
use bluffsim_engine::logger::{DecisionLogEntry, HandResult};
use bluffsim_engine::player::Action;

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// String like "A♠" (Unicode) or "As" (ASCII).
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.to_char(), format_suit(card.suit))
}

/// Board in bracket notation, "[]" when empty.
pub fn format_board(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// Hole cards in bracket notation. Tokens that are not valid cards are
/// shown as given.
pub fn format_hole_cards(hole: &HoleCards) -> String {
    let formatted: Vec<String> = hole
        .tokens()
        .iter()
        .map(|t| Card::parse(t).map_or_else(|_| t.clone(), |c| format_card(&c)))
        .collect();
    format!("[{}]", formatted.join(" "))
}

/// "check", "fold", or the action followed by its size: "raise 3.00".
pub fn format_action(action: Action, size: f64) -> String {
    let name = action.as_str().to_ascii_lowercase().replace('_', "-");
    if action.is_wager() {
        format!("{} {:.2}", name, size)
    } else {
        name
    }
}

/// One line per decision log entry.
pub fn format_decision_log(entries: &[DecisionLogEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| {
            format!(
                "{:<8} {:<7} {:<14} pot {:>7.2}  stack {:>7.2}",
                e.stage.as_str(),
                e.actor.to_string(),
                format_action(e.action, e.size),
                e.pot,
                e.stack
            )
        })
        .collect()
}

/// The per-hand tuple: winner, net profit, total EV, decisions, average EV.
pub fn format_result(result: &HandResult) -> String {
    let mut line = format!(
        "Winner: {} | Net profit: {:+.2} BB | Total EV: {:.2} BB | Decisions: {} | Avg EV: {:.2} BB",
        result.winner,
        result.net_profit,
        result.total_ev,
        result.decision_count,
        result.average_ev
    );
    if result.aborted {
        line.push_str(" | aborted");
    }
    line
}

/// One row per archetype, with a header.
pub fn format_batch_table(rows: &[ArchetypeSummary]) -> String {
    let mut s = format!(
        "{:<18} {:>7} {:>7} {:>11} {:>12} {:>9} {:>10}\n",
        "Archetype", "Trials", "Aborted", "Mean EV", "EV/Decision", "Win rate", "Net profit"
    );
    for r in rows {
        s.push_str(&format!(
            "{:<18} {:>7} {:>7} {:>11.3} {:>12.3} {:>8.1}% {:>+10.2}\n",
            r.archetype.as_str(),
            r.trials,
            r.aborted,
            r.mean_total_ev,
            r.mean_ev_per_decision,
            r.hero_win_rate * 100.0,
            r.mean_net_profit
        ));
    }
    s
}
