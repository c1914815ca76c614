//! Command-line surface of the `bluffsim` binary.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "bluffsim",
    version,
    about = "Heads-up bluff EV model and hand simulator"
)]
pub struct BluffsimCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one hand against an archetype and print the transcript
    Hand {
        /// Villain archetype (tight-passive, loose-aggressive, scaredy-cat)
        #[arg(long)]
        vs: String,
        /// Hero hole cards, e.g. "7♦ 2♣" or "7d,2c"
        #[arg(long)]
        cards: String,
        /// Pre-dealt board of 3, 4 or 5 cards
        #[arg(long)]
        board: Option<String>,
        /// Hero seat: BTN, CO, SB or BB
        #[arg(long)]
        position: Option<String>,
        /// Hero starting stack in big blinds
        #[arg(long)]
        stack: Option<f64>,
        /// Villain starting stack in big blinds
        #[arg(long)]
        villain_stack: Option<f64>,
        #[arg(long)]
        seed: Option<u64>,
        /// Append the hand record to this JSONL file
        #[arg(long)]
        output: Option<String>,
    },
    /// Run many random hands per archetype and print one summary row each
    Batch {
        /// Hands per archetype
        #[arg(long)]
        trials: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        /// Restrict to these archetypes (repeatable)
        #[arg(long)]
        vs: Vec<String>,
        /// One worker thread per archetype
        #[arg(long)]
        parallel: bool,
        /// Print the summaries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the heuristic equity of two hole cards
    Equity {
        #[arg(long)]
        cards: String,
        #[arg(long)]
        stage: Option<String>,
    },
    /// Print the EV of one hero action against an archetype
    Ev {
        #[arg(long)]
        vs: String,
        /// FOLD, CHECK, CALL, BET, RAISE or ALL_IN
        #[arg(long)]
        action: String,
        /// Wager size; defaults to the bluff size for the stage
        #[arg(long)]
        size: Option<f64>,
        /// Pot before the action; defaults to the stage's starting pot
        #[arg(long)]
        pot: Option<f64>,
        #[arg(long)]
        stage: Option<String>,
        /// Hole cards, needed for a river call
        #[arg(long)]
        cards: Option<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_subcommand() {
        let commands = vec![
            vec!["bluffsim", "cfg"],
            vec!["bluffsim", "hand", "--vs", "sc", "--cards", "7♦ 2♣"],
            vec!["bluffsim", "batch"],
            vec!["bluffsim", "batch", "--vs", "tp", "--vs", "la", "--parallel"],
            vec!["bluffsim", "equity", "--cards", "A♠ K♠", "--stage", "flop"],
            vec!["bluffsim", "ev", "--vs", "la", "--action", "raise"],
        ];
        for args in commands {
            let result = BluffsimCli::try_parse_from(&args);
            assert!(result.is_ok(), "Failed to parse: {:?}", args);
        }
    }

    #[test]
    fn repeated_vs_collects() {
        let cli = BluffsimCli::try_parse_from(["bluffsim", "batch", "--vs", "tp", "--vs", "sc"])
            .unwrap();
        match cli.cmd {
            Commands::Batch { vs, parallel, .. } => {
                assert_eq!(vs, vec!["tp", "sc"]);
                assert!(!parallel);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn hand_requires_cards() {
        assert!(BluffsimCli::try_parse_from(["bluffsim", "hand", "--vs", "sc"]).is_err());
    }
}
