//! Hand records and the JSONL writer that persists them.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use crate::game::Stage;
use crate::player::{Action, Actor};

/// One node of the per-hand action graph.
///
/// `pot` and `stack` are the values right after this move was applied; `stack`
/// belongs to the acting player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionLogEntry {
    pub actor: Actor,
    pub stage: Stage,
    pub action: Action,
    pub size: f64,
    pub pot: f64,
    pub stack: f64,
}

/// Outcome of one simulated hand, as handed to reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandResult {
    /// Side that took the pot
    pub winner: Actor,
    /// Final hero stack minus the stack at hand start
    pub net_profit: f64,
    /// Sum of the EV of every hero decision
    pub total_ev: f64,
    /// Number of hero decisions taken
    pub decision_count: usize,
    /// `total_ev / decision_count`, or 0 without decisions
    pub average_ev: f64,
    /// Stage the hand was resolved from
    pub final_stage: Stage,
    /// True when a decision step failed and the hand was cut short
    #[serde(default)]
    pub aborted: bool,
}

/// Complete record of a simulated hand, one JSON object per line on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Unique identifier for this hand (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    /// RNG seed the hand was played with
    pub seed: Option<u64>,
    /// Opponent archetype name
    pub opponent: String,
    /// Hero seat
    pub position: String,
    /// Hole card tokens as supplied
    pub hole_cards: Vec<String>,
    /// Pre-dealt board
    pub board: Vec<String>,
    /// Ordered decision log of both players
    pub decisions: Vec<DecisionLogEntry>,
    pub result: Option<HandResult>,
    /// Timestamp when the hand was played (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends [`HandRecord`]s to a JSONL file.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    /// Open `path` for appending, creating parent directories as needed.
    ///
    /// Ids continue after the highest sequence already logged for today, so
    /// repeated appends to one file never reuse a `hand_id`.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let date = Utc::now().format("%Y%m%d").to_string();
        let seq = last_seq(path, &date)?;
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date,
            seq,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

/// Highest sequence number logged under `date` in an existing JSONL file.
/// Missing files and lines without a readable `hand_id` count as 0.
fn last_seq(path: &Path, date: &str) -> std::io::Result<u32> {
    let f = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e),
    };
    let prefix = format!("{}-", date);
    let mut max = 0;
    for line in BufReader::new(f).lines() {
        let line = line?;
        let Ok(value) = serde_json::from_str::<serde_json::Value>(&line) else {
            continue;
        };
        let seq = value
            .get("hand_id")
            .and_then(|id| id.as_str())
            .and_then(|id| id.strip_prefix(&prefix))
            .and_then(|n| n.parse::<u32>().ok());
        if let Some(n) = seq {
            max = max.max(n);
        }
    }
    Ok(max)
}
