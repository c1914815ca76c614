//! Batch experiment command handler.
//!
//! Runs `trials` random hands against each selected archetype and prints one
//! summary row per archetype. The seed is always printed so a run can be
//! repeated exactly; `--parallel` runs use per-archetype streams and do not
//! reproduce sequential numbers.

use crate::config;
use crate::error::CliError;
use crate::formatters::format_batch_table;
use bluffsim_ai::{Archetype, BatchExperiment};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::Write;

pub fn handle_batch_command(
    trials: Option<usize>,
    seed: Option<u64>,
    vs: &[String],
    parallel: bool,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut cfg = config::load()?;
    if let Some(t) = trials {
        cfg.trials = t;
    }
    config::validate(&cfg)?;

    let archetypes = if vs.is_empty() {
        Archetype::ALL.to_vec()
    } else {
        vs.iter()
            .map(|name| name.parse::<Archetype>())
            .collect::<Result<Vec<_>, _>>()?
    };
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let batch = BatchExperiment::new(cfg.trials, cfg.table()).with_archetypes(archetypes);
    let rows = if parallel {
        batch.run_parallel(seed)
    } else {
        batch.run(&mut ChaCha20Rng::seed_from_u64(seed))
    };

    if json {
        let json_str = serde_json::to_string_pretty(&rows).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json_str)?;
        return Ok(());
    }

    writeln!(
        out,
        "Batch: {} hands per archetype | Seed: {} | Mode: {}",
        cfg.trials,
        seed,
        if parallel { "parallel" } else { "sequential" }
    )?;
    write!(out, "{}", format_batch_table(&rows))?;
    Ok(())
}
