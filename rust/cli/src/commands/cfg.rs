//! Configuration command handler.
//!
//! Displays the resolved configuration with the source of every value
//! (default, file named by `BLUFFSIM_CONFIG`, or environment).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "starting_stack": {
//!     "value": 100.0,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    config::validate(&config)?;
    let display = serde_json::json!({
        "starting_stack": {
            "value": config.starting_stack,
            "source": sources.starting_stack,
        },
        "villain_stack": {
            "value": config.villain_stack,
            "source": sources.villain_stack,
        },
        "position": {
            "value": config.position.as_str(),
            "source": sources.position,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "trials": {
            "value": config.trials,
            "source": sources.trials,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
