//! Configuration command handler.
//!
//! Prints the resolved configuration with the source of every value.
//!
//! # Example Output
//!
//! ```json
//! {
//!   "seed": {
//!     "value": 0,
//!     "source": "default"
//!   },
//!   "agent": {
//!     "value": "threshold:17",
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()?;

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "agent": {
            "value": config.agent,
            "source": sources.agent,
        },
        "episodes": {
            "value": config.episodes,
            "source": sources.episodes,
        },
        "window": {
            "value": config.window,
            "source": sources.window,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
