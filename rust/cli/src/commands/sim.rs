//! Simulation command: many episodes on one engine, optionally recorded.
//!
//! # Environment Variables
//!
//! - `BJACK_SIM_BREAK_AFTER`: stop after N episodes and report an interruption

use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use blackjack_agents::create_agent;
use blackjack_engine::engine::Engine;
use blackjack_engine::episode::play_episode;
use blackjack_engine::logger::{EpisodeLogger, EpisodeRecord};
use std::io::Write;
use std::path::Path;

/// Handle the sim command.
///
/// # Arguments
///
/// * `episodes` - Number of episodes to play
/// * `agent` - Agent spec
/// * `seed` - Deck seed for the engine, `None` for an unseeded deck
/// * `output` - JSONL file to append one [`EpisodeRecord`] per episode to
/// * `out` - Output stream for normal messages
pub fn handle_sim_command(
    episodes: u64,
    agent: &str,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if episodes == 0 {
        return Err(CliError::InvalidInput("episodes must be >= 1".to_string()));
    }

    let policy = create_agent(agent)?;
    let mut logger = match output.as_deref() {
        Some(p) => Some(open_logger(Path::new(p))?),
        None => None,
    };

    let break_after = std::env::var("BJACK_SIM_BREAK_AFTER")
        .ok()
        .and_then(|v| v.parse::<u64>().ok());

    let mut eng = Engine::new(seed, false);
    let mut completed = 0u64;

    for _ in 0..episodes {
        let episode = play_episode(&mut eng, &policy)?;

        if let Some(logger) = logger.as_mut() {
            let record = EpisodeRecord {
                episode_id: logger.next_id(),
                seed,
                agent: policy.name().to_string(),
                episode,
                ts: None,
                meta: None,
            };
            logger.write(&record)?;
        }

        completed += 1;

        if let Some(b) = break_after
            && completed == b
        {
            writeln!(out, "Interrupted: saved {}/{}", completed, episodes)?;
            return Err(CliError::Interrupted(format!(
                "Interrupted: saved {}/{}",
                completed, episodes
            )));
        }
    }

    writeln!(out, "Simulated: {} episodes", completed)?;
    Ok(())
}

fn open_logger(path: &Path) -> Result<EpisodeLogger, CliError> {
    ensure_parent_dir(path).map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    // Continue numbering after records that are already in the file
    let existing = std::fs::read_to_string(path)
        .map(|s| s.lines().filter(|l| !l.trim().is_empty()).count())
        .unwrap_or(0);
    let logger = EpisodeLogger::create(path).map_err(|e| {
        CliError::Io(std::io::Error::other(format!(
            "Failed to open output file {}: {}",
            path.display(),
            e
        )))
    })?;
    Ok(logger.starting_at(existing as u32))
}
