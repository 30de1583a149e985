//! Agent evaluation command.
//!
//! Plays an agent for many episodes on one engine and reports how it fared.

use crate::error::CliError;
use crate::summary::Tally;
use blackjack_agents::create_agent;
use blackjack_engine::engine::Engine;
use blackjack_engine::episode::play_episode;
use std::io::Write;

/// Handle the eval command.
///
/// Output starts with a header line naming the agent and seed, followed by
/// the [`Tally`] report.
pub fn handle_eval_command(
    agent: &str,
    episodes: u64,
    seed: Option<u64>,
    window: usize,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if episodes == 0 {
        return Err(CliError::InvalidInput("episodes must be >= 1".to_string()));
    }
    if window == 0 {
        return Err(CliError::InvalidInput("window must be >= 1".to_string()));
    }

    let policy = create_agent(agent)?;
    let mut eng = Engine::new(seed, false);
    let mut tally = Tally::new();
    for _ in 0..episodes {
        tally.add(&play_episode(&mut eng, &policy)?);
    }

    writeln!(
        out,
        "eval: agent={} seed={}",
        policy.name(),
        seed.map_or_else(|| "none".to_string(), |s| s.to_string())
    )?;
    tally.write_report(out, window)?;
    Ok(())
}
