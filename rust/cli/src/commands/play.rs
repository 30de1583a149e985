//! # Play Command
//!
//! Plays hands at the terminal. The player is either a human typing actions
//! on stdin or an agent whose choices are shown as they are made. The table
//! is printed after the deal and after every action.

use crate::error::CliError;
use crate::formatters::{format_outcome, format_reward};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};
use blackjack_agents::{Policy, create_agent};
use blackjack_engine::engine::{Engine, Reward};
use blackjack_engine::episode::Outcome;
use blackjack_engine::state::BlackjackAction;
use std::io::{BufRead, Write};

/// Agent spec that hands control to stdin.
pub const HUMAN: &str = "human";

const PROMPT: &str = "Action [h]it/[s]tick/[q]uit: ";

/// Where the player's actions come from.
enum Player<'a> {
    Human(&'a mut dyn BufRead),
    Agent(Box<dyn Policy>),
}

/// Handle the play command.
///
/// # Arguments
///
/// * `agent` - Agent spec, or [`HUMAN`] to read actions from `stdin`
/// * `episodes` - Number of hands to play (must be >= 1)
/// * `seed` - Deck seed, `None` for an unseeded deck
/// * `out` - Output stream for the table and results
/// * `err` - Error stream for warnings and errors
/// * `stdin` - Input stream for human actions
pub fn handle_play_command(
    agent: &str,
    episodes: u64,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if episodes == 0 {
        return Err(CliError::InvalidInput("episodes must be >= 1".to_string()));
    }

    let mut player = if agent == HUMAN {
        Player::Human(stdin)
    } else {
        Player::Agent(create_agent(agent)?)
    };
    let name = match &player {
        Player::Human(_) => HUMAN.to_string(),
        Player::Agent(policy) => policy.name().to_string(),
    };

    writeln!(
        out,
        "play: agent={} episodes={} seed={}",
        name,
        episodes,
        seed.map_or_else(|| "none".to_string(), |s| s.to_string())
    )?;

    let mut eng = Engine::new(seed, false);
    let mut played = 0u64;
    let mut total: i64 = 0;

    'episodes: for i in 1..=episodes {
        writeln!(out, "\nEpisode {}", i)?;
        let (mut state, mut reward) = eng.reset();
        writeln!(out, "{}", eng.table())?;

        while !state.terminal {
            let action = match &mut player {
                Player::Agent(policy) => policy.choose_action(&state),
                Player::Human(input) => match prompt_action(&mut **input, out, err)? {
                    Some(a) => a,
                    None => {
                        writeln!(out, "Quit requested")?;
                        break 'episodes;
                    }
                },
            };
            writeln!(out, "> {}", action)?;
            (state, reward) = eng.apply_action(action)?;
            writeln!(out, "{}", eng.table())?;
        }

        write_result(out, reward)?;
        played += 1;
        total += i64::from(reward);
    }

    writeln!(out, "\nSession: episodes={} total reward={}", played, total)?;
    Ok(())
}

/// Ask until the answer parses. `None` means quit or end of input.
fn prompt_action(
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Option<BlackjackAction>, CliError> {
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;
        let Some(line) = read_stdin_line(input) else {
            return Ok(None);
        };
        match parse_player_action(&line) {
            ParseResult::Action(a) => return Ok(Some(a)),
            ParseResult::Quit => return Ok(None),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }
}

fn write_result(out: &mut dyn Write, reward: Reward) -> Result<(), CliError> {
    writeln!(
        out,
        "Result: {} ({})",
        format_outcome(Outcome::from_reward(reward)),
        format_reward(reward)
    )?;
    Ok(())
}
