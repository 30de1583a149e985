//! State-space listing command.

use crate::error::CliError;
use blackjack_engine::state::all_states;
use std::io::Write;

/// Print how many states there are, or with `list` every state as a JSON
/// line in table order.
pub fn handle_states_command(list: bool, out: &mut dyn Write) -> Result<(), CliError> {
    let states = all_states();
    if !list {
        writeln!(out, "States: {}", states.len())?;
        return Ok(());
    }
    for s in &states {
        let line = serde_json::to_string(s).map_err(std::io::Error::other)?;
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
