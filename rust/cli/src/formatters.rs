//! Plain-text formatting of states, rewards and outcomes for the terminal.
//!
//! ```rust
//! use blackjack_engine::state::BlackjackState;
//! use blackjack_cli::formatters::{format_reward, format_state};
//!
//! let s = BlackjackState::new(17, true, 1, false);
//! assert_eq!(format_state(&s), "player 17 (soft) vs dealer A");
//! assert_eq!(format_reward(-1), "-1");
//! ```

use blackjack_engine::engine::Reward;
use blackjack_engine::episode::Outcome;
use blackjack_engine::state::BlackjackState;

/// Dealer card as it would be read out at the table: A for an ace.
pub fn format_showing(value: u8) -> String {
    match value {
        1 => "A".to_string(),
        v => v.to_string(),
    }
}

pub fn format_state(state: &BlackjackState) -> String {
    let soft = if state.usable_ace { " (soft)" } else { "" };
    format!(
        "player {}{} vs dealer {}",
        state.player_sum,
        soft,
        format_showing(state.dealer_showing)
    )
}

/// Signed reward: +1, 0 or -1.
pub fn format_reward(reward: Reward) -> String {
    if reward > 0 {
        format!("+{}", reward)
    } else {
        reward.to_string()
    }
}

pub fn format_outcome(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "win",
        Outcome::Loss => "loss",
        Outcome::Push => "push",
    }
}
