//! Parsing of interactive player input.

use blackjack_engine::state::BlackjackAction;

/// What a line typed at the `play` prompt means.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Action(BlackjackAction),
    /// User entered q or quit
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse a prompt answer, case-insensitively.
///
/// ```rust
/// # use blackjack_cli::validation::{parse_player_action, ParseResult};
/// use blackjack_engine::state::BlackjackAction;
///
/// assert_eq!(parse_player_action("H"), ParseResult::Action(BlackjackAction::Hit));
/// assert_eq!(parse_player_action("stick"), ParseResult::Action(BlackjackAction::Stick));
/// assert_eq!(parse_player_action("quit"), ParseResult::Quit);
/// assert!(matches!(parse_player_action("double"), ParseResult::Invalid(_)));
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "" => ParseResult::Invalid("Empty input".to_string()),
        "h" | "hit" => ParseResult::Action(BlackjackAction::Hit),
        "s" | "stick" | "stand" => ParseResult::Action(BlackjackAction::Stick),
        "q" | "quit" => ParseResult::Quit,
        other => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Enter h(it), s(tick) or q(uit)",
            other
        )),
    }
}
