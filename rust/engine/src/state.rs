use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Player totals a state can carry. 30 is the worst bust: hard 20 plus a ten.
pub const PLAYER_SUM_RANGE: RangeInclusive<u8> = 2..=30;

/// Values the dealer's face-up card can show. An ace shows as 1.
pub const DEALER_SHOWING_RANGE: RangeInclusive<u8> = 1..=10;

/// Number of states in [`all_states`].
pub const STATE_COUNT: usize = 29 * 2 * 10 * 2;

/// The two moves available to the player.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BlackjackAction {
    /// Take one more card
    Hit,
    /// Stop drawing and let the dealer play out
    Stick,
}

impl BlackjackAction {
    pub const ALL: [BlackjackAction; 2] = [BlackjackAction::Hit, BlackjackAction::Stick];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlackjackAction::Hit => "HIT",
            BlackjackAction::Stick => "STICK",
        }
    }
}

impl std::fmt::Display for BlackjackAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a policy is allowed to see about the current hand.
///
/// States compare field by field, so they work as keys in lookup tables.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct BlackjackState {
    /// Player's best hand total
    pub player_sum: u8,
    /// Player holds an ace counted as 11
    pub usable_ace: bool,
    /// Intrinsic value of the dealer's face-up card (ace = 1)
    pub dealer_showing: u8,
    /// The hand is over
    pub terminal: bool,
}

impl BlackjackState {
    pub const fn new(player_sum: u8, usable_ace: bool, dealer_showing: u8, terminal: bool) -> Self {
        Self {
            player_sum,
            usable_ace,
            dealer_showing,
            terminal,
        }
    }

    /// Pair this state with an action.
    pub const fn with_action(self, action: BlackjackAction) -> BlackjackStateAction {
        BlackjackStateAction {
            state: self,
            action,
        }
    }

    /// Fields lie inside the enumerated state space.
    pub fn in_domain(&self) -> bool {
        PLAYER_SUM_RANGE.contains(&self.player_sum)
            && DEALER_SHOWING_RANGE.contains(&self.dealer_showing)
    }
}

/// A state extended with the action taken in it.
/// Key type for state-action value tables.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct BlackjackStateAction {
    #[serde(flatten)]
    pub state: BlackjackState,
    pub action: BlackjackAction,
}

impl BlackjackStateAction {
    pub const fn new(state: BlackjackState, action: BlackjackAction) -> Self {
        Self { state, action }
    }

    /// The underlying state without the action.
    pub const fn state(&self) -> BlackjackState {
        self.state
    }
}

impl From<BlackjackStateAction> for BlackjackState {
    fn from(sa: BlackjackStateAction) -> Self {
        sa.state
    }
}

/// Every state in the product space
/// `player_sum x usable_ace x dealer_showing x terminal`.
///
/// Iteration follows the derived ordering, so building a table from this set
/// is deterministic.
///
/// ```
/// use blackjack_engine::state::{all_states, STATE_COUNT};
///
/// assert_eq!(all_states().len(), STATE_COUNT);
/// assert_eq!(STATE_COUNT, 1160);
/// ```
pub fn all_states() -> BTreeSet<BlackjackState> {
    let mut states = BTreeSet::new();
    for player_sum in PLAYER_SUM_RANGE {
        for usable_ace in [false, true] {
            for dealer_showing in DEALER_SHOWING_RANGE {
                for terminal in [false, true] {
                    states.insert(BlackjackState::new(
                        player_sum,
                        usable_ace,
                        dealer_showing,
                        terminal,
                    ));
                }
            }
        }
    }
    states
}
