//! The "basic" agent: stick once the hand is good enough.

use blackjack_engine::policy::Policy;
use blackjack_engine::state::{BlackjackAction, BlackjackState};

use crate::tabular::TabularPolicy;

/// Threshold used when none is given.
pub const DEFAULT_STICK_THRESHOLD: u8 = 17;

/// Sticks when the player's total reaches `stick_threshold`, hits otherwise.
///
/// The decision is precomputed into a [`TabularPolicy`], so the agent
/// answers every state by lookup.
///
/// # Example
///
/// ```rust
/// use blackjack_agents::threshold::ThresholdAgent;
/// use blackjack_engine::policy::Policy;
/// use blackjack_engine::state::{BlackjackAction, BlackjackState};
///
/// let agent = ThresholdAgent::new(18);
/// assert_eq!(agent.name(), "threshold:18");
/// let s = BlackjackState::new(17, false, 10, false);
/// assert_eq!(agent.choose_action(&s), BlackjackAction::Hit);
/// ```
#[derive(Debug, Clone)]
pub struct ThresholdAgent {
    stick_threshold: u8,
    policy: TabularPolicy,
}

impl ThresholdAgent {
    pub fn new(stick_threshold: u8) -> Self {
        let policy = TabularPolicy::from_fn(format!("threshold:{}", stick_threshold), |s| {
            if s.player_sum >= stick_threshold {
                BlackjackAction::Stick
            } else {
                BlackjackAction::Hit
            }
        });
        Self {
            stick_threshold,
            policy,
        }
    }

    pub fn stick_threshold(&self) -> u8 {
        self.stick_threshold
    }

    pub fn policy(&self) -> &TabularPolicy {
        &self.policy
    }
}

impl Default for ThresholdAgent {
    fn default() -> Self {
        Self::new(DEFAULT_STICK_THRESHOLD)
    }
}

impl Policy for ThresholdAgent {
    fn choose_action(&self, state: &BlackjackState) -> BlackjackAction {
        self.policy.choose_action(state)
    }

    fn name(&self) -> &str {
        self.policy.name()
    }
}
