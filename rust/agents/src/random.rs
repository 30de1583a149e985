//! An agent with a fixed, randomly drawn table.

use blackjack_engine::policy::Policy;
use blackjack_engine::state::{BlackjackAction, BlackjackState};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::tabular::TabularPolicy;

/// Picks one action per state at construction time, then always plays it.
///
/// The table is drawn with ChaCha20 from `seed`, walking states in their
/// natural order, so the same seed always yields the same agent.
///
/// # Example
///
/// ```rust
/// use blackjack_agents::random::RandomAgent;
/// use blackjack_engine::state::all_states;
///
/// let a = RandomAgent::new(3);
/// let b = RandomAgent::new(3);
/// assert_eq!(a.policy(), b.policy());
/// assert_eq!(a.policy().len(), all_states().len());
/// ```
#[derive(Debug, Clone)]
pub struct RandomAgent {
    seed: u64,
    policy: TabularPolicy,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let policy = TabularPolicy::from_fn(format!("random:{}", seed), |_| {
            BlackjackAction::ALL[rng.random_range(0..BlackjackAction::ALL.len())]
        });
        Self { seed, policy }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn policy(&self) -> &TabularPolicy {
        &self.policy
    }
}

impl Policy for RandomAgent {
    fn choose_action(&self, state: &BlackjackState) -> BlackjackAction {
        self.policy.choose_action(state)
    }

    fn name(&self) -> &str {
        self.policy.name()
    }
}
