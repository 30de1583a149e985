//! Playing whole episodes of a policy against the engine.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::cards::Card;
use crate::deck::CardSource;
use crate::engine::{Engine, Reward, Turn};
use crate::errors::GameError;
use crate::hand::{evaluate, BLACKJACK};
use crate::policy::Policy;
use crate::state::{BlackjackAction, BlackjackState};

/// One transition: the state the action was taken in, the action, and what
/// came back.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub state: BlackjackState,
    pub action: BlackjackAction,
    pub reward: Reward,
    pub next_state: BlackjackState,
}

/// How a finished hand went for the player.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
    Push,
}

impl Outcome {
    pub fn from_reward(reward: Reward) -> Self {
        match reward {
            r if r > 0 => Outcome::Win,
            r if r < 0 => Outcome::Loss,
            _ => Outcome::Push,
        }
    }
}

/// Full trajectory of one hand, from the deal to a terminal state.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// State returned by the deal
    pub initial_state: BlackjackState,
    /// Reward returned by the deal (+1 on a natural)
    pub initial_reward: Reward,
    /// Transitions in the order they were played
    pub steps: Vec<Step>,
    /// Terminal state
    pub final_state: BlackjackState,
    /// Reward of the last transition
    pub reward: Reward,
    pub player_cards: Vec<Card>,
    pub dealer_cards: Vec<Card>,
    /// The dealer played out its hand (the player stuck)
    #[serde(default)]
    pub dealer_played: bool,
}

impl Episode {
    pub fn outcome(&self) -> Outcome {
        Outcome::from_reward(self.reward)
    }

    /// Hand ended on the deal.
    pub fn is_natural(&self) -> bool {
        self.steps.is_empty() && self.initial_state.terminal && self.initial_reward > 0
    }

    pub fn player_bust(&self) -> bool {
        evaluate(&self.player_cards).total > BLACKJACK
    }

    pub fn dealer_bust(&self) -> bool {
        self.dealer_played && evaluate(&self.dealer_cards).total > BLACKJACK
    }
}

/// Deal a fresh hand and let `policy` play it to the end.
///
/// Never calls [`Engine::apply_action`] on a finished hand, so the only error
/// is one surfaced by the engine itself.
pub fn play_episode<S, P>(engine: &mut Engine<S>, policy: &P) -> Result<Episode, GameError>
where
    S: CardSource,
    P: Policy + ?Sized,
{
    let (initial_state, initial_reward) = engine.reset();
    let mut state = initial_state;
    let mut reward = initial_reward;
    let mut steps = Vec::new();

    while !state.terminal {
        let action = policy.choose_action(&state);
        let (next_state, r) = engine.apply_action(action)?;
        trace!(policy = policy.name(), ?state, %action, reward = r, "step");
        steps.push(Step {
            state,
            action,
            reward: r,
            next_state,
        });
        state = next_state;
        reward = r;
    }

    Ok(Episode {
        initial_state,
        initial_reward,
        steps,
        final_state: state,
        reward,
        player_cards: engine.player_cards().to_vec(),
        dealer_cards: engine.dealer_cards().to_vec(),
        dealer_played: engine.turn() == Turn::Dealer,
    })
}
