//! # blackjack-agents: Policies for the Blackjack Environment
//!
//! Concrete decision-makers for [`blackjack_engine`]. Every agent implements
//! the engine's [`Policy`] trait, so it can be handed straight to
//! [`play_episode`](blackjack_engine::episode::play_episode).
//!
//! ## Core Components
//!
//! - [`tabular`] - One action per state, stored in an ordered table
//! - [`threshold`] - Stick at or above a fixed total
//! - [`random`] - A reproducible random table
//! - [`create_agent`] - Factory building an agent from a spec string
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_agents::create_agent;
//! use blackjack_engine::engine::Engine;
//! use blackjack_engine::episode::play_episode;
//!
//! let agent = create_agent("threshold:17").expect("known agent");
//! let mut engine = Engine::new(Some(42), false);
//! let episode = play_episode(&mut engine, &agent).expect("episode");
//! println!("{} got {}", agent.name(), episode.reward);
//! ```
//!
//! ## Agent Specs
//!
//! - `"threshold"` / `"threshold:<n>"` - stick at `n` (default 17)
//! - `"random"` / `"random:<seed>"` - random table drawn from `seed` (default 0)

pub use blackjack_engine::policy::Policy;
use thiserror::Error;

pub mod random;
pub mod tabular;
pub mod threshold;

use random::RandomAgent;
use threshold::{ThresholdAgent, DEFAULT_STICK_THRESHOLD};

/// Seed used by `"random"` without an explicit seed.
pub const DEFAULT_RANDOM_SEED: u64 = 0;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AgentError {
    #[error("Unknown agent type: {0}")]
    UnknownAgent(String),
    #[error("Invalid parameter for {agent}: {value}")]
    InvalidParameter { agent: String, value: String },
}

/// Build an agent from a spec string such as `"threshold:18"`.
///
/// # Example
///
/// ```rust
/// use blackjack_agents::{create_agent, AgentError};
///
/// assert_eq!(create_agent("threshold").unwrap().name(), "threshold:17");
/// assert_eq!(create_agent("random:9").unwrap().name(), "random:9");
/// assert!(matches!(create_agent("martingale"), Err(AgentError::UnknownAgent(_))));
/// assert!(matches!(create_agent("threshold:x"), Err(AgentError::InvalidParameter { .. })));
/// ```
pub fn create_agent(spec: &str) -> Result<Box<dyn Policy>, AgentError> {
    let spec = spec.trim();
    let (kind, param) = match spec.split_once(':') {
        Some((k, p)) => (k, Some(p)),
        None => (spec, None),
    };
    let invalid = |value: &str| AgentError::InvalidParameter {
        agent: kind.to_string(),
        value: value.to_string(),
    };

    match kind {
        "threshold" => {
            let threshold = match param {
                Some(p) => p.parse::<u8>().map_err(|_| invalid(p))?,
                None => DEFAULT_STICK_THRESHOLD,
            };
            Ok(Box::new(ThresholdAgent::new(threshold)))
        }
        "random" => {
            let seed = match param {
                Some(p) => p.parse::<u64>().map_err(|_| invalid(p))?,
                None => DEFAULT_RANDOM_SEED,
            };
            Ok(Box::new(RandomAgent::new(seed)))
        }
        _ => Err(AgentError::UnknownAgent(spec.to_string())),
    }
}
