//! # blackjack-engine: Blackjack Environment Core
//!
//! A single-hand, infinite-deck Blackjack game built as a reinforcement
//! learning environment. An agent observes a compact [`state::BlackjackState`],
//! picks a [`state::BlackjackAction`] (hit or stick) and gets back the next
//! state and a reward of -1, 0 or +1.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card faces and the static 13-face table
//! - [`deck`] - Infinite card sources, seeded with ChaCha20 RNG
//! - [`hand`] - Hand evaluation with the soft/hard ace rule
//! - [`state`] - States, actions and the enumerated state space
//! - [`engine`] - Deal, player turn, dealer turn and settlement
//! - [`policy`] - The trait every agent implements
//! - [`episode`] - Playing a policy through a full hand
//! - [`render`] - Console view of the table
//! - [`logger`] - Episode records and JSONL logging
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_engine::engine::Engine;
//! use blackjack_engine::state::BlackjackAction;
//!
//! let mut engine = Engine::new(Some(42), false);
//! let (state, _) = engine.reset();
//! if !state.terminal {
//!     let (next, reward) = engine.apply_action(BlackjackAction::Stick).unwrap();
//!     assert!(next.terminal);
//!     println!("reward: {}", reward);
//! }
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Seeded engines replay the same cards:
//!
//! ```rust
//! use blackjack_engine::engine::Engine;
//!
//! let e1 = Engine::new(Some(7), false);
//! let e2 = Engine::new(Some(7), false);
//! assert_eq!(e1.player_cards(), e2.player_cards());
//! assert_eq!(e1.dealer_cards(), e2.dealer_cards());
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod episode;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod policy;
pub mod render;
pub mod state;
