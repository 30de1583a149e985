use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cards::Card;
use crate::deck::{CardSource, Deck, DEFAULT_DECK_SEED};
use crate::errors::GameError;
use crate::hand::{Hand, BLACKJACK};
use crate::render::Table;
use crate::state::{BlackjackAction, BlackjackState};

/// Scalar reward handed back with every transition: -1, 0 or +1.
pub type Reward = i32;

/// The dealer hits below this total and stands on it or above.
pub const DEALER_STANDS_ON: u8 = 17;

/// Whose cards are being played.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Turn {
    Player,
    Dealer,
}

/// Plays one hand of Blackjack at a time against a fixed-policy dealer.
///
/// Construction deals the first hand. After that, [`apply_action`] advances
/// the hand until it is over and [`reset`] deals the next one.
///
/// # Examples
///
/// ```
/// use blackjack_engine::engine::Engine;
/// use blackjack_engine::state::BlackjackAction;
///
/// let mut engine = Engine::new(Some(12345), false);
/// let (mut state, mut reward) = engine.reset();
/// while !state.terminal {
///     let action = if state.player_sum >= 17 {
///         BlackjackAction::Stick
///     } else {
///         BlackjackAction::Hit
///     };
///     (state, reward) = engine.apply_action(action).expect("hand in play");
/// }
/// assert!((-1..=1).contains(&reward));
/// assert!(engine.apply_action(BlackjackAction::Hit).is_err());
/// ```
///
/// [`apply_action`]: Engine::apply_action
/// [`reset`]: Engine::reset
#[derive(Debug, Clone)]
pub struct Engine<S: CardSource = Deck> {
    /// Where cards come from
    source: S,
    /// Print the table after every deal and draw
    verbose: bool,
    turn: Turn,
    player: Hand,
    dealer: Hand,
    /// False once the hand is settled; only `reset` sets it again
    in_play: bool,
}

impl Engine<Deck> {
    /// `Some(seed)` makes every hand reproducible, `None` uses an unseeded deck.
    pub fn new(deck_seed: Option<u64>, verbose: bool) -> Self {
        Self::with_source(Deck::new(deck_seed), verbose)
    }
}

impl Default for Engine<Deck> {
    fn default() -> Self {
        Self::new(Some(DEFAULT_DECK_SEED), false)
    }
}

impl<S: CardSource> Engine<S> {
    /// Build an engine around any card source and deal the first hand.
    pub fn with_source(source: S, verbose: bool) -> Self {
        let mut engine = Self {
            source,
            verbose,
            turn: Turn::Player,
            player: Hand::new(),
            dealer: Hand::new(),
            in_play: false,
        };
        engine.reset();
        engine
    }

    /// Throw away the current hand and deal a new one.
    ///
    /// A natural ends the hand on the spot with a reward of +1.
    pub fn reset(&mut self) -> (BlackjackState, Reward) {
        self.turn = Turn::Player;
        self.player = Hand::new();
        self.dealer = Hand::new();
        self.deal_hands();
        self.in_play = true;
        if self.player.total() == BLACKJACK {
            self.in_play = false;
            debug!(player = %self.table().player_faces(), "natural");
            return (self.state(), 1);
        }
        (self.state(), 0)
    }

    /// Apply the player's action to the hand in play.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidOperation`] when the hand is already over.
    pub fn apply_action(
        &mut self,
        action: BlackjackAction,
    ) -> Result<(BlackjackState, Reward), GameError> {
        if !self.in_play {
            warn!(%action, "action rejected: hand is over");
            return Err(GameError::InvalidOperation);
        }

        let reward = match action {
            BlackjackAction::Stick => self.play_dealer(),
            BlackjackAction::Hit => {
                let card = self.source.draw();
                self.player.push(card);
                debug!(%card, total = self.player.total(), "player draws");
                self.render();
                if self.player.is_bust() {
                    self.in_play = false;
                    debug!(total = self.player.total(), "player busts");
                    -1
                } else {
                    0
                }
            }
        };
        Ok((self.state(), reward))
    }

    /// Dealer draws to 17, then the hand is settled.
    fn play_dealer(&mut self) -> Reward {
        self.turn = Turn::Dealer;
        while self.dealer.total() < DEALER_STANDS_ON {
            let card = self.source.draw();
            self.dealer.push(card);
            debug!(%card, total = self.dealer.total(), "dealer draws");
            self.render();
        }
        self.in_play = false;

        let dealer_sum = self.dealer.total();
        let player_sum = self.player.total();
        let reward = if dealer_sum > BLACKJACK {
            1
        } else if dealer_sum > player_sum {
            -1
        } else if dealer_sum < player_sum {
            1
        } else {
            0
        };
        debug!(dealer_sum, player_sum, reward, "hand settled");
        reward
    }

    /// Player gets two cards, then the dealer gets two. The order matters for
    /// seeded reproducibility.
    fn deal_hands(&mut self) {
        for _ in 0..2 {
            let card = self.source.draw();
            self.player.push(card);
        }
        for _ in 0..2 {
            let card = self.source.draw();
            self.dealer.push(card);
        }
        debug!(
            player = %self.table().player_faces(),
            dealer_showing = self.dealer_showing(),
            "dealt"
        );
        self.render();
    }

    fn render(&self) {
        if self.verbose {
            println!("\n{}", self.table());
        }
    }

    /// What a policy sees right now.
    pub fn state(&self) -> BlackjackState {
        BlackjackState::new(
            self.player_sum(),
            self.usable_ace(),
            self.dealer_showing(),
            !self.in_play,
        )
    }

    pub fn player_sum(&self) -> u8 {
        self.player.total()
    }

    pub fn dealer_sum(&self) -> u8 {
        self.dealer.total()
    }

    pub fn usable_ace(&self) -> bool {
        self.player.usable_ace()
    }

    /// Face value of the dealer's second card. An ace shows as 1.
    pub fn dealer_showing(&self) -> u8 {
        self.dealer.showing().map_or(0, |c| c.value())
    }

    pub fn in_play(&self) -> bool {
        self.in_play
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player
    }

    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    pub fn player_cards(&self) -> &[Card] {
        self.player.cards()
    }

    pub fn dealer_cards(&self) -> &[Card] {
        self.dealer.cards()
    }

    /// Printable view of the table, hiding the dealer's hole card on the
    /// player's turn.
    pub fn table(&self) -> Table<'_> {
        Table::new(self.turn, &self.player, &self.dealer)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
