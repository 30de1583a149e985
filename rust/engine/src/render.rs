//! Console rendering of the table.
//!
//! Rendering is a read-only view over the engine's hands; it never feeds back
//! into game state.

use std::fmt;

use crate::engine::Turn;
use crate::hand::Hand;

/// Marker printed in place of the dealer's hole card.
pub const HIDDEN_CARD: &str = "x";

/// Snapshot of both hands as the player is allowed to see them.
///
/// ```
/// use blackjack_engine::cards::{Card, Face};
/// use blackjack_engine::engine::Turn;
/// use blackjack_engine::hand::Hand;
/// use blackjack_engine::render::Table;
///
/// let player = Hand::from(vec![Card::new(Face::Ten), Card::new(Face::Nine)]);
/// let dealer = Hand::from(vec![Card::new(Face::Four), Card::new(Face::Seven)]);
///
/// let text = Table::new(Turn::Player, &player, &dealer).to_string();
/// assert_eq!(text, "Dealer: [x, 7]\nPlayer: [10, 9] = 19");
///
/// let text = Table::new(Turn::Dealer, &player, &dealer).to_string();
/// assert_eq!(text, "Dealer: [4, 7] = 11\nPlayer: [10, 9] = 19");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Table<'a> {
    turn: Turn,
    player: &'a Hand,
    dealer: &'a Hand,
}

impl<'a> Table<'a> {
    pub fn new(turn: Turn, player: &'a Hand, dealer: &'a Hand) -> Self {
        Self {
            turn,
            player,
            dealer,
        }
    }

    pub fn player_faces(&self) -> String {
        join_faces(self.player.cards().iter().map(|c| c.face.symbol()))
    }

    /// Dealer faces, with the first card hidden until the dealer's turn.
    pub fn dealer_faces(&self) -> String {
        let cards = self.dealer.cards();
        match self.turn {
            Turn::Dealer => join_faces(cards.iter().map(|c| c.face.symbol())),
            Turn::Player => join_faces(
                std::iter::once(HIDDEN_CARD).chain(cards.iter().skip(1).map(|c| c.face.symbol())),
            ),
        }
    }
}

fn join_faces<'s>(faces: impl Iterator<Item = &'s str>) -> String {
    let inner: Vec<&str> = faces.collect();
    format!("[{}]", inner.join(", "))
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.turn {
            Turn::Dealer => writeln!(f, "Dealer: {} = {}", self.dealer_faces(), self.dealer.total())?,
            Turn::Player => writeln!(f, "Dealer: {}", self.dealer_faces())?,
        }
        write!(f, "Player: {} = {}", self.player_faces(), self.player.total())
    }
}
