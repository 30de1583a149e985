use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Highest total that is not a bust.
pub const BLACKJACK: u8 = 21;

/// Promoting an ace adds this much on top of its hard value of 1.
const ACE_BONUS: u8 = 10;

/// Result of evaluating a hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandValue {
    /// Best total not exceeding 21 if one exists, otherwise the hard total
    pub total: u8,
    /// An ace is currently counted as 11
    pub usable_ace: bool,
}

/// Sum of the hand with every ace counted as 1.
pub fn hard_total(cards: &[Card]) -> u8 {
    cards.iter().map(Card::value).sum()
}

/// Evaluate a hand, promoting aces from 1 to 11 while that cannot bust it.
///
/// Each ace gets one chance at promotion, in hand order, and is promoted only
/// while the running total is at most 11. In practice that means at most one
/// ace is ever soft.
///
/// ```
/// use blackjack_engine::cards::{Card, Face};
/// use blackjack_engine::hand::evaluate;
///
/// let soft = evaluate(&[Card::new(Face::Ace), Card::new(Face::Six)]);
/// assert_eq!((soft.total, soft.usable_ace), (17, true));
///
/// let hard = evaluate(&[Card::new(Face::Ace), Card::new(Face::Six), Card::new(Face::Nine)]);
/// assert_eq!((hard.total, hard.usable_ace), (16, false));
/// ```
pub fn evaluate(cards: &[Card]) -> HandValue {
    let non_ace: u8 = cards.iter().filter(|c| !c.is_ace()).map(Card::value).sum();
    let aces = cards.iter().filter(|c| c.is_ace()).count() as u8;
    let hard = non_ace + aces;

    let mut total = hard;
    for _ in 0..aces {
        if total <= BLACKJACK - ACE_BONUS {
            total += ACE_BONUS;
        }
    }

    HandValue {
        total,
        usable_ace: total != hard,
    }
}

/// An ordered, append-only sequence of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(4),
        }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn value(&self) -> HandValue {
        evaluate(&self.cards)
    }

    pub fn total(&self) -> u8 {
        self.value().total
    }

    pub fn usable_ace(&self) -> bool {
        self.value().usable_ace
    }

    pub fn is_bust(&self) -> bool {
        self.total() > BLACKJACK
    }

    /// Two-card 21.
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.total() == BLACKJACK
    }

    /// The second dealt card, which is the dealer's face-up card.
    pub fn showing(&self) -> Option<Card> {
        self.cards.get(1).copied()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
