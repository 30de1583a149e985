use serde::{Deserialize, Serialize};

/// The face printed on a Blackjack card.
/// Suits carry no meaning in Blackjack, so a card is fully defined by its face.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Face {
    /// Ace, counted as 1 (hard) unless the hand evaluator promotes it to 11
    #[serde(rename = "A")]
    Ace,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
}

impl Face {
    /// Intrinsic value of the face: Ace is 1, picture cards are 10.
    pub const fn value(self) -> u8 {
        match self {
            Face::Ace => 1,
            Face::Two => 2,
            Face::Three => 3,
            Face::Four => 4,
            Face::Five => 5,
            Face::Six => 6,
            Face::Seven => 7,
            Face::Eight => 8,
            Face::Nine => 9,
            Face::Ten | Face::Jack | Face::Queen | Face::King => 10,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Face::Ace => "A",
            Face::Two => "2",
            Face::Three => "3",
            Face::Four => "4",
            Face::Five => "5",
            Face::Six => "6",
            Face::Seven => "7",
            Face::Eight => "8",
            Face::Nine => "9",
            Face::Ten => "10",
            Face::Jack => "J",
            Face::Queen => "Q",
            Face::King => "K",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Face> {
        FACES.iter().copied().find(|f| f.symbol() == s)
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The 13 faces of a standard deck, in deck order.
/// Every draw samples uniformly from this table.
pub static FACES: [Face; 13] = [
    Face::Ace,
    Face::Two,
    Face::Three,
    Face::Four,
    Face::Five,
    Face::Six,
    Face::Seven,
    Face::Eight,
    Face::Nine,
    Face::Ten,
    Face::Jack,
    Face::Queen,
    Face::King,
];

/// A single dealt card.
/// Cards are immutable values owned by the hand that drew them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The face of the card (A, 2-10, J, Q, K)
    pub face: Face,
}

impl Card {
    pub const fn new(face: Face) -> Self {
        Self { face }
    }

    pub const fn value(&self) -> u8 {
        self.face.value()
    }

    pub const fn is_ace(&self) -> bool {
        matches!(self.face, Face::Ace)
    }
}

impl From<Face> for Card {
    fn from(face: Face) -> Self {
        Card::new(face)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.face.fmt(f)
    }
}
