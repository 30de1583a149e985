use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{Card, Face, FACES};

/// Seed used when an engine is built without an explicit choice.
pub const DEFAULT_DECK_SEED: u64 = 0;

/// Anything that can hand out cards to the engine.
///
/// Sources are infinite: `draw` never fails and never runs out.
pub trait CardSource {
    fn draw(&mut self) -> Card;
}

impl<S: CardSource + ?Sized> CardSource for Box<S> {
    fn draw(&mut self) -> Card {
        (**self).draw()
    }
}

/// An infinite deck: every draw samples one of the 13 faces uniformly,
/// with replacement.
///
/// # Examples
///
/// ```
/// use blackjack_engine::deck::{CardSource, Deck};
///
/// let mut a = Deck::new_with_seed(42);
/// let mut b = Deck::new_with_seed(42);
/// let xs: Vec<_> = (0..10).map(|_| a.draw()).collect();
/// let ys: Vec<_> = (0..10).map(|_| b.draw()).collect();
/// assert_eq!(xs, ys);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    rng: ChaCha20Rng,
    seed: Option<u64>,
}

impl Deck {
    /// `Some(seed)` gives a reproducible deck, `None` an unseeded one.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new_with_seed(s),
            None => Self::unseeded(),
        }
    }

    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    pub fn unseeded() -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(rand::random()),
            seed: None,
        }
    }

    /// Seed the deck was built with, `None` when unseeded.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new_with_seed(DEFAULT_DECK_SEED)
    }
}

impl CardSource for Deck {
    fn draw(&mut self) -> Card {
        let i = self.rng.random_range(0..FACES.len());
        Card::new(FACES[i])
    }
}

/// Deals a fixed sequence of faces, then keeps going from a seeded [`Deck`].
///
/// Useful to stage a specific hand (tests, replays) without losing the
/// "never runs out" guarantee of a card source.
#[derive(Debug, Clone)]
pub struct ScriptedDeck {
    script: VecDeque<Face>,
    fallback: Deck,
}

impl ScriptedDeck {
    pub fn new<I: IntoIterator<Item = Face>>(faces: I) -> Self {
        Self {
            script: faces.into_iter().collect(),
            fallback: Deck::default(),
        }
    }

    pub fn with_fallback<I: IntoIterator<Item = Face>>(faces: I, fallback: Deck) -> Self {
        Self {
            script: faces.into_iter().collect(),
            fallback,
        }
    }

    /// Append more faces to the end of the script.
    pub fn extend<I: IntoIterator<Item = Face>>(&mut self, faces: I) {
        self.script.extend(faces);
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl CardSource for ScriptedDeck {
    fn draw(&mut self) -> Card {
        match self.script.pop_front() {
            Some(face) => Card::new(face),
            None => self.fallback.draw(),
        }
    }
}
