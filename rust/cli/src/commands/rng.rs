//! Deck sampling command.
//!
//! Draws a few cards from a [`Deck`] so seeded determinism can be checked
//! from the shell: the same seed always prints the same sample.

use crate::error::CliError;
use blackjack_engine::cards::Card;
use blackjack_engine::deck::{CardSource, Deck};
use std::io::Write;

/// Cards drawn per sample.
pub const SAMPLE_SIZE: usize = 10;

/// Handle the rng command. Without a seed a fresh one is drawn and printed.
pub fn handle_rng_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let s = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(s);
    let cards: Vec<String> = (0..SAMPLE_SIZE)
        .map(|_| deck.draw())
        .map(|c: Card| c.to_string())
        .collect();
    writeln!(out, "seed: {}", s)?;
    writeln!(out, "RNG sample: [{}]", cards.join(", "))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(seed: Option<u64>) -> String {
        let mut out = Vec::new();
        handle_rng_command(seed, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn same_seed_same_sample() {
        assert_eq!(sample(Some(42)), sample(Some(42)));
    }

    #[test]
    fn sample_has_the_expected_size() {
        let out = sample(Some(1));
        assert!(out.starts_with("seed: 1\n"));
        let line = out.lines().nth(1).unwrap();
        assert_eq!(line.matches(", ").count(), SAMPLE_SIZE - 1);
    }

    #[test]
    fn unseeded_sample_prints_its_seed() {
        assert!(sample(None).starts_with("seed: "));
    }
}
