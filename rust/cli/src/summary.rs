//! Aggregate results over many episodes.

use std::io::Write;

use blackjack_engine::engine::Reward;
use blackjack_engine::episode::{Episode, Outcome};

use crate::ui::percent;

/// Trailing mean over every full window of `period` values.
///
/// The result has `values.len() - period + 1` entries, or none when there
/// are fewer values than `period` (or `period` is zero).
///
/// ```rust
/// # use blackjack_cli::summary::simple_moving_average;
/// assert_eq!(simple_moving_average(&[1.0, 2.0, 3.0, 4.0], 2), vec![1.5, 2.5, 3.5]);
/// assert!(simple_moving_average(&[1.0], 2).is_empty());
/// ```
pub fn simple_moving_average(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }
    let mut sum: f64 = values[..period].iter().sum();
    let mut out = Vec::with_capacity(values.len() - period + 1);
    out.push(sum / period as f64);
    for i in period..values.len() {
        sum += values[i] - values[i - period];
        out.push(sum / period as f64);
    }
    out
}

/// Running totals of finished episodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally {
    pub episodes: u64,
    pub wins: u64,
    pub losses: u64,
    pub pushes: u64,
    pub naturals: u64,
    pub player_busts: u64,
    pub dealer_busts: u64,
    pub total_reward: i64,
    rewards: Vec<Reward>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, episode: &Episode) {
        self.episodes += 1;
        match episode.outcome() {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Push => self.pushes += 1,
        }
        if episode.is_natural() {
            self.naturals += 1;
        }
        if episode.player_bust() {
            self.player_busts += 1;
        }
        if episode.dealer_bust() {
            self.dealer_busts += 1;
        }
        self.total_reward += i64::from(episode.reward);
        self.rewards.push(episode.reward);
    }

    /// Final rewards in the order episodes were added.
    pub fn rewards(&self) -> &[Reward] {
        &self.rewards
    }

    pub fn mean_reward(&self) -> f64 {
        if self.episodes == 0 {
            return 0.0;
        }
        self.total_reward as f64 / self.episodes as f64
    }

    pub fn moving_average(&self, window: usize) -> Vec<f64> {
        let values: Vec<f64> = self.rewards.iter().map(|&r| f64::from(r)).collect();
        simple_moving_average(&values, window)
    }

    pub fn write_report(&self, out: &mut dyn Write, window: usize) -> std::io::Result<()> {
        let n = self.episodes;
        writeln!(out, "Episodes: {}", n)?;
        writeln!(out, "Wins: {} ({})", self.wins, percent(self.wins, n))?;
        writeln!(out, "Losses: {} ({})", self.losses, percent(self.losses, n))?;
        writeln!(out, "Pushes: {} ({})", self.pushes, percent(self.pushes, n))?;
        writeln!(out, "Naturals: {}", self.naturals)?;
        writeln!(out, "Player busts: {}", self.player_busts)?;
        writeln!(out, "Dealer busts: {}", self.dealer_busts)?;
        writeln!(out, "Mean reward: {:.4}", self.mean_reward())?;
        match self.moving_average(window).last() {
            Some(sma) => writeln!(out, "Moving average ({}): {:.4}", window, sma)?,
            None => writeln!(out, "Moving average ({}): n/a", window)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack_engine::cards::{Card, Face};
    use blackjack_engine::state::BlackjackState;

    fn episode(reward: Reward, player: &[Face], dealer: &[Face], dealer_played: bool) -> Episode {
        let state = BlackjackState::new(20, false, 10, true);
        Episode {
            initial_state: BlackjackState::new(20, false, 10, false),
            initial_reward: 0,
            steps: Vec::new(),
            final_state: state,
            reward,
            player_cards: player.iter().copied().map(Card::new).collect(),
            dealer_cards: dealer.iter().copied().map(Card::new).collect(),
            dealer_played,
        }
    }

    #[test]
    fn moving_average_matches_window_means() {
        let v = [1.0, -1.0, 0.0, 1.0, 1.0];
        assert_eq!(simple_moving_average(&v, 1), v.to_vec());
        assert_eq!(simple_moving_average(&v, 5), vec![0.4]);
        let sma = simple_moving_average(&v, 3);
        assert_eq!(sma.len(), 3);
        assert!((sma[0] - 0.0).abs() < 1e-12);
        assert!((sma[2] - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn moving_average_of_zero_period_is_empty() {
        assert!(simple_moving_average(&[1.0, 2.0], 0).is_empty());
    }

    #[test]
    fn tally_counts_outcomes_and_busts() {
        let mut t = Tally::new();
        t.add(&episode(1, &[Face::Ten, Face::Queen], &[Face::Ten, Face::Six, Face::King], true));
        t.add(&episode(-1, &[Face::Ten, Face::Six, Face::Nine], &[Face::Ten, Face::Seven], false));
        t.add(&episode(0, &[Face::Ten, Face::Queen], &[Face::Ten, Face::King], true));

        assert_eq!(t.episodes, 3);
        assert_eq!((t.wins, t.losses, t.pushes), (1, 1, 1));
        assert_eq!(t.player_busts, 1);
        assert_eq!(t.dealer_busts, 1);
        assert_eq!(t.naturals, 0);
        assert_eq!(t.total_reward, 0);
        assert_eq!(t.rewards(), &[1, -1, 0]);
    }

    #[test]
    fn report_shows_na_for_short_runs() {
        let mut t = Tally::new();
        t.add(&episode(1, &[Face::Ten, Face::Queen], &[Face::Ten, Face::Seven], true));
        let mut buf = Vec::new();
        t.write_report(&mut buf, 100).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert!(s.contains("Episodes: 1\n"));
        assert!(s.contains("Wins: 1 (100.0%)"));
        assert!(s.contains("Mean reward: 1.0000"));
        assert!(s.contains("Moving average (100): n/a"));
    }
}
