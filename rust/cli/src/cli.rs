//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "bjack",
    version,
    about = "Blackjack reinforcement-learning environment"
)]
pub struct BjackCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Deck seeding shared by the commands that deal cards.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct SeedArgs {
    /// Deck seed; overrides BJACK_SEED and the config file
    #[arg(long, conflicts_with = "unseeded")]
    pub seed: Option<u64>,
    /// Deal from an unseeded deck
    #[arg(long)]
    pub unseeded: bool,
}

impl SeedArgs {
    /// Flags win over the configured seed.
    pub fn resolve(&self, configured: Option<u64>) -> Option<u64> {
        if self.unseeded {
            None
        } else {
            self.seed.or(configured)
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play hands at the terminal, yourself or by watching an agent
    Play {
        /// Agent spec (threshold[:N], random[:SEED]) or "human"
        #[arg(long)]
        agent: Option<String>,
        #[arg(long, default_value_t = 1)]
        episodes: u64,
        #[command(flatten)]
        seed: SeedArgs,
    },
    /// Run many episodes and record them as JSONL
    Sim {
        #[arg(long)]
        episodes: Option<u64>,
        #[arg(long)]
        agent: Option<String>,
        #[command(flatten)]
        seed: SeedArgs,
        /// JSONL file to append episode records to
        #[arg(long)]
        output: Option<String>,
    },
    /// Measure an agent over many episodes
    Eval {
        #[arg(long)]
        agent: Option<String>,
        #[arg(long)]
        episodes: Option<u64>,
        #[command(flatten)]
        seed: SeedArgs,
        /// Moving-average window
        #[arg(long)]
        window: Option<usize>,
    },
    /// Summarize a JSONL episode log
    Stats {
        #[arg(long)]
        input: String,
        #[arg(long)]
        window: Option<usize>,
    },
    /// Print the size of the state space, or every state
    States {
        #[arg(long)]
        list: bool,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
    /// Draw sample cards from a deck
    Rng {
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Play { .. } => "play",
            Commands::Sim { .. } => "sim",
            Commands::Eval { .. } => "eval",
            Commands::Stats { .. } => "stats",
            Commands::States { .. } => "states",
            Commands::Cfg => "cfg",
            Commands::Rng { .. } => "rng",
        }
    }
}
