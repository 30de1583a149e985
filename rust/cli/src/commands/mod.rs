//! Command handlers, one module per subcommand.
//!
//! Each module exposes `handle_COMMAND_command(...) -> Result<(), CliError>`
//! taking its output streams as `&mut dyn Write`, so commands run the same
//! way from `main` and from tests.

pub mod cfg;
pub mod eval;
pub mod play;
pub mod rng;
pub mod sim;
pub mod states;
pub mod stats;

pub use cfg::handle_cfg_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
pub use rng::handle_rng_command;
pub use sim::handle_sim_command;
pub use states::handle_states_command;
pub use stats::handle_stats_command;
