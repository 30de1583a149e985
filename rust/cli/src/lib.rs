//! # Blackjack CLI Library
//!
//! Command-line front end for the Blackjack environment: play hands at the
//! terminal, simulate and record episodes, evaluate agents and summarize
//! episode logs.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Available Subcommands
//!
//! - `play`: Play hands as a human or watch an agent play
//! - `sim`: Run many episodes and record them as JSONL
//! - `eval`: Report how an agent does over many episodes
//! - `stats`: Aggregate statistics from a JSONL episode log
//! - `states`: Print the state space
//! - `cfg`: Display the resolved configuration
//! - `rng`: Draw sample cards from a seeded deck

use clap::Parser;
use std::io::Write;
#[macro_use]
mod macros;
pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod summary;
pub mod ui;
pub mod validation;

use cli::{BjackCli, Commands};
use commands::{
    handle_cfg_command, handle_eval_command, handle_play_command, handle_rng_command,
    handle_sim_command, handle_states_command, handle_stats_command,
};

pub use error::CliError;

/// Every subcommand name, in the order shown in usage output.
pub const COMMANDS: &[&str] = &["play", "sim", "eval", "stats", "states", "cfg", "rng"];

/// Parse `args` and run the chosen subcommand.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["bjack", "rng", "--seed", "42"];
/// let code = blackjack_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match BjackCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout with a zero exit
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: bjack <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: bjack --help");
            return exit_code::ERROR;
        }
    };

    tracing::debug!(command = cli.cmd.name(), "dispatch");
    match dispatch(cli.cmd, out, err) {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn dispatch(cmd: Commands, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    if let Commands::Cfg = cmd {
        return handle_cfg_command(out);
    }
    let cfg = config::load()?;

    match cmd {
        Commands::Play {
            agent,
            episodes,
            seed,
        } => {
            // Use stdin for real input (supports both TTY and piped stdin)
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            let agent = agent.unwrap_or(cfg.agent);
            handle_play_command(
                &agent,
                episodes,
                seed.resolve(cfg.seed),
                out,
                err,
                &mut stdin_lock,
            )
        }
        Commands::Sim {
            episodes,
            agent,
            seed,
            output,
        } => handle_sim_command(
            episodes.unwrap_or(cfg.episodes),
            &agent.unwrap_or(cfg.agent),
            seed.resolve(cfg.seed),
            output,
            out,
        ),
        Commands::Eval {
            agent,
            episodes,
            seed,
            window,
        } => handle_eval_command(
            &agent.unwrap_or(cfg.agent),
            episodes.unwrap_or(cfg.episodes),
            seed.resolve(cfg.seed),
            window.unwrap_or(cfg.window),
            out,
        ),
        Commands::Stats { input, window } => {
            handle_stats_command(&input, window.unwrap_or(cfg.window), out, err)
        }
        Commands::States { list } => handle_states_command(list, out),
        Commands::Rng { seed } => handle_rng_command(seed, out),
        Commands::Cfg => handle_cfg_command(out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(args, &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn command_list_matches_clap() {
        use clap::CommandFactory;
        let names: Vec<String> = BjackCli::command()
            .get_subcommands()
            .map(|c| c.get_name().to_string())
            .collect();
        assert_eq!(names, COMMANDS);
    }

    #[test]
    fn unknown_command_prints_usage() {
        let (code, _, err) = run_args(&["bjack", "split"]);
        assert_eq!(code, exit_code::ERROR);
        assert!(err.contains("Usage: bjack <command>"));
        assert!(err.contains("  states"));
    }

    #[test]
    fn help_goes_to_stdout() {
        let (code, out, _) = run_args(&["bjack", "--help"]);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(out.contains("sim"));
    }

    #[test]
    fn rng_dispatches() {
        let (code, out, _) = run_args(&["bjack", "rng", "--seed", "3"]);
        assert_eq!(code, 0);
        assert!(out.contains("RNG sample: ["));
    }
}
