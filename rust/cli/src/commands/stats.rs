//! Statistics over a JSONL episode log written by `sim`.

use crate::error::CliError;
use crate::io_utils::read_text;
use crate::summary::Tally;
use crate::ui;
use blackjack_engine::logger::EpisodeRecord;
use std::io::Write;

/// Handle the stats command.
///
/// Lines that do not parse as an [`EpisodeRecord`] are counted and reported.
/// A final line without a trailing newline that fails to parse is treated as
/// an interrupted write and only warned about. A file with no valid records
/// but some bad ones is an error.
pub fn handle_stats_command(
    input: &str,
    window: usize,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = match read_text(input) {
        Ok(s) => s,
        Err(e) => return Err(CliError::InvalidInput(format!("Failed to read {}", e))),
    };

    let mut tally = Tally::new();
    let mut corrupted = 0u64;
    let mut incomplete = 0u64;

    let has_trailing_nl = content.ends_with('\n');
    let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    for (i, line) in lines.iter().enumerate() {
        match serde_json::from_str::<EpisodeRecord>(line) {
            Ok(rec) => tally.add(&rec.episode),
            Err(_) if i == lines.len() - 1 && !has_trailing_nl => incomplete += 1,
            Err(_) => corrupted += 1,
        }
    }

    if corrupted > 0 {
        ui::write_error(err, &format!("Skipped {} corrupted record(s)", corrupted))?;
    }
    if incomplete > 0 {
        ui::display_warning(
            err,
            &format!("Discarded {} incomplete final line(s)", incomplete),
        )?;
    }
    if tally.episodes == 0 && (corrupted > 0 || incomplete > 0) {
        return Err(CliError::InvalidInput("Invalid record".to_string()));
    }

    tally.write_report(out, window)?;
    Ok(())
}
