use serde::{Deserialize, Serialize};

use crate::episode::Episode;

/// One JSONL line of episode history.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    /// Unique identifier for this episode (format: YYYYMMDD-NNNNNN)
    pub episode_id: String,
    /// Deck seed of the engine that played the episode, `None` if unseeded
    pub seed: Option<u64>,
    /// Name of the policy that chose the actions
    pub agent: String,
    /// The trajectory itself
    pub episode: Episode,
    /// Timestamp when the episode was recorded (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

pub fn format_episode_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends [`EpisodeRecord`]s to a JSONL file and hands out episode ids.
pub struct EpisodeLogger {
    writer: Option<BufWriter<std::fs::File>>,
    date: String,
    seq: u32,
}

impl EpisodeLogger {
    /// Open `path` for appending, creating parent directories as needed.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// A logger that only numbers episodes; `write` is a no-op.
    pub fn in_memory(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    /// Continue numbering after `seq` already-written episodes.
    pub fn starting_at(mut self, seq: u32) -> Self {
        self.seq = seq;
        self
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_episode_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &EpisodeRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
