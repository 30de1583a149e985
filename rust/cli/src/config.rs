use serde::{Deserialize, Serialize};
use std::fs;

use blackjack_agents::create_agent;
use blackjack_engine::deck::DEFAULT_DECK_SEED;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Deck seed; `None` plays with an unseeded deck
    pub seed: Option<u64>,
    pub agent: String,
    pub episodes: u64,
    /// Moving-average window for reports
    pub window: usize,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub agent: ValueSource,
    pub episodes: ValueSource,
    pub window: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            agent: ValueSource::Default,
            episodes: ValueSource::Default,
            window: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: Some(DEFAULT_DECK_SEED),
            agent: "threshold:17".into(),
            episodes: 1000,
            window: 100,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("BJACK_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if f.unseeded == Some(true) {
            cfg.seed = None;
            sources.seed = ValueSource::File;
        } else if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.agent {
            cfg.agent = v;
            sources.agent = ValueSource::File;
        }
        if let Some(v) = f.episodes {
            cfg.episodes = v;
            sources.episodes = ValueSource::File;
        }
        if let Some(v) = f.window {
            cfg.window = v;
            sources.window = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("BJACK_SEED")
        && !seed.is_empty()
    {
        cfg.seed = parse_seed(&seed).ok_or_else(|| ConfigError::Invalid("Invalid seed".into()))?;
        sources.seed = ValueSource::Env;
    }
    if let Ok(agent) = std::env::var("BJACK_AGENT")
        && !agent.is_empty()
    {
        cfg.agent = agent;
        sources.agent = ValueSource::Env;
    }
    if let Ok(n) = std::env::var("BJACK_EPISODES")
        && !n.is_empty()
    {
        cfg.episodes = n
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid episodes".into()))?;
        sources.episodes = ValueSource::Env;
    }
    if let Ok(w) = std::env::var("BJACK_WINDOW")
        && !w.is_empty()
    {
        cfg.window = w
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid window".into()))?;
        sources.window = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    unseeded: Option<bool>,
    #[serde(default)]
    agent: Option<String>,
    #[serde(default)]
    episodes: Option<u64>,
    #[serde(default)]
    window: Option<usize>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.episodes == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: episodes must be >=1".into(),
        ));
    }
    if cfg.window == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: window must be >=1".into(),
        ));
    }
    if let Err(e) = create_agent(&cfg.agent) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: {}",
            e
        )));
    }
    Ok(())
}

/// `"none"` selects an unseeded deck; anything else must be a `u64`.
fn parse_seed(s: &str) -> Option<Option<u64>> {
    match s.to_ascii_lowercase().as_str() {
        "none" | "random" | "unseeded" => Some(None),
        other => other.parse().ok().map(Some),
    }
}
