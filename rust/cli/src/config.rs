use serde::{Deserialize, Serialize};
use std::fs;

use tricktable_engine::cards::RANK_TWO;
use tricktable_engine::weight::WeightRules;

use crate::validation::parse_level;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Internal rank value of the trick game's level rank
    pub level: u8,
    pub seed: Option<u64>,
    pub level_cards_special: bool,
}

impl Config {
    pub fn weight_rules(&self) -> WeightRules {
        WeightRules {
            level_cards_special: self.level_cards_special,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub level: ValueSource,
    pub seed: ValueSource,
    pub level_cards_special: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            level: ValueSource::Default,
            seed: ValueSource::Default,
            level_cards_special: ValueSource::Default,
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
            level: RANK_TWO,
            seed: None,
            level_cards_special: true,
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

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Defaults, then the TOML file named by `TRICKTABLE_CONFIG`, then the
/// `TRICKTABLE_*` environment variables. Command-line flags override the
/// result in each command.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("TRICKTABLE_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.level {
            cfg.level = parse_level(&v).map_err(ConfigError::Invalid)?;
            sources.level = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.level_cards_special {
            cfg.level_cards_special = v;
            sources.level_cards_special = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("TRICKTABLE_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(level) = std::env::var("TRICKTABLE_LEVEL")
        && !level.is_empty()
    {
        cfg.level = parse_level(&level).map_err(ConfigError::Invalid)?;
        sources.level = ValueSource::Env;
    }
    if let Ok(special) = std::env::var("TRICKTABLE_LEVEL_CARDS_SPECIAL")
        && !special.is_empty()
    {
        cfg.level_cards_special = parse_bool(&special)
            .ok_or_else(|| ConfigError::Invalid("Invalid level_cards_special".into()))?;
        sources.level_cards_special = ValueSource::Env;
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    level: Option<String>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    level_cards_special: Option<bool>,
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
