use bluffsim_engine::game::TableConfig;
use bluffsim_engine::player::Position;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_stack: f64,
    pub villain_stack: f64,
    pub position: Position,
    pub seed: Option<u64>,
    pub trials: usize,
}

impl Config {
    pub fn table(&self) -> TableConfig {
        TableConfig {
            hero_stack: self.starting_stack,
            villain_stack: self.villain_stack,
            position: self.position,
        }
    }
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
    pub starting_stack: ValueSource,
    pub villain_stack: ValueSource,
    pub position: ValueSource,
    pub seed: ValueSource,
    pub trials: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            villain_stack: ValueSource::Default,
            position: ValueSource::Default,
            seed: ValueSource::Default,
            trials: ValueSource::Default,
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
            starting_stack: 100.0,
            villain_stack: 100.0,
            position: Position::Button,
            seed: None,
            trials: 500,
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

/// Resolve defaults, the config file and env vars. Values are not validated
/// here; callers merge their command-line flags first and then call
/// [`validate`].
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("BLUFFSIM_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.villain_stack {
            cfg.villain_stack = v;
            sources.villain_stack = ValueSource::File;
        }
        if let Some(v) = f.position {
            cfg.position = parse_position(&v)?;
            sources.position = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.trials {
            cfg.trials = v;
            sources.trials = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("BLUFFSIM_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(stack) = std::env::var("BLUFFSIM_STACK")
        && !stack.is_empty()
    {
        cfg.starting_stack = stack
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid stack".into()))?;
        sources.starting_stack = ValueSource::Env;
    }
    if let Ok(stack) = std::env::var("BLUFFSIM_VILLAIN_STACK")
        && !stack.is_empty()
    {
        cfg.villain_stack = stack
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid villain stack".into()))?;
        sources.villain_stack = ValueSource::Env;
    }
    if let Ok(pos) = std::env::var("BLUFFSIM_POSITION")
        && !pos.is_empty()
    {
        cfg.position = parse_position(&pos)?;
        sources.position = ValueSource::Env;
    }
    if let Ok(trials) = std::env::var("BLUFFSIM_TRIALS")
        && !trials.is_empty()
    {
        cfg.trials = trials
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid trials".into()))?;
        sources.trials = ValueSource::Env;
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_stack: Option<f64>,
    #[serde(default)]
    villain_stack: Option<f64>,
    #[serde(default)]
    position: Option<String>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    trials: Option<usize>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    for (name, stack) in [
        ("starting_stack", cfg.starting_stack),
        ("villain_stack", cfg.villain_stack),
    ] {
        if !stack.is_finite() || stack <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "Invalid configuration: {} must be >0",
                name
            )));
        }
    }
    if cfg.trials == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: trials must be >=1".into(),
        ));
    }
    Ok(())
}

fn parse_position(s: &str) -> Result<Position, ConfigError> {
    s.parse()
        .map_err(|_| ConfigError::Invalid(format!("Invalid position: {}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = Config::default();
        assert!(validate(&cfg).is_ok());
        assert_eq!(cfg.table(), TableConfig::default());
    }

    #[test]
    fn rejects_non_positive_stacks_and_zero_trials() {
        let cfg = Config {
            starting_stack: 0.0,
            ..Config::default()
        };
        assert!(validate(&cfg).is_err());
        let cfg = Config {
            villain_stack: f64::NAN,
            ..Config::default()
        };
        assert!(validate(&cfg).is_err());
        let cfg = Config {
            trials: 0,
            ..Config::default()
        };
        assert!(validate(&cfg).is_err());
    }

    #[test]
    fn file_config_fields_are_optional() {
        let f: FileConfig = toml::from_str("seed = 7\nposition = \"sb\"\n").unwrap();
        assert_eq!(f.seed, Some(7));
        assert_eq!(f.position.as_deref(), Some("sb"));
        assert!(f.starting_stack.is_none() && f.trials.is_none());
    }
}
