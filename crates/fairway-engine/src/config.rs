use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use fairway_stroke::{DotsConfig, PointsConfig, StrokePlayConfig};

#[cfg(feature = "match-formats")]
use fairway_match::{MatchPlayConfig, NassauConfig, SkinsConfig};
#[cfg(feature = "snake")]
use fairway_snake::SnakeConfig;
#[cfg(feature = "team-formats")]
use fairway_teams::{SixesConfig, VegasConfig, WolfConfig};

/// Config file read when `FAIRWAY_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config/fairway.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Options for every compiled-in format, one TOML table per format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub stroke_play: StrokePlayConfig,
    pub points: PointsConfig,
    pub dots: DotsConfig,
    #[cfg(feature = "match-formats")]
    pub match_play: MatchPlayConfig,
    #[cfg(feature = "match-formats")]
    pub nassau: NassauConfig,
    #[cfg(feature = "match-formats")]
    pub skins: SkinsConfig,
    #[cfg(feature = "team-formats")]
    pub wolf: WolfConfig,
    #[cfg(feature = "team-formats")]
    pub vegas: VegasConfig,
    #[cfg(feature = "team-formats")]
    pub sixes: SixesConfig,
    #[cfg(feature = "snake")]
    pub snake: SnakeConfig,
}

impl EngineConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Load config from `FAIRWAY_CONFIG` or `config/fairway.toml`, falling
    /// back to defaults, then apply env var overrides.
    pub fn load() -> Self {
        let mut config = Self::load_file().unwrap_or_default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    fn load_file() -> Option<Self> {
        if let Ok(path) = std::env::var("FAIRWAY_CONFIG")
            && !path.is_empty()
        {
            match Self::from_path(Path::new(&path)) {
                Ok(config) => {
                    tracing::info!(path = %path, "Loaded engine configuration");
                    return Some(config);
                },
                Err(e) => tracing::warn!(path = %path, error = %e, "Ignoring FAIRWAY_CONFIG"),
            }
        }
        match Self::from_path(Path::new(DEFAULT_CONFIG_PATH)) {
            Ok(config) => {
                tracing::info!(path = DEFAULT_CONFIG_PATH, "Loaded engine configuration");
                Some(config)
            },
            Err(ConfigError::Read { .. }) => {
                tracing::debug!("No {DEFAULT_CONFIG_PATH} found, using defaults");
                None
            },
            Err(e) => {
                tracing::warn!("Failed to parse {DEFAULT_CONFIG_PATH}: {e}, using defaults");
                None
            },
        }
    }

    /// Apply `FAIRWAY_*` overrides read through `lookup`. Unparseable values
    /// are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("FAIRWAY_NET_SCORING")
            && let Ok(net) = val.parse::<bool>()
        {
            self.set_net(net);
        }
        #[cfg(feature = "match-formats")]
        if let Some(val) = lookup("FAIRWAY_SKIN_VALUE")
            && let Ok(n) = val.parse::<u32>()
        {
            self.skins.skin_value = n;
        }
        #[cfg(feature = "snake")]
        if let Some(val) = lookup("FAIRWAY_SNAKE_PENALTY")
            && let Ok(n) = val.parse::<u32>()
        {
            self.snake.penalty_amount = n;
        }
    }

    /// Switch every format with a gross/net option.
    pub fn set_net(&mut self, net: bool) {
        self.stroke_play.net = net;
        self.points.net = net;
        #[cfg(feature = "match-formats")]
        {
            self.match_play.net = net;
            self.nassau.net = net;
            self.skins.net = net;
        }
        #[cfg(feature = "team-formats")]
        {
            self.wolf.net = net;
            self.vegas.net = net;
            self.sixes.net = net;
        }
    }
}
