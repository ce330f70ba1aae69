use serde::{Deserialize, Serialize};

use crate::params::Params;

/// Environment variable naming a TOML file that overrides the defaults
pub const CONFIG_ENV: &str = "AIRHOCKEY_CONFIG";

/// Fallback location checked when the environment variable is unset
pub const CONFIG_PATH: &str = "config/airhockey.toml";

#[derive(Debug)]
pub enum ConfigError {
    Parse(String),
    Invalid(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "config parse error: {e}"),
            Self::Invalid(field) => write!(f, "config value out of range: {field}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Width of the goal mouth on both end lines.
    pub goal_width: f32,
    /// Mallet radius when no sprite size is available.
    pub mallet_radius: f32,
    /// Puck radius when no sprite size is available.
    pub puck_radius: f32,
    /// Per-frame multiplier on puck velocity.
    pub puck_damping: f32,
    /// Fraction of normal speed kept after a wall bounce.
    pub wall_restitution: f32,
    /// Sound effect played on every hit.
    pub hit_sound: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            goal_width: Params::GOAL_WIDTH,
            mallet_radius: Params::MALLET_RADIUS,
            puck_radius: Params::PUCK_RADIUS,
            puck_damping: Params::PUCK_DAMPING,
            wall_restitution: Params::WALL_RESTITUTION,
            hit_sound: Params::HIT_SOUND.to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from environment or TOML file, falling back to defaults.
    pub fn load() -> Self {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| CONFIG_PATH.to_string());
        Self::load_from(&path)
    }

    /// Read one TOML file; a missing or invalid file yields the defaults.
    pub fn load_from(path: &str) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => {
                tracing::debug!(path = %path, "No config file, using defaults");
                return Self::default();
            }
        };
        match Self::from_toml_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "Ignoring invalid config file");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(v: f32) -> bool {
            v.is_finite() && v > 0.0
        }

        if !positive(self.goal_width) {
            return Err(ConfigError::Invalid("goal_width"));
        }
        if !positive(self.mallet_radius) {
            return Err(ConfigError::Invalid("mallet_radius"));
        }
        if !positive(self.puck_radius) {
            return Err(ConfigError::Invalid("puck_radius"));
        }
        if !(positive(self.puck_damping) && self.puck_damping <= 1.0) {
            return Err(ConfigError::Invalid("puck_damping"));
        }
        if !(self.wall_restitution.is_finite() && (0.0..=1.0).contains(&self.wall_restitution)) {
            return Err(ConfigError::Invalid("wall_restitution"));
        }
        Ok(())
    }
}
