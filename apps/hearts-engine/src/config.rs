//! Engine configuration.
//!
//! Values come from defaults, optionally overridden from the environment:
//!
//! - `HEARTS_LOSING_TOTAL`: score at which the game ends (default 100)
//! - `HEARTS_MAX_REJECTIONS`: rejected intents tolerated per request before
//!   the game flow gives up on a collaborator (default 64)
//! - `HEARTS_SEED`: game seed for reproducible shuffles (default: unseeded)

use std::env;

use thiserror::Error;

use crate::domain::rules::DEFAULT_LOSING_TOTAL;

pub const DEFAULT_MAX_REJECTIONS: u32 = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
    #[error("{var} must be greater than zero")]
    Zero { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// The game ends once any seat's cumulative score reaches this total.
    pub losing_total: u16,
    /// Rejections tolerated for a single pass/play request.
    pub max_rejections_per_request: u32,
    /// Base seed for per-deal shuffles; `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            losing_total: DEFAULT_LOSING_TOTAL,
            max_rejections_per_request: DEFAULT_MAX_REJECTIONS,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Build a config from defaults overlaid with `HEARTS_*` environment variables.
    ///
    /// Unset or empty variables keep their default; malformed ones are an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = non_empty(lookup("HEARTS_LOSING_TOTAL")) {
            let losing_total = parse_var::<u16>("HEARTS_LOSING_TOTAL", &raw, "u16")?;
            if losing_total == 0 {
                return Err(ConfigError::Zero {
                    var: "HEARTS_LOSING_TOTAL",
                });
            }
            config.losing_total = losing_total;
        }

        if let Some(raw) = non_empty(lookup("HEARTS_MAX_REJECTIONS")) {
            config.max_rejections_per_request =
                parse_var::<u32>("HEARTS_MAX_REJECTIONS", &raw, "u32")?;
        }

        if let Some(raw) = non_empty(lookup("HEARTS_SEED")) {
            config.seed = Some(parse_var::<u64>("HEARTS_SEED", &raw, "u64")?);
        }

        Ok(config)
    }

    pub fn with_losing_total(mut self, losing_total: u16) -> Self {
        self.losing_total = losing_total;
        self
    }

    pub fn with_max_rejections(mut self, max_rejections: u32) -> Self {
        self.max_rejections_per_request = max_rejections;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_var<T: std::str::FromStr>(
    var: &'static str,
    raw: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    raw.parse::<T>().map_err(|_| ConfigError::Invalid {
        var,
        expected,
        value: raw.to_string(),
    })
}
