use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::rules::{DEFAULT_BASE_SCORE, DEFAULT_TARGET_ROUNDS};
use crate::error::AppError;

pub const DEFAULT_TURN_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_RECONNECT_GRACE: Duration = Duration::from_secs(120);

/// Per-table parameters consumed when the match starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub target_rounds: u32,
    pub base_score: u32,
    pub turn_timeout: Duration,
    pub reconnect_grace: Duration,
    /// Match seed; `None` draws one from OS entropy when the table is created.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            target_rounds: DEFAULT_TARGET_ROUNDS,
            base_score: DEFAULT_BASE_SCORE,
            turn_timeout: DEFAULT_TURN_TIMEOUT,
            reconnect_grace: DEFAULT_RECONNECT_GRACE,
            seed: None,
        }
    }
}

impl TableConfig {
    /// Build from `BIGTWO_*` environment variables, defaulting anything unset.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            target_rounds: parse_var(&lookup, "BIGTWO_TARGET_ROUNDS")?
                .unwrap_or(defaults.target_rounds),
            base_score: parse_var(&lookup, "BIGTWO_BASE_SCORE")?.unwrap_or(defaults.base_score),
            turn_timeout: parse_var(&lookup, "BIGTWO_TURN_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.turn_timeout),
            reconnect_grace: parse_var(&lookup, "BIGTWO_RECONNECT_GRACE_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.reconnect_grace),
            seed: parse_var(&lookup, "BIGTWO_SEED")?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.target_rounds == 0 {
            return Err(AppError::config("target_rounds must be at least 1"));
        }
        if self.base_score == 0 {
            return Err(AppError::config("base_score must be at least 1"));
        }
        if self.turn_timeout < Duration::from_secs(1) {
            return Err(AppError::config("turn_timeout must be at least 1 second"));
        }
        if self.reconnect_grace < Duration::from_secs(1) {
            return Err(AppError::config("reconnect_grace must be at least 1 second"));
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

fn parse_var<F, T>(lookup: &F, name: &str) -> Result<Option<T>, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
            AppError::config(format!(
                "Environment variable '{name}' has an invalid value: '{raw}'"
            ))
        }),
    }
}
