//! Configuration loaded from the environment

use gauge_core::DEFAULT_PRECISION;
use std::env;
use thiserror::Error;
use tracing::warn;

/// Environment variable holding the display precision
pub const PRECISION_VAR: &str = "GAUGE_PRECISION";

/// Widest precision accepted; f64 carries about 15 significant digits
pub const MAX_PRECISION: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be an integer between 0 and {max}, got '{value}'")]
    InvalidPrecision {
        var: &'static str,
        value: String,
        max: usize,
    },
}

/// Settings for a conversion session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaugeConfig {
    /// Decimal places used for results and history entries
    pub precision: usize,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self { precision: DEFAULT_PRECISION }
    }
}

impl GaugeConfig {
    /// Read settings from the process environment.
    ///
    /// Invalid values are logged and replaced with defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok()).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring invalid configuration");
            Self::default()
        })
    }

    /// Read settings through `lookup`, which maps a variable name to its value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(PRECISION_VAR) {
            config.precision = parse_precision(&raw)?;
        }
        Ok(config)
    }
}

fn parse_precision(raw: &str) -> Result<usize, ConfigError> {
    let invalid = || ConfigError::InvalidPrecision {
        var: PRECISION_VAR,
        value: raw.to_string(),
        max: MAX_PRECISION,
    };
    let precision: usize = raw.trim().parse().map_err(|_| invalid())?;
    if precision > MAX_PRECISION {
        return Err(invalid());
    }
    Ok(precision)
}
