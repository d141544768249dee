//! Report configuration.
//!
//! Loaded from a TOML file; every key is optional.
//!
//! ```toml
//! currency_symbol = "₹"
//! decimal_places = 2
//! grouping = "indian"   # or "western"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest number of decimal places an amount may be rendered with.
pub const MAX_DECIMAL_PLACES: u32 = 10;

/// Errors that can occur while loading or validating a [`ReportConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Decimal places must not exceed [`MAX_DECIMAL_PLACES`].
    #[error("decimal places must be at most {}, got {}", MAX_DECIMAL_PLACES, .0)]
    InvalidDecimalPlaces(u32),

    #[error("currency symbol must not be empty")]
    EmptyCurrencySymbol,
}

/// How the integer part of an amount is split into groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigitGrouping {
    /// Lakh/crore grouping: `12,34,567`.
    #[default]
    Indian,
    /// Thousands grouping: `1,234,567`.
    Western,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Prefix placed before every amount.
    pub currency_symbol: String,

    /// Decimal places amounts are rounded (half-up) to.
    pub decimal_places: u32,

    pub grouping: DigitGrouping,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            decimal_places: 2,
            grouping: DigitGrouping::Indian,
        }
    }
}

impl ReportConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - `decimal_places` exceeds [`MAX_DECIMAL_PLACES`]
    /// - `currency_symbol` is empty or whitespace
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(ConfigError::InvalidDecimalPlaces(self.decimal_places));
        }
        if self.currency_symbol.trim().is_empty() {
            return Err(ConfigError::EmptyCurrencySymbol);
        }
        Ok(())
    }
}
