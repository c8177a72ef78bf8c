//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `RANKING_CONSENSUS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use ranking_consensus::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Log filter: {}", config.logging.level);
//! ```

mod analysis;
mod error;
mod logging;
mod parsing;

pub use analysis::AnalysisConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use parsing::ParsingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment is a valid configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Ranking text parsing options
    #[serde(default)]
    pub parsing: ParsingConfig,

    /// Aggregation pipeline options
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `RANKING_CONSENSUS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `RANKING_CONSENSUS__LOGGING__LEVEL=warn` -> `logging.level = "warn"`
    /// - `RANKING_CONSENSUS__PARSING__TOLERATE_TRAILING_SEPARATORS=false`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("RANKING_CONSENSUS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        Ok(())
    }
}
