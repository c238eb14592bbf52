//! Configuration management.

use serde::Deserialize;
use tracing::debug;

use crate::types::{CurrencyConfig, RoundingMode};

/// Coinage configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoinageConfig {
    /// Rounding mode used when a caller does not pick one.
    #[serde(default)]
    pub default_rounding: RoundingMode,
    /// Extra currencies, overriding built-in ones with the same code.
    #[serde(default)]
    pub currencies: Vec<CurrencyConfig>,
}

impl CoinageConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `COINAGE__*` environment variables. Every source is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if a source exists but cannot be parsed.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        Self::load_from("config", &run_mode)
    }

    /// Loads configuration from `{dir}/default` and `{dir}/{run_mode}`.
    ///
    /// # Errors
    ///
    /// Returns an error if a source exists but cannot be parsed.
    pub fn load_from(dir: &str, run_mode: &str) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("COINAGE").separator("__"))
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        debug!(
            run_mode,
            default_rounding = %loaded.default_rounding,
            currencies = loaded.currencies.len(),
            "Configuration loaded"
        );
        Ok(loaded)
    }
}
