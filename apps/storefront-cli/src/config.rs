//! # Store Configuration
//!
//! Display settings for the console shop.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                            │
//! │     STOREFRONT_STORE_NAME="Corner Shop"                                 │
//! │     STOREFRONT_CURRENCY_SYMBOL="$"                                      │
//! │                                                                         │
//! │  2. TOML Config File                                                    │
//! │     --config <path>  or  STOREFRONT_CONFIG=<path>                       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [store]
//! name = "Virtual Store"
//!
//! [currency]
//! symbol = "S/ "
//!
//! [logging]
//! filter = "warn,storefront=info"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use storefront_core::Money;
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// Environment variable overriding the store name.
pub const ENV_STORE_NAME: &str = "STOREFRONT_STORE_NAME";

/// Environment variable overriding the currency symbol.
pub const ENV_CURRENCY_SYMBOL: &str = "STOREFRONT_CURRENCY_SYMBOL";

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSection {
    /// Shown in the menu banner and on receipts.
    #[serde(default = "default_store_name")]
    pub name: String,
}

fn default_store_name() -> String {
    "Virtual Store".to_string()
}

impl Default for StoreSection {
    fn default() -> Self {
        StoreSection {
            name: default_store_name(),
        }
    }
}

/// Amounts are always stored and shown with two minor digits; only the
/// symbol is configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CurrencySettings {
    /// Printed directly before every amount.
    #[serde(default = "default_currency_symbol")]
    pub symbol: String,
}

fn default_currency_symbol() -> String {
    "S/ ".to_string()
}

impl Default for CurrencySettings {
    fn default() -> Self {
        CurrencySettings {
            symbol: default_currency_symbol(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "warn,storefront=info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// Store Configuration
// =============================================================================

/// Complete console configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub store: StoreSection,

    #[serde(default)]
    pub currency: CurrencySettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl StoreConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file, if a path is given
    /// 3. Environment variables
    ///
    /// The result is validated before it is returned.
    pub fn load(config_path: Option<&Path>) -> CliResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => {
                debug!("No config file given, using defaults");
                Self::default()
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file. Missing sections fall back to defaults.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        info!(path = %path.display(), "Loading store config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| CliError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies overrides from a variable lookup (the process environment in
    /// [`StoreConfig::load`]).
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(name) = lookup(ENV_STORE_NAME) {
            debug!(store_name = %name, "Overriding store name from environment");
            self.store.name = name;
        }

        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            debug!(symbol = %symbol, "Overriding currency symbol from environment");
            self.currency.symbol = symbol;
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CliResult<()> {
        if self.store.name.trim().is_empty() {
            return Err(CliError::InvalidConfig("store name must not be empty".into()));
        }

        Ok(())
    }

    /// Formats an amount with the configured symbol, e.g. `S/ 149.90`.
    ///
    /// ```rust
    /// use storefront_cli::config::StoreConfig;
    /// use storefront_core::Money;
    ///
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_money(Money::from_cents(14990)), "S/ 149.90");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.is_negative() { "-" } else { "" },
            self.currency.symbol,
            amount.major().abs(),
            amount.minor()
        )
    }
}
