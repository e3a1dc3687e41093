//! # CLI Error Type
//!
//! Failures outside the core: configuration, seed files and the console.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       CLI Error Categories                              │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐  │
//! │  │  Configuration  │  │   Seed catalog  │  │     Runtime             │  │
//! │  │                 │  │                 │  │                         │  │
//! │  │  InvalidConfig  │  │  InvalidSeed    │  │  Core (CoreError)       │  │
//! │  │  ConfigParse    │  │  InvalidCatalog │  │  Io (console)           │  │
//! │  │  ReadFile       │  │  ReadFile       │  │                         │  │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Core errors raised by a menu action are shown to the user and the loop
//! continues; only startup and console failures end the program.

use std::io;
use std::path::PathBuf;

use storefront_core::{CoreError, ValidationError};
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// A loaded value failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The TOML config file could not be parsed.
    #[error("Failed to parse config: {0}")]
    ConfigParse(String),

    /// A config or catalog file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // =========================================================================
    // Seed Errors
    // =========================================================================
    /// The catalog JSON is malformed.
    #[error("Invalid catalog file: {0}")]
    InvalidSeed(String),

    /// A seeded product or the catalog as a whole is invalid.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(#[from] ValidationError),

    // =========================================================================
    // Runtime Errors
    // =========================================================================
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Reading from or writing to the console failed.
    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::ConfigParse(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::InvalidSeed(err.to_string())
    }
}
