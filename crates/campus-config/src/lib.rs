//! # campus-config
//!
//! Layered configuration loading for Campus Hub using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CAMPUS_*` prefix, `__` as separator)
//! 2. Project-level `.campus/config.toml`
//! 3. User-level `~/.config/campus-hub/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CAMPUS_GENERATION__API_KEY` -> `generation.api_key`,
//! `CAMPUS_GENERAL__DEFAULT_ROLE` -> `general.default_role`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use campus_config::CampusConfig;
//!
//! let config = CampusConfig::load_with_dotenv().expect("config");
//!
//! if config.generation.is_configured() {
//!     println!("Model: {}", config.generation.model);
//! }
//! ```

mod error;
mod general;
mod generation;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use generation::GenerationConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Env var prefix for every setting.
pub const ENV_PREFIX: &str = "CAMPUS_";

/// Project config, relative to the working directory.
pub const PROJECT_CONFIG: &str = ".campus/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CampusConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl CampusConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Read the nearest `.env` above the working directory, then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        match std::env::current_dir() {
            Ok(cwd) => {
                load_dotenv_from(&cwd);
            }
            Err(err) => debug!(error = %err, "no working directory, skipping .env"),
        }
        Self::load()
    }

    /// Defaults, then each file from [`Self::config_files`], then `CAMPUS_*`
    /// env vars. Later layers win.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let defaults = Figment::from(Serialized::defaults(Self::default()));
        Self::config_files()
            .into_iter()
            .fold(defaults, |figment, file| figment.merge(Toml::file(file)))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// TOML files that exist right now, lowest priority first.
    #[must_use]
    pub fn config_files() -> Vec<PathBuf> {
        [Self::global_config_path(), Some(PathBuf::from(PROJECT_CONFIG))]
            .into_iter()
            .flatten()
            .filter(|file| file.is_file())
            .collect()
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("campus-hub").join("config.toml"))
    }
}

/// Load the nearest `.env` in `start` or one of its ancestors.
///
/// Variables already present in the environment are kept. Returns the file
/// that was applied; an unreadable or malformed file is logged and yields
/// `None`.
pub fn load_dotenv_from(start: &Path) -> Option<PathBuf> {
    let file = start
        .ancestors()
        .map(|dir| dir.join(".env"))
        .find(|candidate| candidate.is_file())?;
    match dotenvy::from_path(&file) {
        Ok(()) => {
            debug!(path = %file.display(), "loaded .env");
            Some(file)
        }
        Err(err) => {
            debug!(path = %file.display(), error = %err, "skipping malformed .env");
            None
        }
    }
}
