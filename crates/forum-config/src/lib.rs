//! # forum-config
//!
//! Layered configuration loading for the forum client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FORUM_*` prefix, `__` as separator)
//! 2. Project-level `.forum/config.toml`
//! 3. User-level `~/.config/forum/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FORUM_API__BASE_URL` -> `api.base_url`,
//! `FORUM_COMPOSER__USER_ID` -> `composer.user_id`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use forum_config::ForumConfig;
//!
//! let config = ForumConfig::load_with_dotenv().expect("config");
//! println!("API: {}", config.api.base_url);
//! ```

mod api;
mod composer;
mod error;
mod taxonomy;

pub use api::ApiConfig;
pub use composer::ComposerConfig;
pub use error::ConfigError;
pub use taxonomy::TaxonomyConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ForumConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub composer: ComposerConfig,
    #[serde(default)]
    pub taxonomy: TaxonomyConfig,
}

impl ForumConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.api.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".forum/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("FORUM_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("forum").join("config.toml"))
    }
}
