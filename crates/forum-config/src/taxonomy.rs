//! Taxonomy source configuration.

use std::path::Path;

use forum_core::taxonomy::Taxonomy;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TaxonomyConfig {
    /// TOML taxonomy file. Empty means the embedded default.
    #[serde(default)]
    pub path: String,
}

impl TaxonomyConfig {
    /// Load the configured taxonomy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Taxonomy`] if the file cannot be read or parsed.
    pub fn load(&self) -> Result<Taxonomy, ConfigError> {
        let taxonomy = if self.path.is_empty() {
            Taxonomy::embedded()?
        } else {
            Taxonomy::load(Path::new(&self.path))?
        };
        Ok(taxonomy)
    }
}
