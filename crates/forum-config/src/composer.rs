//! Topic composer configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Author id sent with new topics until sessions carry one.
const fn default_user_id() -> u64 {
    4
}

fn default_tag() -> String {
    "Apresentação TCC".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ComposerConfig {
    /// Author id attached to created topics.
    #[serde(default = "default_user_id")]
    pub user_id: u64,

    /// Primary tag sent when the draft carries no tags.
    #[serde(default = "default_tag")]
    pub default_tag: String,

    /// Autosave file. Empty means `<data dir>/forum/drafts.json`.
    #[serde(default)]
    pub store_path: String,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            default_tag: default_tag(),
            store_path: String::new(),
        }
    }
}

impl ComposerConfig {
    /// Resolve the autosave file location.
    #[must_use]
    pub fn store_file(&self) -> Option<PathBuf> {
        if self.store_path.is_empty() {
            dirs::data_dir().map(|dir| dir.join("forum").join("drafts.json"))
        } else {
            Some(PathBuf::from(&self.store_path))
        }
    }
}
