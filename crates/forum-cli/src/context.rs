use anyhow::Context;
use forum_client::ForumClient;
use forum_composer::{FileStore, SubmitSettings};
use forum_config::ForumConfig;
use forum_core::taxonomy::Taxonomy;

/// Everything a command needs, built once from configuration.
pub struct AppContext {
    pub config: ForumConfig,
    pub taxonomy: Taxonomy,
}

impl AppContext {
    pub fn init(config: ForumConfig) -> anyhow::Result<Self> {
        let taxonomy = config
            .taxonomy
            .load()
            .context("failed to load taxonomy")?;
        tracing::debug!(
            super_sections = taxonomy.super_sections.len(),
            tag_categories = taxonomy.tag_categories.len(),
            "taxonomy loaded"
        );
        Ok(Self { config, taxonomy })
    }

    pub fn client(&self) -> anyhow::Result<ForumClient> {
        ForumClient::new(&self.config.api).context("failed to build HTTP client")
    }

    /// The autosave file store.
    pub fn store(&self) -> anyhow::Result<FileStore> {
        let path = self
            .config
            .composer
            .store_file()
            .context("no data directory for the autosave store; set composer.store_path")?;
        FileStore::open(path).context("failed to open the autosave store")
    }

    pub fn submit_settings(&self) -> SubmitSettings {
        SubmitSettings {
            user_id: self.config.composer.user_id,
            default_tag: self.config.composer.default_tag.clone(),
        }
    }
}
