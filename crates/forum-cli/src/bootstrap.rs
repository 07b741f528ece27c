use anyhow::Context;
use forum_config::ForumConfig;

/// Load `.env` (if any), then the layered configuration.
pub fn load_config() -> anyhow::Result<ForumConfig> {
    ForumConfig::load_with_dotenv().context("failed to load forum configuration")
}
