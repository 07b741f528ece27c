use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One entry of a topic feed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub body: String,
    #[serde(default)]
    pub tag: Option<String>,
    pub user: FeedAuthor,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FeedAuthor {
    pub id: u64,
    pub slug: String,
    pub name: String,
}
