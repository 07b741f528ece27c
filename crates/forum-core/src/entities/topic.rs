use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A topic as returned by `GET /api/topico/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub body: String,
    #[serde(default)]
    pub votes: i64,
    pub user: TopicAuthor,
}

/// Author block embedded in a [`Topic`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TopicAuthor {
    pub id: u64,
    pub slug: String,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub pic: Option<String>,
}
