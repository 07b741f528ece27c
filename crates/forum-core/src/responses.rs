//! Request and response envelopes for the forum HTTP API.
//!
//! - `POST /api/criar` takes a [`CreateTopicRequest`] and answers with a
//!   [`CreateTopicResponse`].
//! - `GET /api/topico/{id}` answers with a [`TopicResponse`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Topic;
use crate::enums::Privacy;

/// Body of `POST /api/criar`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTopicRequest {
    pub user_id: u64,
    pub title: String,
    pub privacy: Privacy,
    pub section: String,
    pub body: String,
    /// Primary tag shown on feed cards.
    pub tag: String,
    pub tags: Vec<String>,
}

/// Answer of `POST /api/criar`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateTopicResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Answer of `GET /api/topico/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TopicResponse {
    pub topic: Topic,
}
