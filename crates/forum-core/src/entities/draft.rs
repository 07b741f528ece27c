use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Privacy;

/// The in-progress, not-yet-submitted topic.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub privacy: Option<Privacy>,
    pub section: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub body: String,
}

impl Draft {
    /// Draft as a fresh composer starts it: public, with the restored body.
    #[must_use]
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            privacy: Some(Privacy::Public),
            body: body.into(),
            ..Self::default()
        }
    }
}
