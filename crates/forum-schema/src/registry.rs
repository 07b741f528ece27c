//! Central schema registry for the forum wire types.
//!
//! The `SchemaRegistry` builds JSON Schemas from forum-core types at
//! construction time using [`schemars::schema_for!`] and validates via
//! `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Named JSON Schemas for every type crossing the HTTP boundary.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert(
            $name,
            serde_json::to_value(schema_for!($ty)).expect("schemars output is valid JSON"),
        );
    };
}

impl SchemaRegistry {
    /// Build a registry containing the record, envelope, and taxonomy schemas.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on a `schemars`-generated
    /// schema, which `schemars` output never triggers.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Records ---
        register!(schemas, "draft", forum_core::entities::Draft);
        register!(schemas, "topic", forum_core::entities::Topic);
        register!(schemas, "feed_item", forum_core::entities::FeedItem);

        // --- API envelopes ---
        register!(
            schemas,
            "create_topic_request",
            forum_core::responses::CreateTopicRequest
        );
        register!(
            schemas,
            "create_topic_response",
            forum_core::responses::CreateTopicResponse
        );
        register!(
            schemas,
            "topic_response",
            forum_core::responses::TopicResponse
        );

        // --- Taxonomy ---
        register!(schemas, "taxonomy", forum_core::taxonomy::Taxonomy);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Check `instance` against the schema called `name`.
    ///
    /// # Errors
    ///
    /// [`SchemaError::Unknown`] for an unregistered name,
    /// [`SchemaError::Mismatch`] listing every violation otherwise.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::Unknown(name.to_string()))?;
        let validator =
            jsonschema::validator_for(schema).map_err(|e| SchemaError::Uncompilable {
                name: name.to_string(),
                reason: e.to_string(),
            })?;

        let violations: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{} at '{}'", e, e.instance_path))
            .collect();
        if violations.is_empty() {
            return Ok(());
        }
        Err(SchemaError::Mismatch {
            name: name.to_string(),
            violations,
        })
    }

    /// List all registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use forum_core::entities::{FeedAuthor, FeedItem};
    use pretty_assertions::assert_eq;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new()
    }

    #[test]
    fn all_expected_schemas_present() {
        let reg = registry();
        assert_eq!(
            reg.list(),
            vec![
                "create_topic_request",
                "create_topic_response",
                "draft",
                "feed_item",
                "taxonomy",
                "topic",
                "topic_response",
            ]
        );
    }

    #[test]
    fn get_nonexistent_schema() {
        assert!(registry().get("nonexistent").is_none());
    }

    #[test]
    fn validate_valid_feed_item() {
        let item = FeedItem {
            id: 1,
            title: "Olá".into(),
            slug: "ola".into(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
            body: "Primeiro tópico".into(),
            tag: None,
            user: FeedAuthor {
                id: 2,
                slug: "bia".into(),
                name: "Bia".into(),
            },
        };
        let json = serde_json::to_value(&item).unwrap();
        assert!(registry().validate("feed_item", &json).is_ok());
    }

    #[test]
    fn validate_rejects_missing_required_field() {
        let invalid = serde_json::json!({
            "userId": 4,
            "privacy": 0,
            "section": "fisica",
            "body": "corpo",
            "tag": "",
            "tags": []
        });
        let result = registry().validate("create_topic_request", &invalid);
        let Err(SchemaError::Mismatch { name, violations }) = result else {
            panic!("expected Mismatch, got {result:?}");
        };
        assert_eq!(name, "create_topic_request");
        assert!(violations.iter().any(|v| v.contains("title")), "{violations:?}");
    }

    #[test]
    fn validate_rejects_unknown_privacy_code() {
        let invalid = serde_json::json!({
            "userId": 4,
            "title": "Título",
            "privacy": 5,
            "section": "fisica",
            "body": "corpo",
            "tag": "",
            "tags": []
        });
        assert!(
            registry()
                .validate("create_topic_request", &invalid)
                .is_err()
        );
    }

    #[test]
    fn validate_nonexistent_schema_returns_not_found() {
        let result = registry().validate("bogus", &serde_json::json!({}));
        assert!(matches!(result, Err(SchemaError::Unknown(ref name)) if name == "bogus"));
    }
}
