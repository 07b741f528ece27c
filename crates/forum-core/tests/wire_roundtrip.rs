//! Serde roundtrip and JsonSchema validation tests for the wire types.

use chrono::{TimeZone, Utc};
use forum_core::entities::*;
use forum_core::enums::Privacy;
use forum_core::responses::*;
use pretty_assertions::assert_eq;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn posted_at() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 17, 13, 45, 0).unwrap()
}

roundtrip_and_validate!(
    create_request_roundtrip,
    CreateTopicRequest,
    CreateTopicRequest {
        user_id: 4,
        title: "Como resolver essa equação?".into(),
        privacy: Privacy::Institution,
        section: "matematica".into(),
        body: "Preciso de ajuda com uma equação do segundo grau.".into(),
        tag: "Matemática".into(),
        tags: vec!["Matemática".into(), "Dúvida".into()],
    }
);

roundtrip_and_validate!(
    create_response_roundtrip,
    CreateTopicResponse,
    CreateTopicResponse {
        success: true,
        message: "ok".into(),
    }
);

roundtrip_and_validate!(
    topic_response_roundtrip,
    TopicResponse,
    TopicResponse {
        topic: Topic {
            title: "Dúvida sobre vetores".into(),
            created_at: posted_at(),
            body: "Qual a diferença entre **vetor** e escalar?".into(),
            votes: 3,
            user: TopicAuthor {
                id: 7,
                slug: "ana-souza".into(),
                first_name: "Ana".into(),
                last_name: "Souza".into(),
                pic: None,
            },
        },
    }
);

roundtrip_and_validate!(
    feed_item_roundtrip,
    FeedItem,
    FeedItem {
        id: 12,
        title: "Apresentação do TCC".into(),
        slug: "apresentacao-do-tcc".into(),
        created_at: posted_at(),
        body: "Nosso grupo vai apresentar na sexta.".into(),
        tag: Some("Apresentação TCC".into()),
        user: FeedAuthor {
            id: 4,
            slug: "joao".into(),
            name: "João".into(),
        },
    }
);

roundtrip_and_validate!(
    draft_roundtrip,
    Draft,
    Draft {
        title: "Um título longo o bastante".into(),
        privacy: Some(Privacy::Private),
        section: Some("fisica".into()),
        tags: vec!["Física".into()],
        body: "Corpo do tópico com mais de vinte caracteres.".into(),
    }
);

#[test]
fn create_request_uses_camel_case_keys() {
    let request = CreateTopicRequest {
        user_id: 4,
        title: "t".into(),
        privacy: Privacy::Public,
        section: "s".into(),
        body: "b".into(),
        tag: String::new(),
        tags: Vec::new(),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["userId"], 4);
    assert_eq!(value["privacy"], 0);
    assert!(value.get("user_id").is_none());
}

#[test]
fn topic_votes_default_to_zero() {
    let json = r#"{
        "topic": {
            "title": "Sem votos",
            "createdAt": "2024-05-17T13:45:00Z",
            "body": "texto",
            "user": { "id": 1, "slug": "u", "firstName": "Lia" }
        }
    }"#;
    let parsed: TopicResponse = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.topic.votes, 0);
    assert_eq!(parsed.topic.user.last_name, "");
    assert!(parsed.topic.user.pic.is_none());
}

#[test]
fn response_message_is_optional() {
    let parsed: CreateTopicResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
    assert!(!parsed.success);
    assert!(parsed.message.is_empty());
}
