//! Draft validation, evaluated at submit time.
//!
//! Stage gating only decides which controls are interactive; these rules
//! decide whether a draft may be sent. Tags are not checked here, the picker
//! already caps them.

use std::fmt;

use forum_core::entities::Draft;
use forum_core::enums::Privacy;
use forum_core::responses::CreateTopicRequest;
use forum_core::taxonomy::Taxonomy;
use serde::Serialize;

/// Minimum trimmed title length, shared by the stage-1 gate.
pub const TITLE_MIN_CHARS: usize = 10;
pub const TITLE_MAX_CHARS: usize = 150;
pub const BODY_MIN_CHARS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Title,
    Privacy,
    Section,
    Body,
}

impl Field {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Privacy => "privacy",
            Self::Section => "section",
            Self::Body => "body",
        }
    }
}

/// A rejected field and the message shown next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Every field error of one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// First error reported for `field`, if any.
    #[must_use]
    pub fn for_field(&self, field: Field) -> Option<&FieldError> {
        self.0.iter().find(|error| error.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|error| format!("{}: {}", error.field.as_str(), error.message))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

impl std::error::Error for ValidationErrors {}

/// A draft that passed validation, with its title trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidTopic {
    pub title: String,
    pub privacy: Privacy,
    pub section: String,
    pub body: String,
    pub tags: Vec<String>,
}

impl ValidTopic {
    /// Build the creation request. The primary tag is the first selected tag,
    /// or `default_tag` when none was picked.
    #[must_use]
    pub fn into_request(self, user_id: u64, default_tag: &str) -> CreateTopicRequest {
        let tag = self
            .tags
            .first()
            .cloned()
            .unwrap_or_else(|| default_tag.to_string());
        CreateTopicRequest {
            user_id,
            title: self.title,
            privacy: self.privacy,
            section: self.section,
            body: self.body,
            tag,
            tags: self.tags,
        }
    }
}

/// Check a draft against the submit rules.
///
/// # Errors
///
/// Returns every failing field at once so all messages can be shown.
pub fn validate(draft: &Draft, taxonomy: &Taxonomy) -> Result<ValidTopic, ValidationErrors> {
    let mut errors = Vec::new();
    let mut reject = |field, message: &str| {
        errors.push(FieldError {
            field,
            message: message.to_string(),
        });
    };

    let title = draft.title.trim();
    let title_len = title.chars().count();
    if title_len < TITLE_MIN_CHARS {
        reject(Field::Title, "O título deve ter no mínimo 10 caracteres.");
    } else if title_len > TITLE_MAX_CHARS {
        reject(Field::Title, "O título deve ter no máximo 150 caracteres.");
    }

    if draft.privacy.is_none() {
        reject(Field::Privacy, "Selecione a privacidade do tópico.");
    }

    match draft.section.as_deref().map(str::trim) {
        None | Some("") => reject(Field::Section, "Selecione uma seção."),
        Some(slug) if !taxonomy.is_selectable_section(slug) => {
            reject(Field::Section, "Seção desconhecida.");
        }
        Some(_) => {}
    }

    if draft.body.chars().count() < BODY_MIN_CHARS {
        reject(
            Field::Body,
            "O corpo do tópico deve ter no mínimo 20 caracteres.",
        );
    }

    match (draft.privacy, &draft.section) {
        (Some(privacy), Some(section)) if errors.is_empty() => Ok(ValidTopic {
            title: title.to_string(),
            privacy,
            section: section.trim().to_string(),
            body: draft.body.clone(),
            tags: draft.tags.clone(),
        }),
        _ => Err(ValidationErrors(errors)),
    }
}

/// Feedback shown under the title once the field has been touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "missing")]
pub enum TitleHint {
    LooksGood,
    NeedsMore(usize),
}

impl TitleHint {
    #[must_use]
    pub fn for_title(title: &str) -> Self {
        let len = title.trim().chars().count();
        if len >= TITLE_MIN_CHARS {
            Self::LooksGood
        } else {
            Self::NeedsMore(TITLE_MIN_CHARS - len)
        }
    }

    #[must_use]
    pub fn message(self) -> String {
        match self {
            Self::LooksGood => "Parece bom!".to_string(),
            Self::NeedsMore(n) => format!("São necessários mais {n} caracteres no seu título."),
        }
    }
}
