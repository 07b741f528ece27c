//! Route paths and tag badge styling.

use std::fmt;

use serde::Serialize;

/// `/topico/{id}/{slug}`
#[must_use]
pub fn topic_path(id: u64, slug: &str) -> String {
    format!("/topico/{id}/{slug}")
}

/// `/perfil/{id}/{slug}`
#[must_use]
pub fn profile_path(id: u64, slug: &str) -> String {
    format!("/perfil/{id}/{slug}")
}

/// `/tag/{label}` with the label percent-encoded.
#[must_use]
pub fn tag_path(label: &str) -> String {
    format!("/tag/{}", urlencoding::encode(label))
}

/// Visual weight of a tag badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Default,
    Outline,
    Secondary,
}

impl BadgeVariant {
    /// `work` is emphasized, `personal` outlined, everything else secondary.
    #[must_use]
    pub fn for_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "work" => Self::Default,
            "personal" => Self::Outline,
            _ => Self::Secondary,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Outline => "outline",
            Self::Secondary => "secondary",
        }
    }
}

impl fmt::Display for BadgeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
