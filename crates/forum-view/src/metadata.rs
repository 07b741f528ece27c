//! `<head>` metadata for topic pages.
//!
//! A topic URL carries both the id and the slug. The id is authoritative; a
//! stale or mistyped slug resolves to a redirect onto the canonical path.

use forum_core::entities::FeedItem;
use serde::Serialize;

use crate::links::topic_path;
use crate::sanitize::excerpt;

/// Appended to every topic page title.
pub const SITE_SUFFIX: &str = " - Fórum Centro Paula Souza";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
}

/// Outcome of resolving a topic route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageResolution {
    Found(PageMetadata),
    NotFound,
    /// The slug did not match; carries the canonical slug.
    Redirect { id: u64, slug: String },
}

impl PageResolution {
    /// Canonical path for a redirect.
    #[must_use]
    pub fn location(&self) -> Option<String> {
        match self {
            Self::Redirect { id, slug } => Some(topic_path(*id, slug)),
            _ => None,
        }
    }
}

/// Resolve `/topico/{id}/{slug}` against a list of known topics.
#[must_use]
pub fn page_metadata(topics: &[FeedItem], id: u64, slug: &str) -> PageResolution {
    let Some(topic) = topics.iter().find(|t| t.id == id) else {
        return PageResolution::NotFound;
    };
    if topic.slug != slug {
        return PageResolution::Redirect {
            id: topic.id,
            slug: topic.slug.clone(),
        };
    }
    PageResolution::Found(PageMetadata {
        title: format!("{}{SITE_SUFFIX}", topic.title),
        description: excerpt(&topic.body),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use forum_core::entities::FeedAuthor;
    use pretty_assertions::assert_eq;

    fn topics() -> Vec<FeedItem> {
        vec![FeedItem {
            id: 5,
            title: "Feira de ciências".into(),
            slug: "feira-de-ciencias".into(),
            created_at: Utc::now(),
            body: "Inscrições *abertas* até sexta!".into(),
            tag: None,
            user: FeedAuthor {
                id: 1,
                slug: "coord".into(),
                name: "Coordenação".into(),
            },
        }]
    }

    #[test]
    fn found() {
        assert_eq!(
            page_metadata(&topics(), 5, "feira-de-ciencias"),
            PageResolution::Found(PageMetadata {
                title: "Feira de ciências - Fórum Centro Paula Souza".into(),
                description: "Inscrições *abertas* até sexta!".into(),
            })
        );
    }

    #[test]
    fn unknown_id_is_not_found() {
        assert_eq!(page_metadata(&topics(), 99, "x"), PageResolution::NotFound);
    }

    #[test]
    fn stale_slug_redirects_to_canonical_path() {
        let resolution = page_metadata(&topics(), 5, "feira");
        assert_eq!(
            resolution,
            PageResolution::Redirect {
                id: 5,
                slug: "feira-de-ciencias".into()
            }
        );
        assert_eq!(
            resolution.location().as_deref(),
            Some("/topico/5/feira-de-ciencias")
        );
        assert_eq!(page_metadata(&topics(), 99, "x").location(), None);
    }
}
