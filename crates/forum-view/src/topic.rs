//! The single-topic page.

use chrono::{DateTime, SecondsFormat, Utc};
use forum_core::entities::{Topic, TopicAuthor};
use serde::Serialize;

use crate::links::profile_path;
use crate::relative::from_now;

/// "Postado por" block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorView {
    pub display_name: String,
    /// First character of the first name, for avatars without a picture.
    pub avatar_fallback: String,
    pub pic: Option<String>,
    pub href: String,
}

impl AuthorView {
    #[must_use]
    pub fn from_author(author: &TopicAuthor) -> Self {
        let display_name = format!("{} {}", author.first_name, author.last_name)
            .trim()
            .to_string();
        Self {
            display_name,
            avatar_fallback: author.first_name.chars().take(1).collect(),
            pic: author.pic.clone().filter(|p| !p.is_empty()),
            href: profile_path(author.id, &author.slug),
        }
    }
}

/// A fetched topic ready for display. The body stays markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicView {
    pub title: String,
    pub posted: String,
    pub posted_at: String,
    pub body: String,
    pub votes: i64,
    pub author: AuthorView,
}

impl TopicView {
    #[must_use]
    pub fn from_topic(topic: &Topic, now: DateTime<Utc>) -> Self {
        Self {
            title: topic.title.clone(),
            posted: from_now(topic.created_at, now),
            posted_at: topic.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            body: topic.body.clone(),
            votes: topic.votes,
            author: AuthorView::from_author(&topic.user),
        }
    }
}
