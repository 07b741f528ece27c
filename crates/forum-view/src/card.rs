//! Feed cards.

use chrono::{DateTime, SecondsFormat, Utc};
use forum_core::entities::FeedItem;
use serde::Serialize;

use crate::links::{BadgeVariant, profile_path, tag_path, topic_path};
use crate::relative::from_now;
use crate::sanitize::excerpt;

/// A tag chip on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagBadge {
    pub label: String,
    pub variant: BadgeVariant,
    pub href: String,
}

impl TagBadge {
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            variant: BadgeVariant::for_label(label),
            href: tag_path(label),
        }
    }
}

/// Everything a feed list shows for one topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedCard {
    pub id: u64,
    pub title: String,
    pub href: String,
    /// Relative posting time, e.g. `há 2 horas`.
    pub posted: String,
    /// RFC 3339 timestamp, shown on hover.
    pub posted_at: String,
    pub excerpt: String,
    pub author_name: String,
    pub author_href: String,
    pub tag: Option<TagBadge>,
}

impl FeedCard {
    #[must_use]
    pub fn from_item(item: &FeedItem, now: DateTime<Utc>) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            href: topic_path(item.id, &item.slug),
            posted: from_now(item.created_at, now),
            posted_at: item.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            excerpt: excerpt(&item.body),
            author_name: item.user.name.clone(),
            author_href: profile_path(item.user.id, &item.user.slug),
            tag: item
                .tag
                .as_deref()
                .filter(|label| !label.is_empty())
                .map(TagBadge::new),
        }
    }
}

/// Cards for a whole feed, in feed order.
#[must_use]
pub fn feed_cards(items: &[FeedItem], now: DateTime<Utc>) -> Vec<FeedCard> {
    items.iter().map(|item| FeedCard::from_item(item, now)).collect()
}
