//! # forum-view
//!
//! Presentation models derived from forum records. Nothing here renders
//! markup; each model carries the strings and links a front end needs.
//!
//! - [`card::FeedCard`]: one feed entry (excerpt, relative time, links, badge)
//! - [`topic::TopicView`]: a fetched topic with its author block
//! - [`metadata`]: page title/description with slug redirect and not-found

pub mod card;
pub mod links;
pub mod metadata;
pub mod relative;
pub mod sanitize;
pub mod topic;
