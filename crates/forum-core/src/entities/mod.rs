//! Records exchanged with the forum API and the draft edited locally.
//!
//! Wire records use `camelCase` field names, matching the API payloads.

mod draft;
mod feed;
mod topic;

pub use draft::Draft;
pub use feed::{FeedAuthor, FeedItem};
pub use topic::{Topic, TopicAuthor};
