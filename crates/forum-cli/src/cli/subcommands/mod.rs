pub mod draft;
pub mod feed;
pub mod tags;
pub mod topic;

pub use draft::DraftCommands;
pub use feed::FeedCommands;
pub use tags::TagCommands;
pub use topic::TopicCommands;
