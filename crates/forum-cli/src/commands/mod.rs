pub mod create;
pub mod dispatch;
pub mod draft;
pub mod feed;
pub mod privacy;
pub mod schema;
pub mod sections;
pub mod tags;
pub mod topic;
