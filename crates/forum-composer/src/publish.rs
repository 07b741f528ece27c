//! Seam between the composer and whatever creates topics remotely.

use std::future::Future;

use forum_client::{ClientError, ForumClient};
use forum_core::responses::{CreateTopicRequest, CreateTopicResponse};

/// Anything that can create a topic from a request.
pub trait TopicPublisher {
    fn create_topic(
        &self,
        request: &CreateTopicRequest,
    ) -> impl Future<Output = Result<CreateTopicResponse, ClientError>> + Send;
}

impl TopicPublisher for ForumClient {
    fn create_topic(
        &self,
        request: &CreateTopicRequest,
    ) -> impl Future<Output = Result<CreateTopicResponse, ClientError>> + Send {
        Self::create_topic(self, request)
    }
}
