//! Topic creation (`POST /api/criar`).

use forum_core::responses::{CreateTopicRequest, CreateTopicResponse};

use crate::http::{check_response, decode_json};
use crate::{ClientError, ForumClient};

pub const CREATE_PATH: &str = "/api/criar";

impl ForumClient {
    /// Send a new topic to the API.
    ///
    /// A `success: false` answer is returned as-is; deciding what it means
    /// is up to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API returns a
    /// non-success status, or the answer cannot be parsed.
    pub async fn create_topic(
        &self,
        request: &CreateTopicRequest,
    ) -> Result<CreateTopicResponse, ClientError> {
        let url = self.endpoint(CREATE_PATH);
        tracing::debug!(%url, section = %request.section, tags = request.tags.len(), "creating topic");

        let resp = check_response(self.http.post(&url).json(request).send().await?).await?;
        let answer: CreateTopicResponse = decode_json(resp).await?;

        tracing::info!(success = answer.success, "topic creation answered");
        Ok(answer)
    }
}
