//! Topic lookup (`GET /api/topico/{id}`).

use forum_core::entities::Topic;
use forum_core::responses::TopicResponse;

use crate::http::{check_response, decode_json};
use crate::{ClientError, ForumClient};

impl ForumClient {
    /// Fetch a single topic by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API returns a
    /// non-success status, or the answer cannot be parsed.
    pub async fn fetch_topic(&self, id: &str) -> Result<Topic, ClientError> {
        let url = self.endpoint(&topic_path(id));
        tracing::debug!(%url, "fetching topic");

        let resp = check_response(self.http.get(&url).send().await?).await?;
        let answer: TopicResponse = decode_json(resp).await?;
        Ok(answer.topic)
    }
}

fn topic_path(id: &str) -> String {
    format!("/api/topico/{}", urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_path_encodes_id() {
        assert_eq!(topic_path("42"), "/api/topico/42");
        assert_eq!(topic_path("a b/c"), "/api/topico/a%20b%2Fc");
    }
}
