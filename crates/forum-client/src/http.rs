//! Shared HTTP response helpers.
//!
//! Every non-2xx status, 429 included, becomes [`ClientError::Api`] carrying
//! the response body. Calls are single-attempt, so no status gets a retry hint.

use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if !resp.status().is_success() {
        return Err(ClientError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Read the body and decode it as JSON, keeping decode failures apart from
/// transport failures.
pub async fn decode_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use forum_core::responses::CreateTopicResponse;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn too_many_requests_is_a_plain_api_error() {
        let resp = reqwest::Response::from(
            ::http::Response::builder()
                .status(429)
                .header("Retry-After", "30")
                .body("devagar")
                .unwrap(),
        );
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::Api { status: 429, ref message } if message == "devagar"
        ));
    }

    #[tokio::test]
    async fn check_response_api_error_keeps_body() {
        let resp = mock_response(500, "boom");
        let err = check_response(resp).await.unwrap_err();
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn decode_json_parses_body() {
        let resp = mock_response(200, r#"{"success": true, "message": "criado"}"#);
        let parsed: CreateTopicResponse = decode_json(resp).await.unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.message, "criado");
    }

    #[tokio::test]
    async fn decode_json_reports_parse_errors() {
        let resp = mock_response(200, "<html>");
        let err = decode_json::<CreateTopicResponse>(resp).await.unwrap_err();
        assert!(matches!(err, ClientError::Parse(_)));
    }
}
