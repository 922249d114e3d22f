//! API Client
//!
//! Bindings to the task/category REST API, organized by resource.

mod category;
mod task;
mod user;

pub use task::TaskFields;

use reqwest::header::ACCEPT;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// HTTP client bound to one API origin.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .header(ACCEPT, "application/json");
        // The session lives in an http-only cookie set by sign-in.
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        tracing::debug!(%method, path, "sending request");
        let mut builder = self.request(method.clone(), path);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(%method, path, error = %e, "request did not complete");
            ApiError::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(%method, path, status = status.as_u16(), "request succeeded");
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        let message = error_message(status.as_u16(), &body);
        tracing::warn!(%method, path, status = status.as_u16(), %message, "request failed");
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send::<()>(Method::GET, path, None).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn execute<B>(&self, method: Method, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.send(method, path, Some(body)).await.map(|_| ())
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: ErrorDetail,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Structured { error: String },
    Plain(String),
}

/// Extract the user-facing message from an error response body.
///
/// Expected shape is `{"detail": {"error": "..."}}`; anything else falls back
/// to a plain `detail` string, then to a generic status message.
pub fn error_message(status: u16, body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: ErrorDetail::Structured { error },
        }) => error,
        Ok(ErrorBody {
            detail: ErrorDetail::Plain(detail),
        }) => detail,
        Err(_) => format!("Request failed with status {}", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_error_message_structured() {
        assert_eq!(error_message(409, br#"{"detail":{"error":"in use"}}"#), "in use");
    }

    #[test]
    fn test_error_message_plain_detail() {
        assert_eq!(error_message(404, br#"{"detail":"Not Found"}"#), "Not Found");
    }

    #[test]
    fn test_error_message_fallbacks() {
        let validation = br#"{"detail":[{"loc":["body","name"],"msg":"field required"}]}"#;
        assert_eq!(error_message(422, validation), "Request failed with status 422");
        assert_eq!(error_message(502, b"<html>bad gateway</html>"), "Request failed with status 502");
        assert_eq!(error_message(500, b""), "Request failed with status 500");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = ApiClient::new("http://localhost:80/");
        assert_eq!(client.base_url, "http://localhost:80");
    }

    #[tokio::test]
    async fn test_status_error_carries_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/category/delete/"))
            .respond_with(
                ResponseTemplate::new(409)
                    .set_body_json(serde_json::json!({"detail": {"error": "in use"}})),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let err = client.delete_category("c1").await.unwrap_err();
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.to_string(), "in use");
    }

    #[tokio::test]
    async fn test_transport_error() {
        // Nothing listens on the discard port.
        let client = ApiClient::new("http://127.0.0.1:9");
        let err = client.list_tasks().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_malformed_list_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/task/get-all"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let err = client.list_tasks().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
