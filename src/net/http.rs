//! HTTP utilities for cloud controller REST calls

use crate::errors::ApiError;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::Value;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and strips control characters
fn sanitize_for_log(body: &str) -> String {
    let total = body.chars().count();
    let truncated = if total > MAX_LOG_BODY_LENGTH {
        let head: String = body.chars().take(MAX_LOG_BODY_LENGTH).collect();
        format!("{}... [truncated, {} bytes total]", head, body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// Error body returned by the cloud controller on failed requests
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    error_code: Option<String>,
}

fn http_error(status: u16, body: &str) -> ApiError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    ApiError::Http {
        status,
        code: parsed.code,
        error_code: parsed.error_code,
        description: parsed.description,
    }
}

/// HTTP client wrapper for cloud controller API calls
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new() -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(format!("cfasg/{}", crate::VERSION))
            .build()?;

        Ok(Self { client })
    }

    /// Make a GET request and decode the JSON reply
    pub async fn get(&self, url: &str, token: Option<&str>) -> Result<Value, ApiError> {
        tracing::debug!("GET {}", url);

        let response = self.send(self.client.get(url), token).await?;
        let body = response.text().await?;

        // 204 replies carry no body
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Make a POST request with an optional JSON body.
    ///
    /// Only the status is checked; a successful reply body is never decoded.
    pub async fn post(
        &self,
        url: &str,
        token: Option<&str>,
        body: Option<&Value>,
    ) -> Result<(), ApiError> {
        tracing::debug!("POST {}", url);

        let mut request = self.client.post(url);
        if let Some(body) = body {
            request = request.json(body);
        }

        self.send(request, token).await?;
        Ok(())
    }

    /// Make a DELETE request. Only the status is checked.
    pub async fn delete(&self, url: &str, token: Option<&str>) -> Result<(), ApiError> {
        tracing::debug!("DELETE {}", url);

        self.send(self.client.delete(url), token).await?;
        Ok(())
    }

    /// Send a request and turn a non-success status into [`ApiError::Http`]
    async fn send(
        &self,
        mut request: RequestBuilder,
        token: Option<&str>,
    ) -> Result<Response, ApiError> {
        request = request.header(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await?;
        // Only the sanitized/truncated body goes to the log
        tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
        Err(http_error(status.as_u16(), &body))
    }
}
