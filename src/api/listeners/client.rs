use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client as HttpClient;

use super::models::{ApiError, ErrorResponse, ListenerPoint, RateLimitResponse};
use tracing::{debug, warn};

/// HTTP client for podcast analytics endpoints serving listener time series
pub struct AnalyticsClient {
    http_client: HttpClient,
    base_url: Option<String>,
}

impl AnalyticsClient {
    /// Create a new analytics client
    pub fn new() -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: None,
        }
    }

    /// Create a client that resolves relative paths against a base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: Some(base_url),
        }
    }

    /// Create default headers for JSON endpoints
    fn create_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Resolve a possibly-relative URL against the configured base
    fn resolve_url(&self, url: &str) -> String {
        match &self.base_url {
            Some(base) if !url.starts_with("http") => format!(
                "{}/{}",
                base.trim_end_matches('/'),
                url.trim_start_matches('/')
            ),
            _ => url.to_string(),
        }
    }

    /// Parse error response based on HTTP status code
    async fn handle_error_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let status_code = status.as_u16();
        let body_text = response.text().await.unwrap_or_default();

        match status_code {
            400 => {
                // Try to parse JSON error
                if let Ok(err) = serde_json::from_str::<ErrorResponse>(&body_text) {
                    let message = err.message.or(err.error).unwrap_or(body_text);
                    ApiError::BadRequest(message)
                } else {
                    ApiError::BadRequest(body_text)
                }
            }
            401 => ApiError::Unauthorized(body_text),
            403 => ApiError::Forbidden(body_text),
            404 => ApiError::NotFound(body_text),
            429 => {
                // Surface the retry hint; retrying is out of scope
                if let Ok(rate_limit) = serde_json::from_str::<RateLimitResponse>(&body_text) {
                    let retry_after = rate_limit.retry_after.unwrap_or(1000);
                    warn!(
                        "Rate limited ({}), retry after {} ms",
                        rate_limit.message, retry_after
                    );
                    ApiError::RateLimited { retry_after }
                } else {
                    warn!("Rate limited, but could not parse retry_after");
                    ApiError::RateLimited { retry_after: 1000 }
                }
            }
            500..=599 => {
                warn!("Server error {}: {}", status_code, body_text);
                ApiError::ServerError(status_code as i32, body_text)
            }
            _ => ApiError::HttpError(status_code as i32, body_text),
        }
    }

    /// GET a listener time series.
    ///
    /// Issues a single request against `url` and parses the body as a JSON
    /// array of [`ListenerPoint`].
    ///
    /// # Returns
    /// * `Ok(Vec<ListenerPoint>)` - The fetched series, in payload order
    /// * `Err(ApiError)` - Transport failure, non-2xx status, or a body
    ///   that does not parse as a point array
    pub async fn fetch_listener_series(&self, url: &str) -> Result<Vec<ListenerPoint>, ApiError> {
        let url = self.resolve_url(url);
        debug!("Fetching listener series from {}", url);

        let response = self
            .http_client
            .get(&url)
            .headers(Self::create_headers())
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<Vec<ListenerPoint>>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }
}

impl Default for AnalyticsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_urls_pass_through() {
        let client = AnalyticsClient::with_base_url("http://localhost:5000".to_string());
        assert_eq!(
            client.resolve_url("https://stats.example.com/listeners"),
            "https://stats.example.com/listeners"
        );
    }

    #[test]
    fn relative_paths_join_the_base() {
        let client = AnalyticsClient::with_base_url("http://localhost:5000/".to_string());
        assert_eq!(
            client.resolve_url("/api/listeners"),
            "http://localhost:5000/api/listeners"
        );
    }

    #[test]
    fn no_base_means_verbatim() {
        let client = AnalyticsClient::new();
        assert_eq!(client.resolve_url("/api/listeners"), "/api/listeners");
    }
}
