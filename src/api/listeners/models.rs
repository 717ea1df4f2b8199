use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One element of a fetched listener time series.
///
/// `date` is carried verbatim and becomes the axis label. Both numeric
/// fields are optional; `predicted_listeners` is the fallback when the
/// daily count is missing or zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListenerPoint {
    pub date: String,
    #[serde(default)]
    pub daily_listeners: Option<f64>,
    #[serde(default)]
    pub predicted_listeners: Option<f64>,
}

/// Error response body from an analytics endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: Option<String>,
    pub message: Option<String>,
    pub status: Option<i32>,
}

/// 429 Rate limit response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitResponse {
    pub message: String,
    pub retry_after: Option<i64>,
}

/// Comprehensive error type for analytics API operations
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// 400 Bad Request
    #[error("Bad Request: {0}")]
    BadRequest(String),
    /// 401 Unauthorized
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// 403 Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),
    /// 404 Not Found
    #[error("Not Found: {0}")]
    NotFound(String),
    /// 429 Too Many Requests (rate limited)
    #[error("Rate Limited. Retry after {retry_after} ms")]
    RateLimited { retry_after: i64 },
    /// 5xx Server Error
    #[error("Server Error ({0}): {1}")]
    ServerError(i32, String),
    /// Other HTTP errors
    #[error("HTTP Error ({0}): {1}")]
    HttpError(i32, String),
    /// Network/request error
    #[error("Request Error: {0}")]
    RequestError(String),
    /// Deserialization error
    #[error("Deserialization Error: {0}")]
    DeserializationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_point() {
        let point: ListenerPoint =
            serde_json::from_str(r#"{"date":"2024-01-01","daily_listeners":100}"#)
                .expect("Deserialization failed");
        assert_eq!(point.date, "2024-01-01");
        assert_eq!(point.daily_listeners, Some(100.0));
        assert_eq!(point.predicted_listeners, None);
    }

    #[test]
    fn null_and_missing_fields_become_none() {
        let point: ListenerPoint = serde_json::from_str(
            r#"{"date":"2024-01-02","daily_listeners":null,"predicted_listeners":120}"#,
        )
        .expect("Deserialization failed");
        assert_eq!(point.daily_listeners, None);
        assert_eq!(point.predicted_listeners, Some(120.0));

        let bare: ListenerPoint =
            serde_json::from_str(r#"{"date":"2024-01-03"}"#).expect("Deserialization failed");
        assert_eq!(bare.daily_listeners, None);
        assert_eq!(bare.predicted_listeners, None);
    }

    #[test]
    fn rejects_non_array_payload() {
        let result: Result<Vec<ListenerPoint>, _> = serde_json::from_str(r#"{"series":[]}"#);
        assert!(result.is_err());
    }
}
