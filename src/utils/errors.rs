use thiserror::Error;

use crate::api::listeners::ApiError;

/// Errors produced while loading and rendering a listener chart
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("Invalid color '{0}'")]
    InvalidColor(String),
    #[error("Mount point unavailable: {0}")]
    Mount(String),
    #[error("Chart rendering failed: {0}")]
    Render(String),
    #[error("Forecast failed: {0}")]
    Forecast(String),
}

/// Map a chart error to the message shown to the user.
///
/// Transport and rate-limit failures get a friendlier wording than the raw
/// error; everything else is passed through with the usual prefix.
pub fn user_facing_message(err: &ChartError) -> String {
    match err {
        ChartError::Api(ApiError::RateLimited { retry_after }) => format!(
            "⚠️ Rate limited by the analytics host. Try again in {} ms.",
            retry_after
        ),
        ChartError::Api(ApiError::RequestError(_)) => {
            "⚠️ Network error: could not reach the analytics host. Please try again.".to_string()
        }
        ChartError::Api(ApiError::DeserializationError(_)) => {
            "❌ The analytics host returned a malformed listener series.".to_string()
        }
        ChartError::Api(api) => format!("❌ {}", api),
        other => format!("❌ {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_failures_read_as_network_errors() {
        let err = ChartError::Api(ApiError::RequestError("connection refused".to_string()));
        assert!(user_facing_message(&err).contains("Network error"));
    }

    #[test]
    fn rate_limits_surface_the_retry_hint() {
        let err = ChartError::Api(ApiError::RateLimited { retry_after: 1500 });
        assert!(user_facing_message(&err).contains("1500 ms"));
    }

    #[test]
    fn malformed_payloads_are_called_out() {
        let err = ChartError::Api(ApiError::DeserializationError("expected array".to_string()));
        assert!(user_facing_message(&err).contains("malformed"));
    }

    #[test]
    fn other_errors_keep_their_message() {
        let err = ChartError::InvalidColor("#zzz".to_string());
        assert_eq!(user_facing_message(&err), "❌ Invalid color '#zzz'");
    }
}
