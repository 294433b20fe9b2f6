//! Leaf Predictor - submission failure

/// Текст уведомления, показываемого пользователю при любой ошибке
pub const FAILURE_NOTICE: &str = "Error connecting to backend!";

/// Why a submission failed. Kept for the developer console only,
/// the user always sees [`FAILURE_NOTICE`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictError {
    #[error("failed to build request: {0}")]
    Request(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    TimedOut,
    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("no details"))]
    Status { status: u16, detail: Option<String> },
    #[error("malformed response: {0}")]
    Decode(String),
}

impl PredictError {
    pub fn user_message(&self) -> &'static str {
        FAILURE_NOTICE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_shows_same_notice() {
        let errors = [
            PredictError::Request("x".into()),
            PredictError::Network("TypeError: Failed to fetch".into()),
            PredictError::TimedOut,
            PredictError::Status {
                status: 500,
                detail: None,
            },
            PredictError::Decode("expected value".into()),
        ];
        for err in errors {
            assert_eq!(err.user_message(), FAILURE_NOTICE);
        }
    }

    #[test]
    fn test_status_display() {
        let err = PredictError::Status {
            status: 400,
            detail: Some("No file uploaded".into()),
        };
        assert_eq!(err.to_string(), "HTTP 400: No file uploaded");

        let err = PredictError::Status {
            status: 502,
            detail: None,
        };
        assert_eq!(err.to_string(), "HTTP 502: no details");
    }
}
