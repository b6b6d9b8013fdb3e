use crate::api::error::ApiError;
use crate::logging::LogLevel;

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_fetch_error(&self, error: &ApiError) -> LogLevel {
        match error {
            // Non-critical: temporary server issues
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Critical: wrong endpoint, refused requests
            ApiError::Http { status, .. } if (400..=499).contains(status) => LogLevel::Error,

            // Critical: the service answered with something we can't display
            ApiError::Decode(_) | ApiError::InvalidShape(_) => LogLevel::Error,

            // Network issues - usually temporary
            other if other.is_network() => LogLevel::Warn,

            _ => LogLevel::Error,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}
