use thiserror::Error;

/// Result type alias for Checkly operations
pub type Result<T> = std::result::Result<T, ChecklyError>;

/// Errors that can occur when interacting with the Checkly API
#[derive(Debug, Error)]
pub enum ChecklyError {
    /// A user API key was used without an account ID
    #[error("missing Checkly account ID (required when using user API keys)")]
    MissingAccountId,

    /// A required environment variable is not set
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    /// The check type cannot be created through the requested operation
    #[error("unsupported check type for this operation: {0}")]
    UnsupportedCheckType(String),

    /// Failed to build HTTP client
    #[error("failed to build HTTP client: {0}")]
    BuildHttpClient(#[source] reqwest::Error),

    /// The endpoint URL could not be constructed
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Failed to serialize a request payload
    #[error("failed to serialize request payload: {0}")]
    Serialize(#[source] serde_json::Error),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest_middleware::Error),

    /// The response body could not be read
    #[error("failed to read response body: {0}")]
    ReadBody(#[source] reqwest::Error),

    /// The response body did not match the expected JSON shape
    #[error("decoding error for data {body}: {source}")]
    Decode {
        /// Raw response body
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// An alert channel carried a `type` this client does not know
    #[error("unknown alert-channel config type: {0}")]
    UnknownAlertChannelType(String),

    /// A static IP entry could not be parsed as an address or CIDR range
    #[error("could not parse static IP range from {0}")]
    InvalidStaticIp(String),

    /// Checkly answered with a status code the operation does not expect
    #[error("unexpected response status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Raw response body, usually a validation message
        message: String,
    },
}

impl ChecklyError {
    /// HTTP status code of the response, if the error came from one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the error is retryable
    ///
    /// The client never retries on its own. This only classifies errors for
    /// callers that wrap it with their own policy.
    ///
    /// Returns `true` for:
    /// - Network/connection errors
    /// - Timeout errors
    /// - Server errors (5xx status codes)
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request(reqwest_middleware::Error::Reqwest(err)) => {
                err.is_connect() || err.is_timeout()
            }
            Self::UnexpectedStatus { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_status_retryable_5xx() {
        for status in [500, 502, 503] {
            let error = ChecklyError::UnexpectedStatus {
                status,
                message: "Service unavailable".to_string(),
            };
            assert!(error.is_retryable());
        }
    }

    #[test]
    fn test_unexpected_status_not_retryable_4xx() {
        for status in [400, 401, 404] {
            let error = ChecklyError::UnexpectedStatus {
                status,
                message: "Bad request".to_string(),
            };
            assert!(!error.is_retryable());
            assert_eq!(error.status(), Some(status));
        }
    }

    #[test]
    fn test_error_display_keeps_body() {
        let error = ChecklyError::UnexpectedStatus {
            status: 400,
            message: r#"{"message":"\"frequency\" must be one of [0, 1, 5]"}"#.to_string(),
        };
        let text = error.to_string();
        assert!(text.starts_with("unexpected response status 400"));
        assert!(text.contains("frequency"));
    }

    #[test]
    fn test_validation_errors_not_retryable() {
        assert!(!ChecklyError::MissingAccountId.is_retryable());
        assert_eq!(ChecklyError::MissingAccountId.status(), None);

        let error = ChecklyError::UnknownAlertChannelType("TEAMS".to_string());
        assert_eq!(error.to_string(), "unknown alert-channel config type: TEAMS");
    }

    #[test]
    fn test_decode_error_not_retryable() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let error = ChecklyError::Decode {
            body: "invalid".to_string(),
            source: json_err,
        };
        assert!(!error.is_retryable());
        assert!(error.to_string().contains("invalid"));
    }
}
