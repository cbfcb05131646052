//! Error types for Alibaba Cloud API operations.
//!
//! One error enum is shared by every product crate. Remote failures carry the
//! provider's structured error body (`Code`, `Message`, `RequestId`) without
//! any local translation; local failures cover parameter validation and
//! client configuration only.

use thiserror::Error;

/// Main error type for Alibaba Cloud API operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Client or credentials configuration is invalid
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A request parameter was rejected before any call was made
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Endpoint URL could not be constructed or parsed
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// HTTP transport failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Request timed out
    #[error("Timeout: {0}")]
    Timeout(String),

    /// The API endpoint is unreachable or returned a server error
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The API rejected the request; fields are the provider's error body
    #[error("API error {code}: {message} (request id {request_id})")]
    Api {
        /// Provider error code, e.g. `InvalidRegionId.NotFound`
        code: String,
        /// Provider error message
        message: String,
        /// Provider request id for support tickets
        request_id: String,
    },

    /// Response body could not be deserialized
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The client already has a request in flight
    #[error("Client busy: {0}")]
    Busy(String),
}

/// Specialized result type for Alibaba Cloud API operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns a stable code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::InvalidParameter(_) => "INVALID_PARAMETER",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::HttpError(_) => "HTTP_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            Self::Api { .. } => "API_ERROR",
            Self::ParseError(_) => "PARSE_ERROR",
            Self::Busy(_) => "BUSY",
        }
    }

    /// Returns true if the failure happened before anything was sent.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(
            self,
            Self::ConfigError(_)
                | Self::InvalidParameter(_)
                | Self::InvalidEndpoint(_)
                | Self::Busy(_)
        )
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::ServiceUnavailable(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ConfigError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::ConfigError("test".to_string()).error_code(),
            "CONFIG_ERROR"
        );
        assert_eq!(
            Error::InvalidParameter("test".to_string()).error_code(),
            "INVALID_PARAMETER"
        );
        assert_eq!(
            Error::InvalidEndpoint("test".to_string()).error_code(),
            "INVALID_ENDPOINT"
        );
        assert_eq!(
            Error::HttpError("test".to_string()).error_code(),
            "HTTP_ERROR"
        );
        assert_eq!(Error::Timeout("test".to_string()).error_code(), "TIMEOUT");
        assert_eq!(
            Error::ServiceUnavailable("test".to_string()).error_code(),
            "SERVICE_UNAVAILABLE"
        );
        assert_eq!(
            Error::Api {
                code: "InvalidRegionId.NotFound".to_string(),
                message: "msg".to_string(),
                request_id: "req".to_string(),
            }
            .error_code(),
            "API_ERROR"
        );
        assert_eq!(
            Error::ParseError("test".to_string()).error_code(),
            "PARSE_ERROR"
        );
        assert_eq!(Error::Busy("test".to_string()).error_code(), "BUSY");
    }

    #[test]
    fn test_error_display() {
        let err = Error::Api {
            code: "Throttling".to_string(),
            message: "Request was denied".to_string(),
            request_id: "ABCD-1234".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error Throttling: Request was denied (request id ABCD-1234)"
        );

        let err = Error::Busy("ecs".to_string());
        assert_eq!(err.to_string(), "Client busy: ecs");
    }

    #[test]
    fn test_is_local() {
        assert!(Error::InvalidParameter("proto".to_string()).is_local());
        assert!(Error::ConfigError("bad".to_string()).is_local());
        assert!(Error::Busy("ecs".to_string()).is_local());

        assert!(!Error::Timeout("t".to_string()).is_local());
        assert!(!Error::Api {
            code: "c".to_string(),
            message: "m".to_string(),
            request_id: "r".to_string(),
        }
        .is_local());
    }

    #[test]
    fn test_from_url_parse_error() {
        let err = url::Url::parse("not a url").unwrap_err();
        let converted: Error = err.into();
        assert!(matches!(converted, Error::InvalidEndpoint(_)));
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let converted: Error = err.into();
        assert!(matches!(converted, Error::ParseError(_)));
    }

    #[test]
    fn test_error_clone_and_eq() {
        let err = Error::Busy("vpc".to_string());
        let cloned = err.clone();
        assert_eq!(err, cloned);
        assert_ne!(err, Error::Busy("slb".to_string()));
    }
}
