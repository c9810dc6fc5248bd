//! Error types for the AWS SES Query API client.
//!
//! Errors are grouped by where they originate so callers can react to each
//! category differently:
//!
//! - input errors ([`SesError::Validation`]) are raised before any network I/O
//! - transport errors ([`SesError::Transport`], [`SesError::Timeout`]) wrap the
//!   underlying HTTP failure and keep it as the error source
//! - remote errors ([`SesError::Remote`]) carry the `<Error>` body returned by SES
//! - decode errors ([`SesError::Decode`], [`SesError::UnexpectedResponse`]) mean
//!   the reply did not have the expected XML shape
//!
//! The client never retries. [`SesError::is_retryable`] is only a hint for
//! callers that implement their own policy.
//!
//! # Examples
//!
//! ```rust
//! use integrations_aws_ses_query::error::SesError;
//!
//! fn describe(error: &SesError) {
//!     if let Some(code) = error.error_code() {
//!         println!("SES rejected the request: {}", code);
//!     }
//!     if error.is_retryable() {
//!         println!("worth trying again later");
//!     }
//! }
//! ```

mod mapping;

pub use mapping::{is_retryable_code, AwsErrorResponse};

use thiserror::Error;

use crate::config::ConfigError;
use crate::credentials::CredentialError;

/// Result alias used throughout the crate.
pub type SesResult<T> = Result<T, SesError>;

/// Top-level error type for the SES Query API client.
#[derive(Debug, Error)]
pub enum SesError {
    /// Configuration-related errors.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error.
        message: String,
        /// Optional underlying error source.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Credentials are missing, invalid or expired.
    #[error("Credential error: {message}")]
    Credential {
        /// Description of the credential error.
        message: String,
    },

    /// The request could not be signed.
    #[error("Signing error: {message}")]
    Signing {
        /// Description of the signing error.
        message: String,
    },

    /// Caller supplied a structurally invalid value.
    ///
    /// Raised synchronously, before anything is sent.
    #[error("Validation error: {message}")]
    Validation {
        /// Description of the validation error.
        message: String,
        /// Optional field name that failed validation.
        field: Option<String>,
    },

    /// The HTTP exchange failed (DNS, TCP, TLS, reading the body).
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the transport error.
        message: String,
        /// Underlying error source.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The request did not complete within the configured timeout.
    #[error("Timeout: {message}")]
    Timeout {
        /// Description of the timeout.
        message: String,
        /// Underlying error source.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// SES answered with an `<Error>` document.
    ///
    /// `code` and `message` are the service's values, verbatim. A missing
    /// `<Code>` or `<Message>` element yields an empty string.
    #[error("AWS SES error: {code} - {message}")]
    Remote {
        /// SES error code (e.g. `Throttling`, `MessageRejected`).
        code: String,
        /// Human-readable message from SES.
        message: String,
        /// Fault side reported by SES (`Sender` or `Receiver`), if present.
        error_type: Option<String>,
        /// Request ID for support tickets, if present.
        request_id: Option<String>,
    },

    /// The response body is not parseable XML.
    #[error("Decode error: {message}")]
    Decode {
        /// Description of the parse failure.
        message: String,
    },

    /// A success response lacked a field the operation requires.
    #[error("Unexpected response to {action}: missing {missing}")]
    UnexpectedResponse {
        /// Action whose response was malformed.
        action: String,
        /// Path of the missing element.
        missing: String,
    },
}

impl SesError {
    /// Build a validation error for a named field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SesError::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Returns true if repeating the call could succeed.
    ///
    /// Transport failures, timeouts and the throttling/availability codes
    /// returned by SES count as retryable. The client itself never retries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use integrations_aws_ses_query::error::SesError;
    ///
    /// let error = SesError::Remote {
    ///     code: "Throttling".to_string(),
    ///     message: "Rate exceeded".to_string(),
    ///     error_type: Some("Sender".to_string()),
    ///     request_id: None,
    /// };
    ///
    /// assert!(error.is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        match self {
            SesError::Transport { .. } | SesError::Timeout { .. } => true,
            SesError::Remote { code, .. } => is_retryable_code(code),
            _ => false,
        }
    }

    /// Returns the SES error code for remote errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use integrations_aws_ses_query::error::SesError;
    ///
    /// let error = SesError::Remote {
    ///     code: "MessageRejected".to_string(),
    ///     message: "Email address is not verified.".to_string(),
    ///     error_type: Some("Sender".to_string()),
    ///     request_id: Some("abc-123".to_string()),
    /// };
    ///
    /// assert_eq!(error.error_code(), Some("MessageRejected"));
    /// ```
    pub fn error_code(&self) -> Option<&str> {
        match self {
            SesError::Remote { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }

    /// Returns the SES request ID for remote errors, if SES supplied one.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            SesError::Remote { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SesError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SesError::Timeout {
                message: format!("Error in request to AWS service: {}", err),
                source: Some(Box::new(err)),
            }
        } else {
            SesError::Transport {
                message: format!("Error in request to AWS service: {}", err),
                source: Some(Box::new(err)),
            }
        }
    }
}

impl From<quick_xml::Error> for SesError {
    fn from(err: quick_xml::Error) -> Self {
        SesError::Decode {
            message: err.to_string(),
        }
    }
}

impl From<ConfigError> for SesError {
    fn from(err: ConfigError) -> Self {
        SesError::Configuration {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<CredentialError> for SesError {
    fn from(err: CredentialError) -> Self {
        SesError::Credential {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(code: &str) -> SesError {
        SesError::Remote {
            code: code.to_string(),
            message: "msg".to_string(),
            error_type: None,
            request_id: Some("req-9".to_string()),
        }
    }

    #[test]
    fn test_is_retryable() {
        assert!(remote("Throttling").is_retryable());
        assert!(remote("ServiceUnavailable").is_retryable());
        assert!(!remote("MessageRejected").is_retryable());

        let transport = SesError::Transport {
            message: "connection refused".to_string(),
            source: None,
        };
        assert!(transport.is_retryable());

        let validation = SesError::validation("role", "unknown role");
        assert!(!validation.is_retryable());

        let decode = SesError::Decode {
            message: "bad xml".to_string(),
        };
        assert!(!decode.is_retryable());
    }

    #[test]
    fn test_error_code_and_request_id() {
        let error = remote("InvalidParameterValue");
        assert_eq!(error.error_code(), Some("InvalidParameterValue"));
        assert_eq!(error.request_id(), Some("req-9"));

        let other = SesError::Credential {
            message: "missing".to_string(),
        };
        assert_eq!(other.error_code(), None);
        assert_eq!(other.request_id(), None);
    }

    #[test]
    fn test_error_display() {
        let error = SesError::Remote {
            code: "Throttling".to_string(),
            message: "Rate exceeded".to_string(),
            error_type: None,
            request_id: None,
        };
        assert_eq!(error.to_string(), "AWS SES error: Throttling - Rate exceeded");

        let error = SesError::UnexpectedResponse {
            action: "SendEmail".to_string(),
            missing: "SendEmailResult/MessageId".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unexpected response to SendEmail: missing SendEmailResult/MessageId"
        );
    }

    #[test]
    fn test_from_config_error() {
        let error: SesError = ConfigError::MissingField {
            field: "credentials_provider".to_string(),
        }
        .into();

        assert!(matches!(error, SesError::Configuration { .. }));
        assert!(error.to_string().contains("credentials_provider"));
    }

    #[test]
    fn test_from_credential_error() {
        let error: SesError = CredentialError::Expired.into();
        assert!(matches!(error, SesError::Credential { .. }));
    }
}
