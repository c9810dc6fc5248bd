//! Mapping of SES `<Error>` documents to [`SesError`].
//!
//! The Query API reports failures as XML:
//!
//! ```xml
//! <ErrorResponse xmlns="http://ses.amazonaws.com/doc/2010-12-01/">
//!   <Error>
//!     <Type>Sender</Type>
//!     <Code>Throttling</Code>
//!     <Message>Rate exceeded</Message>
//!   </Error>
//!   <RequestId>a1b2c3</RequestId>
//! </ErrorResponse>
//! ```
//!
//! The decoder extracts the fields into [`AwsErrorResponse`] and converts it
//! into [`SesError::Remote`]. The HTTP status is not consulted; the body
//! decides.

use super::SesError;
use serde::{Deserialize, Serialize};

/// Error codes that indicate a transient condition on the SES side.
const RETRYABLE_CODES: &[&str] = &[
    "Throttling",
    "ThrottlingException",
    "ServiceUnavailable",
    "InternalFailure",
    "RequestTimeout",
];

/// Fields of an SES `<Error>` element.
///
/// Every field is optional in the wire format. Missing `Code` and `Message`
/// children become empty strings rather than decode failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AwsErrorResponse {
    /// `<Type>`: `Sender` or `Receiver`.
    pub error_type: Option<String>,
    /// `<Code>`.
    pub code: String,
    /// `<Message>`.
    pub message: String,
    /// `<RequestId>` from the enclosing document.
    pub request_id: Option<String>,
}

impl From<AwsErrorResponse> for SesError {
    fn from(error: AwsErrorResponse) -> Self {
        SesError::Remote {
            code: error.code,
            message: error.message,
            error_type: error.error_type,
            request_id: error.request_id,
        }
    }
}

/// Returns true if the SES error code describes a transient condition.
///
/// # Examples
///
/// ```rust
/// use integrations_aws_ses_query::error::is_retryable_code;
///
/// assert!(is_retryable_code("Throttling"));
/// assert!(!is_retryable_code("MessageRejected"));
/// ```
pub fn is_retryable_code(code: &str) -> bool {
    RETRYABLE_CODES.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_keeps_values_verbatim() {
        let response = AwsErrorResponse {
            error_type: Some("Sender".to_string()),
            code: "MessageRejected".to_string(),
            message: "Email address is not verified.".to_string(),
            request_id: Some("abc-123".to_string()),
        };

        match SesError::from(response) {
            SesError::Remote {
                code,
                message,
                error_type,
                request_id,
            } => {
                assert_eq!(code, "MessageRejected");
                assert_eq!(message, "Email address is not verified.");
                assert_eq!(error_type.as_deref(), Some("Sender"));
                assert_eq!(request_id.as_deref(), Some("abc-123"));
            }
            other => panic!("Expected Remote error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_is_empty() {
        let response = AwsErrorResponse::default();
        assert!(response.code.is_empty());
        assert!(response.message.is_empty());
        assert!(response.error_type.is_none());
    }

    #[test]
    fn test_retryable_codes() {
        for code in RETRYABLE_CODES {
            assert!(is_retryable_code(code));
        }
        assert!(!is_retryable_code("InvalidParameterValue"));
        assert!(!is_retryable_code(""));
    }
}
