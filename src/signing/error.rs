//! Signing error types.

use thiserror::Error;

use crate::error::SesError;

/// Errors that can occur while signing a request.
#[derive(Debug, Error)]
pub enum SigningError {
    /// The credentials cannot be used for signing.
    ///
    /// # Examples
    ///
    /// ```
    /// use integrations_aws_ses_query::signing::SigningError;
    ///
    /// let error = SigningError::InvalidCredentials {
    ///     message: "Access key ID is required".to_string(),
    /// };
    /// assert_eq!(error.to_string(), "Invalid credentials for signing: Access key ID is required");
    /// ```
    #[error("Invalid credentials for signing: {message}")]
    InvalidCredentials {
        /// Why the credentials were rejected.
        message: String,
    },

    /// A computed value is not a legal HTTP header value.
    #[error("Invalid value for header {header}")]
    InvalidHeaderValue {
        /// The header that could not be set.
        header: String,
    },

    /// The signing operation failed.
    #[error("Signing failed: {message}")]
    SigningFailed {
        /// Details about the signing failure.
        message: String,
    },
}

impl From<SigningError> for SesError {
    fn from(err: SigningError) -> Self {
        SesError::Signing {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_header_value_error() {
        let error = SigningError::InvalidHeaderValue {
            header: "x-amz-security-token".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value for header x-amz-security-token"
        );
    }

    #[test]
    fn test_into_ses_error() {
        let error: SesError = SigningError::SigningFailed {
            message: "HMAC calculation failed".to_string(),
        }
        .into();

        match error {
            SesError::Signing { message } => {
                assert_eq!(message, "Signing failed: HMAC calculation failed")
            }
            other => panic!("Expected Signing error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SigningError>();
    }
}
