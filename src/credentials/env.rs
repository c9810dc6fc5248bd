//! Environment variable credentials provider.

use super::{AwsCredentials, CredentialProvider};
use crate::credentials::error::CredentialError;
use async_trait::async_trait;
use std::env;

/// Access key ID variable.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
/// Secret access key variable.
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
/// Optional session token variable.
pub const AWS_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";

/// Reads credentials from the process environment on every call.
///
/// - `AWS_ACCESS_KEY_ID` (required)
/// - `AWS_SECRET_ACCESS_KEY` (required)
/// - `AWS_SESSION_TOKEN` (optional; ignored when empty)
#[derive(Debug, Clone, Default)]
pub struct EnvironmentCredentialProvider;

impl EnvironmentCredentialProvider {
    /// Create a new environment credentials provider.
    pub fn new() -> Self {
        Self
    }

    /// Build credentials from an arbitrary variable lookup.
    fn resolve<F>(lookup: F) -> Result<AwsCredentials, CredentialError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| -> Result<String, CredentialError> {
            match lookup(name) {
                None => Err(CredentialError::Missing {
                    message: format!("{} environment variable not set", name),
                }),
                Some(value) if value.is_empty() => Err(CredentialError::Invalid {
                    message: format!("{} is empty", name),
                }),
                Some(value) => Ok(value),
            }
        };

        let access_key_id = required(AWS_ACCESS_KEY_ID)?;
        let secret_access_key = required(AWS_SECRET_ACCESS_KEY)?;
        let credentials = AwsCredentials::new(access_key_id, secret_access_key);

        Ok(match lookup(AWS_SESSION_TOKEN).filter(|t| !t.is_empty()) {
            Some(token) => credentials.with_session_token(token),
            None => credentials,
        })
    }
}

#[async_trait]
impl CredentialProvider for EnvironmentCredentialProvider {
    async fn credentials(&self) -> Result<AwsCredentials, CredentialError> {
        Self::resolve(|name| env::var(name).ok())
    }
}
