//! AWS SES Query API (2010-12-01) Integration Module
//!
//! Async client for the classic Amazon SES Query API.
//!
//! # Features
//!
//! - **Operations**: SendEmail, SendRawEmail, VerifyEmailAddress,
//!   ListVerifiedEmailAddresses, DeleteVerifiedEmailAddress, GetSendQuota
//! - **AWS3-HTTPS signing**: HMAC-SHA256 over the request date
//! - **XML decoding**: typed results, with `<Error>` bodies mapped to
//!   [`SesError::Remote`]
//! - **Mail transport**: [`mail::SesMailTransport`] sends framework-assembled
//!   messages as raw email
//! - **Credentials**: static keys or the `AWS_*` environment variables
//!
//! Each call is a single signed POST. Nothing is retried.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use integrations_aws_ses_query::{EmailBuilder, SesClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SesClient::from_env()?;
//!
//!     let message = EmailBuilder::new()
//!         .from_with_name("sender@example.com", "Sender")
//!         .to("recipient@example.com")
//!         .subject("Hello from SES")
//!         .text("This is a test email.")
//!         .build()?;
//!
//!     let result = client.send_email(&message).await?;
//!     println!("Message sent! ID: {}", result.message_id);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Layout
//!
//! - [`builders`]: fluent construction of [`EmailMessage`]
//! - [`protocol`]: parameter encoding and XML decoding per [`protocol::Action`]
//! - [`signing`]: AWS3-HTTPS headers
//! - [`http`]: signed transport
//! - [`services`]: one service per group of operations
//! - [`client`]: [`SesClient`], the entry point
//! - [`mail`]: the mail transport adapter
//!
//! # Handling errors
//!
//! ```rust,no_run
//! use integrations_aws_ses_query::{SesClient, SesError};
//!
//! # async fn example(client: &SesClient) {
//! match client.get_send_quota().await {
//!     Ok(quota) => println!("{:?} left", quota.remaining_24_hour_send()),
//!     Err(SesError::Remote { code, message, .. }) => eprintln!("{}: {}", code, message),
//!     Err(other) if other.is_retryable() => eprintln!("try again later: {}", other),
//!     Err(other) => eprintln!("{}", other),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod builders;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod http;
pub mod mail;
pub mod protocol;
pub mod services;
pub mod signing;
pub mod types;

pub use client::{SesClient, SesClientBuilder};

pub use config::{ConfigError, SesConfig, SesConfigBuilder};

pub use credentials::{
    AwsCredentials, CredentialError, CredentialProvider, EnvironmentCredentialProvider,
    StaticCredentialProvider,
};

pub use error::{SesError, SesResult};

pub use http::{HttpClient, SesHttpClient, SesRequest, SesResponse};

pub use services::{AccountService, EmailService, IdentityService};

pub use protocol::{Action, RecipientRole};

pub use types::{
    ApiResult, EmailAddress, EmailMessage, ListVerifiedEmailAddressesResult, RawEmailMessage,
    ResponseMetadata, SendEmailResult, SendQuotaResult, SendRawEmailResult,
};

pub use builders::{BuilderError, EmailBuilder};

pub use mail::{MailTransport, OutboundMail, SesMailTransport};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_exports() {
        let _ = std::any::type_name::<SesError>();
        let _ = std::any::type_name::<SesConfig>();
        let _ = std::any::type_name::<AwsCredentials>();
        let _ = std::any::type_name::<EmailMessage>();
        let _ = std::any::type_name::<SesMailTransport>();
    }

    #[test]
    fn test_client_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<SesClient>();
    }
}
