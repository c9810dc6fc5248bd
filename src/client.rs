//! SES client and its builder.
//!
//! `SesClient` is the entry point for every operation. Services are created
//! lazily on first access and share one [`HttpClient`].
//!
//! # Example
//!
//! ```rust,no_run
//! use integrations_aws_ses_query::{EmailBuilder, SesClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SesClient::builder()
//!     .region("us-east-1")
//!     .credentials("AKID", "SECRET")
//!     .build()?;
//!
//! let message = EmailBuilder::new()
//!     .from("sender@example.com")
//!     .to("recipient@example.com")
//!     .subject("Hello")
//!     .text("Email body")
//!     .build()?;
//!
//! let result = client.send_email(&message).await?;
//! println!("Message ID: {}", result.message_id);
//! # Ok(())
//! # }
//! ```

use once_cell::sync::OnceCell;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{SesConfig, SesConfigBuilder};
use crate::credentials::CredentialProvider;
use crate::error::SesResult;
use crate::http::{HttpClient, SesHttpClient, SesRequest};
use crate::protocol::{self, Action};
use crate::services::{AccountService, EmailService, IdentityService};
use crate::types::{
    ApiResult, EmailMessage, ListVerifiedEmailAddressesResult, RawEmailMessage,
    ResponseMetadata, SendEmailResult, SendQuotaResult, SendRawEmailResult,
};

/// Client for the SES Query API.
///
/// # Cloning
///
/// Clones share the same configuration and HTTP client. Share a client
/// across tasks by cloning it; there is no process-wide default.
///
/// # Example
///
/// ```rust,no_run
/// use integrations_aws_ses_query::SesClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SesClient::from_env()?;
///
/// let client_clone = client.clone();
/// tokio::spawn(async move {
///     let _ = client_clone.get_send_quota().await;
/// });
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SesClient {
    config: Arc<SesConfig>,
    http_client: Arc<dyn HttpClient>,

    email_service: OnceCell<EmailService>,
    identity_service: OnceCell<IdentityService>,
    account_service: OnceCell<AccountService>,
}

impl SesClient {
    /// Create a client that sends through [`SesHttpClient`].
    ///
    /// # Errors
    ///
    /// Returns `SesError::Configuration` if the endpoint is invalid or the
    /// HTTP client cannot be built.
    pub fn new(config: SesConfig) -> SesResult<Self> {
        let http_client = Arc::new(SesHttpClient::new(config.clone())?);
        Ok(Self::with_http_client(config, http_client))
    }

    /// Create a client around an existing [`HttpClient`].
    pub fn with_http_client(config: SesConfig, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            config: Arc::new(config),
            http_client,
            email_service: OnceCell::new(),
            identity_service: OnceCell::new(),
            account_service: OnceCell::new(),
        }
    }

    /// Create a client from environment variables.
    ///
    /// See [`SesConfig::from_env`].
    pub fn from_env() -> SesResult<Self> {
        Self::new(SesConfig::from_env()?)
    }

    /// Create a new client builder.
    pub fn builder() -> SesClientBuilder {
        SesClientBuilder::default()
    }

    /// The client configuration.
    pub fn config(&self) -> &SesConfig {
        &self.config
    }

    /// The HTTP client shared by all services.
    pub fn http_client(&self) -> &Arc<dyn HttpClient> {
        &self.http_client
    }

    /// `SendEmail` and `SendRawEmail`.
    pub fn emails(&self) -> &EmailService {
        self.email_service
            .get_or_init(|| EmailService::new(self.http_client.clone()))
    }

    /// The verified-address operations.
    pub fn identities(&self) -> &IdentityService {
        self.identity_service
            .get_or_init(|| IdentityService::new(self.http_client.clone()))
    }

    /// `GetSendQuota`.
    pub fn account(&self) -> &AccountService {
        self.account_service
            .get_or_init(|| AccountService::new(self.http_client.clone()))
    }

    /// Send a formatted message.
    pub async fn send_email(&self, message: &EmailMessage) -> SesResult<SendEmailResult> {
        self.emails().send_email(message).await
    }

    /// Send a pre-assembled MIME message.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use integrations_aws_ses_query::{RawEmailMessage, SesClient};
    ///
    /// # async fn example(client: &SesClient) -> Result<(), Box<dyn std::error::Error>> {
    /// let raw = RawEmailMessage::new("From: a@example.com\r\nTo: b@example.com\r\nSubject: Hi\r\n\r\nBody")
    ///     .add_destination("audit@example.com");
    ///
    /// let result = client.send_raw_email(&raw).await?;
    /// println!("Message ID: {}", result.message_id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send_raw_email(
        &self,
        message: &RawEmailMessage,
    ) -> SesResult<SendRawEmailResult> {
        self.emails().send_raw_email(message).await
    }

    /// Start verification of `address`.
    pub async fn verify_email_address(&self, address: &str) -> SesResult<ResponseMetadata> {
        self.identities().verify_email_address(address).await
    }

    /// List verified addresses.
    pub async fn list_verified_email_addresses(
        &self,
    ) -> SesResult<ListVerifiedEmailAddressesResult> {
        self.identities().list_verified_email_addresses().await
    }

    /// Remove `address` from the verified list.
    pub async fn delete_verified_email_address(
        &self,
        address: &str,
    ) -> SesResult<ResponseMetadata> {
        self.identities().delete_verified_email_address(address).await
    }

    /// Read the sending quota.
    pub async fn get_send_quota(&self) -> SesResult<SendQuotaResult> {
        self.account().get_send_quota().await
    }

    /// Send any request and decode the reply according to its action.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use integrations_aws_ses_query::http::{QueryParams, SesRequest};
    /// use integrations_aws_ses_query::protocol::Action;
    /// use integrations_aws_ses_query::{ApiResult, SesClient};
    ///
    /// # async fn example(client: &SesClient) -> Result<(), Box<dyn std::error::Error>> {
    /// let action: Action = "GetSendQuota".parse()?;
    /// match client.execute(SesRequest::new(action, QueryParams::new())).await? {
    ///     ApiResult::GetSendQuota(quota) => println!("{}", quota.max_24_hour_send),
    ///     other => println!("{:?}", other),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn execute(&self, request: SesRequest) -> SesResult<ApiResult> {
        let action: Action = request.action();
        let response = self.http_client.send_request(request).await?;
        protocol::decode(action, response.body_string()?)
    }
}

impl std::fmt::Debug for SesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SesClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Builder for [`SesClient`].
///
/// # Example
///
/// ```rust,no_run
/// use integrations_aws_ses_query::SesClient;
/// use std::time::Duration;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SesClient::builder()
///     .from_env()
///     .region("eu-west-1")
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SesClientBuilder {
    config: SesConfigBuilder,
    from_env: bool,
    http_client: Option<Arc<dyn HttpClient>>,
}

impl SesClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the region and credentials from the environment when they are
    /// not set explicitly.
    pub fn from_env(mut self) -> Self {
        self.from_env = true;
        self
    }

    /// Set the AWS region.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.config = self.config.region(region);
        self
    }

    /// Set a custom endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config = self.config.endpoint(endpoint);
        self
    }

    /// Set static credentials.
    pub fn credentials(mut self, access_key: &str, secret_key: &str) -> Self {
        self.config = self.config.credentials(access_key, secret_key);
        self
    }

    /// Set a custom credential provider.
    pub fn credentials_provider(mut self, provider: impl CredentialProvider + 'static) -> Self {
        self.config = self.config.credentials_provider(provider);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.config = self.config.timeout(duration);
        self
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, duration: Duration) -> Self {
        self.config = self.config.connect_timeout(duration);
        self
    }

    /// Set a custom user agent string.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.config = self.config.user_agent(ua);
        self
    }

    /// Send through this HTTP client instead of building a [`SesHttpClient`].
    pub fn http_client(mut self, http_client: Arc<dyn HttpClient>) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `SesError::Configuration` if the configuration is incomplete
    /// or invalid.
    pub fn build(self) -> SesResult<SesClient> {
        let config = if self.from_env {
            self.config.env_defaults()?
        } else {
            self.config
        }
        .build()?;

        match self.http_client {
            Some(http_client) => Ok(SesClient::with_http_client(config, http_client)),
            None => SesClient::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SesError;
    use crate::http::{MockHttpClient, QueryParams, SesResponse};
    use http::StatusCode;
    use std::collections::HashMap;

    fn config() -> SesConfig {
        SesConfig::builder()
            .region("us-east-1")
            .credentials("AKID", "SECRET")
            .build()
            .unwrap()
    }

    fn ok(body: &'static str) -> SesResult<SesResponse> {
        Ok(SesResponse::new(
            StatusCode::OK,
            HashMap::new(),
            body.as_bytes().to_vec(),
        ))
    }

    #[test]
    fn test_client_debug() {
        let client = SesClient::new(config()).unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("SesClient"));
        assert!(!debug.contains("SECRET"));
    }

    #[test]
    fn test_builder_requires_credentials() {
        let result = SesClient::builder().region("us-east-1").build();
        assert!(matches!(result, Err(SesError::Configuration { .. })));
    }

    #[test]
    fn test_builder_rejects_bad_endpoint() {
        let result = SesClient::builder()
            .credentials("AKID", "SECRET")
            .endpoint("not a url")
            .build();
        assert!(matches!(result, Err(SesError::Configuration { .. })));
    }

    #[test]
    fn test_services_are_created_once() {
        let client = SesClient::new(config()).unwrap();
        let first = client.emails() as *const EmailService;
        let second = client.emails() as *const EmailService;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_operations_share_http_client() {
        let mut mock = MockHttpClient::new();
        mock.expect_send_request()
            .withf(|request| request.action() == Action::GetSendQuota)
            .times(1)
            .returning(|_| {
                ok("<GetSendQuotaResponse><GetSendQuotaResult><Max24HourSend>10</Max24HourSend><MaxSendRate>1</MaxSendRate><SentLast24Hours>4</SentLast24Hours></GetSendQuotaResult></GetSendQuotaResponse>")
            });
        mock.expect_send_request()
            .withf(|request| request.action() == Action::VerifyEmailAddress)
            .times(1)
            .returning(|_| ok("<VerifyEmailAddressResponse/>"));

        let client = SesClient::builder()
            .credentials("AKID", "SECRET")
            .http_client(Arc::new(mock))
            .build()
            .unwrap();

        let quota = client.get_send_quota().await.unwrap();
        assert_eq!(quota.remaining_24_hour_send(), Some(6.0));

        let metadata = client.verify_email_address("a@example.com").await.unwrap();
        assert!(metadata.request_id.is_none());
    }

    #[tokio::test]
    async fn test_execute_returns_tagged_result() {
        let mut mock = MockHttpClient::new();
        mock.expect_send_request().returning(|_| {
            ok("<ListVerifiedEmailAddressesResponse><ListVerifiedEmailAddressesResult><VerifiedEmailAddresses><member>a@example.com</member></VerifiedEmailAddresses></ListVerifiedEmailAddressesResult></ListVerifiedEmailAddressesResponse>")
        });

        let client = SesClient::with_http_client(config(), Arc::new(mock));
        let result = client
            .execute(SesRequest::new(
                Action::ListVerifiedEmailAddresses,
                QueryParams::new(),
            ))
            .await
            .unwrap();

        match result {
            ApiResult::ListVerifiedEmailAddresses(list) => {
                assert_eq!(list.addresses, vec!["a@example.com"]);
            }
            other => panic!("Expected ListVerifiedEmailAddresses, got {:?}", other),
        }
    }
}
