//! Service adapters over the Query API.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │              Service Adapters (this module)             │
//! │  - emails: SendEmail, SendRawEmail                      │
//! │  - identities: Verify / List / DeleteVerifiedEmail...   │
//! │  - account: GetSendQuota                                │
//! └──────────────────────┬──────────────────────────────────┘
//!                        │  SesRequest (Action + QueryParams)
//!                        ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                   HttpClient                            │
//! │  (credentials, AWS3-HTTPS signing, one POST)            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Each service encodes its input with [`crate::protocol::encode`], sends it
//! through the shared [`HttpClient`] and decodes the XML reply with
//! [`crate::protocol::decode`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use integrations_aws_ses_query::config::SesConfig;
//! use integrations_aws_ses_query::http::SesHttpClient;
//! use integrations_aws_ses_query::services::AccountService;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SesConfig::builder()
//!     .region("us-east-1")
//!     .credentials("access_key", "secret_key")
//!     .build()?;
//!
//! let account = AccountService::new(Arc::new(SesHttpClient::new(config)?));
//! let quota = account.get_send_quota().await?;
//! println!("{} left today", quota.remaining_24_hour_send().unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod account;
pub mod emails;
pub mod identities;

pub use account::AccountService;
pub use emails::EmailService;
pub use identities::IdentityService;

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::SesResult;
use crate::http::{HttpClient, QueryParams, SesRequest};
use crate::protocol::Action;

/// Common trait for all SES services.
#[async_trait]
pub trait SesService: Send + Sync {
    /// The HTTP client requests go through.
    fn http_client(&self) -> &Arc<dyn HttpClient>;

    /// Send one action and return the response body as text.
    ///
    /// The HTTP status is ignored; decoding the body decides success.
    async fn call(&self, action: Action, params: QueryParams) -> SesResult<String> {
        let response = self
            .http_client()
            .send_request(SesRequest::new(action, params))
            .await?;

        Ok(response.body_string()?.to_string())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use http::StatusCode;
    use std::collections::HashMap;

    use crate::http::SesResponse;

    /// A response with the given status and XML body.
    pub fn xml_response(status: StatusCode, body: &str) -> SesResponse {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "text/xml".to_string());
        SesResponse::new(status, headers, body.as_bytes().to_vec())
    }
}
