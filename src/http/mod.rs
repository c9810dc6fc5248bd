//! HTTP plumbing for the SES Query API.
//!
//! ```text
//! ┌─────────────────┐
//! │  SesHttpClient  │  - Credential lookup
//! │                 │  - AWS3-HTTPS signing
//! │                 │  - Form body, one POST
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Transport     │  - HTTP transport abstraction
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   reqwest       │  - Actual HTTP implementation
//! └─────────────────┘
//! ```

mod client;
mod request;
mod response;
mod transport;

pub use client::{SesHttpClient, FORM_CONTENT_TYPE};
pub use request::{QueryParams, SesRequest};
pub use response::SesResponse;
pub use transport::{ReqwestTransport, Transport};

use crate::error::SesResult;
use async_trait::async_trait;

/// Sends Query API requests.
///
/// Services depend on this trait rather than on [`SesHttpClient`] so they can
/// be exercised against a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Sign and send a request, returning the raw response.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials cannot be resolved, signing fails or
    /// the HTTP exchange fails. The response body is not inspected.
    async fn send_request(&self, request: SesRequest) -> SesResult<SesResponse>;
}
