//! Verified email address management.

use std::sync::Arc;

use crate::error::SesResult;
use crate::http::{HttpClient, QueryParams};
use crate::protocol::decode::{decode_list_verified_email_addresses, decode_metadata};
use crate::protocol::encode::encode_email_address;
use crate::protocol::Action;
use crate::types::{ListVerifiedEmailAddressesResult, ResponseMetadata};

use super::SesService;

/// Service for the verified-address operations.
#[derive(Clone)]
pub struct IdentityService {
    http_client: Arc<dyn HttpClient>,
}

impl IdentityService {
    /// Create a new identity service.
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self { http_client }
    }

    /// Ask SES to send a verification message to `address`.
    pub async fn verify_email_address(&self, address: &str) -> SesResult<ResponseMetadata> {
        let action = Action::VerifyEmailAddress;
        let body = self.call(action, encode_email_address(address)).await?;
        decode_metadata(action, &body)
    }

    /// List every verified address, in the order SES returns them.
    pub async fn list_verified_email_addresses(
        &self,
    ) -> SesResult<ListVerifiedEmailAddressesResult> {
        let body = self
            .call(Action::ListVerifiedEmailAddresses, QueryParams::new())
            .await?;
        decode_list_verified_email_addresses(&body)
    }

    /// Remove `address` from the verified list.
    pub async fn delete_verified_email_address(
        &self,
        address: &str,
    ) -> SesResult<ResponseMetadata> {
        let action = Action::DeleteVerifiedEmailAddress;
        let body = self.call(action, encode_email_address(address)).await?;
        decode_metadata(action, &body)
    }
}

impl SesService for IdentityService {
    fn http_client(&self) -> &Arc<dyn HttpClient> {
        &self.http_client
    }
}
