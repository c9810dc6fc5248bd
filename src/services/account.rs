//! Account-level operations.

use std::sync::Arc;

use crate::error::SesResult;
use crate::http::{HttpClient, QueryParams};
use crate::protocol::decode::decode_get_send_quota;
use crate::protocol::Action;
use crate::types::SendQuotaResult;

use super::SesService;

/// Service for account-level operations.
#[derive(Clone)]
pub struct AccountService {
    http_client: Arc<dyn HttpClient>,
}

impl AccountService {
    /// Create a new account service.
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self { http_client }
    }

    /// Read the sending limits and the usage of the last 24 hours.
    pub async fn get_send_quota(&self) -> SesResult<SendQuotaResult> {
        let body = self
            .call(Action::GetSendQuota, QueryParams::new())
            .await?;
        decode_get_send_quota(&body)
    }
}

impl SesService for AccountService {
    fn http_client(&self) -> &Arc<dyn HttpClient> {
        &self.http_client
    }
}
