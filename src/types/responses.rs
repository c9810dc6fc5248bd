//! Typed results of the Query API operations.

use serde::{Deserialize, Serialize};

/// Result of `SendEmail`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendEmailResult {
    /// Message ID assigned by SES.
    pub message_id: String,
    /// Request ID from `ResponseMetadata`.
    pub request_id: Option<String>,
}

/// Result of `SendRawEmail`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendRawEmailResult {
    /// Message ID assigned by SES.
    pub message_id: String,
    /// Request ID from `ResponseMetadata`.
    pub request_id: Option<String>,
}

/// Result of `ListVerifiedEmailAddresses`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListVerifiedEmailAddressesResult {
    /// Verified addresses in the order SES returned them.
    pub addresses: Vec<String>,
    /// Request ID from `ResponseMetadata`.
    pub request_id: Option<String>,
}

/// Result of `GetSendQuota`.
///
/// SES returns decimal strings; they are kept verbatim and parsed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendQuotaResult {
    /// Maximum messages per 24 hours.
    pub max_24_hour_send: String,
    /// Maximum messages per second.
    pub max_send_rate: String,
    /// Messages sent during the last 24 hours.
    pub sent_last_24_hours: String,
    /// Request ID from `ResponseMetadata`.
    pub request_id: Option<String>,
}

impl SendQuotaResult {
    /// `max_24_hour_send` as a number, if it parses.
    pub fn max_24_hour_send(&self) -> Option<f64> {
        self.max_24_hour_send.trim().parse().ok()
    }

    /// `max_send_rate` as a number, if it parses.
    pub fn max_send_rate(&self) -> Option<f64> {
        self.max_send_rate.trim().parse().ok()
    }

    /// `sent_last_24_hours` as a number, if it parses.
    pub fn sent_last_24_hours(&self) -> Option<f64> {
        self.sent_last_24_hours.trim().parse().ok()
    }

    /// Messages that can still be sent in the current 24-hour window.
    pub fn remaining_24_hour_send(&self) -> Option<f64> {
        Some((self.max_24_hour_send()? - self.sent_last_24_hours()?).max(0.0))
    }
}

/// Result of operations that return nothing but metadata
/// (`VerifyEmailAddress`, `DeleteVerifiedEmailAddress`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMetadata {
    /// Request ID, if SES sent one.
    pub request_id: Option<String>,
}

/// Decoded result of any operation, one variant per action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiResult {
    /// `SendEmail`.
    SendEmail(SendEmailResult),
    /// `SendRawEmail`.
    SendRawEmail(SendRawEmailResult),
    /// `VerifyEmailAddress`.
    VerifyEmailAddress(ResponseMetadata),
    /// `ListVerifiedEmailAddresses`.
    ListVerifiedEmailAddresses(ListVerifiedEmailAddressesResult),
    /// `DeleteVerifiedEmailAddress`.
    DeleteVerifiedEmailAddress(ResponseMetadata),
    /// `GetSendQuota`.
    GetSendQuota(SendQuotaResult),
}

impl ApiResult {
    /// Request ID carried by the result.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            ApiResult::SendEmail(r) => r.request_id.as_deref(),
            ApiResult::SendRawEmail(r) => r.request_id.as_deref(),
            ApiResult::VerifyEmailAddress(r) | ApiResult::DeleteVerifiedEmailAddress(r) => {
                r.request_id.as_deref()
            }
            ApiResult::ListVerifiedEmailAddresses(r) => r.request_id.as_deref(),
            ApiResult::GetSendQuota(r) => r.request_id.as_deref(),
        }
    }

    /// Message ID for the send operations.
    pub fn message_id(&self) -> Option<&str> {
        match self {
            ApiResult::SendEmail(r) => Some(&r.message_id),
            ApiResult::SendRawEmail(r) => Some(&r.message_id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quota(max: &str, rate: &str, sent: &str) -> SendQuotaResult {
        SendQuotaResult {
            max_24_hour_send: max.to_string(),
            max_send_rate: rate.to_string(),
            sent_last_24_hours: sent.to_string(),
            request_id: None,
        }
    }

    #[test]
    fn test_quota_accessors() {
        let q = quota("200.0", "1.0", "12.0");
        assert_eq!(q.max_24_hour_send(), Some(200.0));
        assert_eq!(q.max_send_rate(), Some(1.0));
        assert_eq!(q.sent_last_24_hours(), Some(12.0));
        assert_eq!(q.remaining_24_hour_send(), Some(188.0));
    }

    #[test]
    fn test_quota_accessors_unparseable() {
        let q = quota("lots", "1.0", "0");
        assert_eq!(q.max_24_hour_send(), None);
        assert_eq!(q.remaining_24_hour_send(), None);
    }

    #[test]
    fn test_api_result_accessors() {
        let result = ApiResult::SendEmail(SendEmailResult {
            message_id: "m-1".to_string(),
            request_id: Some("r-1".to_string()),
        });
        assert_eq!(result.message_id(), Some("m-1"));
        assert_eq!(result.request_id(), Some("r-1"));

        let result = ApiResult::VerifyEmailAddress(ResponseMetadata::default());
        assert_eq!(result.message_id(), None);
        assert_eq!(result.request_id(), None);
    }
}
