//! Wire protocol of the SES Query API (version `2010-12-01`).
//!
//! - [`encode`] turns typed inputs into flat request parameters
//! - [`decode`] turns XML replies into typed results or errors
//! - [`xml`] is the element tree the decoder reads from

pub mod decode;
pub mod encode;
pub mod xml;

pub use decode::decode;
pub use encode::RecipientRole;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SesError;

/// The operations this client supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Send a formatted message.
    SendEmail,
    /// Send a raw MIME message.
    SendRawEmail,
    /// Start verification of an address.
    VerifyEmailAddress,
    /// List verified addresses.
    ListVerifiedEmailAddresses,
    /// Remove a verified address.
    DeleteVerifiedEmailAddress,
    /// Read the sending quota.
    GetSendQuota,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Action; 6] = [
        Action::SendEmail,
        Action::SendRawEmail,
        Action::VerifyEmailAddress,
        Action::ListVerifiedEmailAddresses,
        Action::DeleteVerifiedEmailAddress,
        Action::GetSendQuota,
    ];

    /// Value of the `Action` request parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::SendEmail => "SendEmail",
            Action::SendRawEmail => "SendRawEmail",
            Action::VerifyEmailAddress => "VerifyEmailAddress",
            Action::ListVerifiedEmailAddresses => "ListVerifiedEmailAddresses",
            Action::DeleteVerifiedEmailAddress => "DeleteVerifiedEmailAddress",
            Action::GetSendQuota => "GetSendQuota",
        }
    }

    /// Name of the `<...Result>` element in a success response.
    pub fn result_element(&self) -> String {
        format!("{}Result", self.as_str())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = SesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .iter()
            .copied()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| SesError::validation("action", format!("Unknown action '{}'", s)))
    }
}
