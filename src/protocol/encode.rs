//! Request parameter encoding.
//!
//! Lists are flattened to indexed keys, e.g.
//! `Destination.ToAddresses.member.1`, `Destination.ToAddresses.member.2`.
//! Indices start at 1 for every list.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fmt;
use std::str::FromStr;

use crate::error::SesError;
use crate::http::QueryParams;
use crate::types::{EmailAddress, EmailMessage, RawEmailMessage};

/// The list a recipient belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipientRole {
    /// `Destination.ToAddresses`
    To,
    /// `Destination.CcAddresses`
    Cc,
    /// `Destination.BccAddresses`
    Bcc,
    /// `ReplyToAddresses`
    ReplyTo,
    /// `Destinations` (raw email envelope recipients)
    Destinations,
}

impl RecipientRole {
    /// Key prefix before the 1-based index.
    pub fn key_prefix(&self) -> &'static str {
        match self {
            RecipientRole::To => "Destination.ToAddresses.member.",
            RecipientRole::Cc => "Destination.CcAddresses.member.",
            RecipientRole::Bcc => "Destination.BccAddresses.member.",
            RecipientRole::ReplyTo => "ReplyToAddresses.member.",
            RecipientRole::Destinations => "Destinations.member.",
        }
    }
}

impl fmt::Display for RecipientRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecipientRole::To => "to",
            RecipientRole::Cc => "cc",
            RecipientRole::Bcc => "bcc",
            RecipientRole::ReplyTo => "reply_to",
            RecipientRole::Destinations => "destinations",
        };
        f.write_str(name)
    }
}

impl FromStr for RecipientRole {
    type Err = SesError;

    /// Case-insensitive. Anything other than `to`, `cc`, `bcc`,
    /// `replyto`/`reply_to` or `destinations` is a validation error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "to" => Ok(RecipientRole::To),
            "cc" => Ok(RecipientRole::Cc),
            "bcc" => Ok(RecipientRole::Bcc),
            "replyto" | "reply_to" => Ok(RecipientRole::ReplyTo),
            "destinations" => Ok(RecipientRole::Destinations),
            _ => Err(SesError::validation(
                "role",
                format!(
                    "'{}' is not one of to, cc, bcc, reply_to, destinations",
                    s
                ),
            )),
        }
    }
}

/// Indexed keys for one recipient list.
///
/// # Examples
///
/// ```rust
/// use integrations_aws_ses_query::protocol::encode::encode_recipients;
/// use integrations_aws_ses_query::protocol::RecipientRole;
///
/// let pairs = encode_recipients(RecipientRole::Cc, &["<c@example.com>"]);
/// assert_eq!(
///     pairs,
///     vec![("Destination.CcAddresses.member.1".to_string(), "<c@example.com>".to_string())]
/// );
/// ```
pub fn encode_recipients<S: AsRef<str>>(
    role: RecipientRole,
    addresses: &[S],
) -> Vec<(String, String)> {
    addresses
        .iter()
        .enumerate()
        .map(|(i, address)| {
            (
                format!("{}{}", role.key_prefix(), i + 1),
                address.as_ref().to_string(),
            )
        })
        .collect()
}

fn formatted(addresses: &[EmailAddress]) -> Vec<String> {
    addresses.iter().map(EmailAddress::formatted).collect()
}

/// Parameters of `SendEmail`.
///
/// Text and HTML data keys are always present, even when empty. The
/// `ReturnPath` key is only added for a non-empty return path.
pub fn encode_send_email(message: &EmailMessage) -> QueryParams {
    let mut params = QueryParams::new();

    params.insert(
        "Source",
        message
            .source()
            .map(EmailAddress::formatted)
            .unwrap_or_default(),
    );
    params.insert("Message.Subject.Data", message.subject());
    params.insert("Message.Body.Text.Data", message.text_body());
    params.insert("Message.Body.Text.Charset", message.text_charset());
    params.insert("Message.Body.Html.Data", message.html_body());
    params.insert("Message.Body.Html.Charset", message.html_charset());

    params.extend(encode_recipients(RecipientRole::To, &formatted(message.to())));
    params.extend(encode_recipients(RecipientRole::Cc, &formatted(message.cc())));
    params.extend(encode_recipients(RecipientRole::Bcc, &formatted(message.bcc())));
    params.extend(encode_recipients(
        RecipientRole::ReplyTo,
        &formatted(message.reply_to()),
    ));

    if let Some(return_path) = message.return_path().filter(|p| !p.is_empty()) {
        params.insert("ReturnPath", return_path);
    }

    params
}

/// Parameters of `SendRawEmail`.
///
/// The message bytes are sent base64-encoded in `RawMessage.Data`.
pub fn encode_send_raw_email(message: &RawEmailMessage) -> QueryParams {
    let mut params = QueryParams::new();

    params.insert("RawMessage.Data", STANDARD.encode(message.data()));

    if let Some(source) = message.source() {
        params.insert("Source", source);
    }

    params.extend(encode_recipients(
        RecipientRole::Destinations,
        message.destinations(),
    ));

    params
}

/// Parameters of `VerifyEmailAddress` and `DeleteVerifiedEmailAddress`.
pub fn encode_email_address(address: &str) -> QueryParams {
    let mut params = QueryParams::new();
    params.insert("EmailAddress", address);
    params
}
