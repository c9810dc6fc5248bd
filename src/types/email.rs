//! Outgoing message types.

use serde::{Deserialize, Serialize};

use super::EmailAddress;

/// Charset used for bodies when none is given.
pub const DEFAULT_CHARSET: &str = "utf-8";

/// A formatted message for `SendEmail`.
///
/// Built with [`EmailBuilder`](crate::builders::EmailBuilder) and immutable
/// afterwards. Recipient lists keep the order in which addresses were added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    pub(crate) source: Option<EmailAddress>,
    pub(crate) to: Vec<EmailAddress>,
    pub(crate) cc: Vec<EmailAddress>,
    pub(crate) bcc: Vec<EmailAddress>,
    pub(crate) reply_to: Vec<EmailAddress>,
    pub(crate) subject: String,
    pub(crate) text_body: String,
    pub(crate) text_charset: String,
    pub(crate) html_body: String,
    pub(crate) html_charset: String,
    pub(crate) return_path: Option<String>,
}

impl Default for EmailMessage {
    fn default() -> Self {
        Self {
            source: None,
            to: Vec::new(),
            cc: Vec::new(),
            bcc: Vec::new(),
            reply_to: Vec::new(),
            subject: String::new(),
            text_body: String::new(),
            text_charset: DEFAULT_CHARSET.to_string(),
            html_body: String::new(),
            html_charset: DEFAULT_CHARSET.to_string(),
            return_path: None,
        }
    }
}

impl EmailMessage {
    /// Sender address.
    pub fn source(&self) -> Option<&EmailAddress> {
        self.source.as_ref()
    }

    /// "To" recipients.
    pub fn to(&self) -> &[EmailAddress] {
        &self.to
    }

    /// "Cc" recipients.
    pub fn cc(&self) -> &[EmailAddress] {
        &self.cc
    }

    /// "Bcc" recipients.
    pub fn bcc(&self) -> &[EmailAddress] {
        &self.bcc
    }

    /// Reply-to addresses.
    pub fn reply_to(&self) -> &[EmailAddress] {
        &self.reply_to
    }

    /// Subject line.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Plain-text body.
    pub fn text_body(&self) -> &str {
        &self.text_body
    }

    /// Charset of the plain-text body.
    pub fn text_charset(&self) -> &str {
        &self.text_charset
    }

    /// HTML body.
    pub fn html_body(&self) -> &str {
        &self.html_body
    }

    /// Charset of the HTML body.
    pub fn html_charset(&self) -> &str {
        &self.html_charset
    }

    /// Bounce address.
    pub fn return_path(&self) -> Option<&str> {
        self.return_path.as_deref()
    }

    /// Total number of To, Cc and Bcc recipients.
    pub fn recipient_count(&self) -> usize {
        self.to.len() + self.cc.len() + self.bcc.len()
    }
}

/// A fully assembled MIME message for `SendRawEmail`.
///
/// The bytes are sent as they are; their MIME structure is not checked.
///
/// # Examples
///
/// ```rust
/// use integrations_aws_ses_query::types::RawEmailMessage;
///
/// let raw = RawEmailMessage::new("Subject: Hi\r\n\r\nBody")
///     .with_source("sender@example.com")
///     .add_destination("extra@example.com");
///
/// assert_eq!(raw.destinations(), ["extra@example.com".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawEmailMessage {
    data: Vec<u8>,
    source: Option<String>,
    destinations: Vec<String>,
}

impl RawEmailMessage {
    /// Wrap raw message bytes.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            source: None,
            destinations: Vec::new(),
        }
    }

    /// Override the sender taken from the message headers.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Add an envelope recipient beyond those in the headers.
    pub fn add_destination(mut self, destination: impl Into<String>) -> Self {
        self.destinations.push(destination.into());
        self
    }

    /// Replace the extra envelope recipients.
    pub fn with_destinations<I, S>(mut self, destinations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.destinations = destinations.into_iter().map(Into::into).collect();
        self
    }

    /// Raw message bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Sender override.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Extra envelope recipients.
    pub fn destinations(&self) -> &[String] {
        &self.destinations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_message_charsets() {
        let message = EmailMessage::default();
        assert_eq!(message.text_charset(), "utf-8");
        assert_eq!(message.html_charset(), "utf-8");
        assert_eq!(message.recipient_count(), 0);
        assert!(message.source().is_none());
    }

    #[test]
    fn test_raw_message_destinations() {
        let raw = RawEmailMessage::new(b"raw".to_vec())
            .with_destinations(["a@example.com", "b@example.com"])
            .add_destination("c@example.com");

        assert_eq!(raw.data(), b"raw");
        assert_eq!(
            raw.destinations(),
            ["a@example.com", "b@example.com", "c@example.com"]
        );
        assert!(raw.source().is_none());
    }
}
