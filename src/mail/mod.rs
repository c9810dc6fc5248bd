//! Mail transport backed by `SendRawEmail`.
//!
//! Mail frameworks assemble the header block and body themselves and hand
//! both to a transport. [`SesMailTransport`] joins them and sends the text
//! as a raw message. Recipients are taken from the headers by SES.
//!
//! # Example
//!
//! ```rust,no_run
//! use integrations_aws_ses_query::mail::{MailTransport, OutboundMail, SesMailTransport};
//! use integrations_aws_ses_query::SesClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = SesMailTransport::new(SesClient::from_env()?);
//!
//! let mail = OutboundMail::new(
//!     "From: sender@example.com\r\nTo: recipient@example.com\r\nSubject: Hi\r\n",
//!     "Hello there",
//! );
//! transport.send(&mail).await?;
//!
//! println!("{:?}", transport.last_message_id());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};

use crate::client::SesClient;
use crate::error::SesResult;
use crate::types::RawEmailMessage;

/// Line ending used between the header block and the body by default.
pub const DEFAULT_EOL: &str = "\r\n";

/// A message as produced by a mail framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMail {
    headers: String,
    body: String,
    eol: String,
}

impl OutboundMail {
    /// Create a message with `\r\n` as the line ending.
    pub fn new(headers: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            headers: headers.into(),
            body: body.into(),
            eol: DEFAULT_EOL.to_string(),
        }
    }

    /// Use a different line ending.
    pub fn with_eol(mut self, eol: impl Into<String>) -> Self {
        self.eol = eol.into();
        self
    }

    /// The header block.
    pub fn headers(&self) -> &str {
        &self.headers
    }

    /// The body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The line ending.
    pub fn eol(&self) -> &str {
        &self.eol
    }

    /// `headers + eol + body`.
    ///
    /// ```rust
    /// use integrations_aws_ses_query::mail::OutboundMail;
    ///
    /// let mail = OutboundMail::new("Subject: Hi\r\n", "Body");
    /// assert_eq!(mail.assemble(), "Subject: Hi\r\n\r\nBody");
    /// ```
    pub fn assemble(&self) -> String {
        let mut text =
            String::with_capacity(self.headers.len() + self.eol.len() + self.body.len());
        text.push_str(&self.headers);
        text.push_str(&self.eol);
        text.push_str(&self.body);
        text
    }
}

/// Delivers assembled messages.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Send one message.
    async fn send(&self, mail: &OutboundMail) -> SesResult<()>;
}

/// [`MailTransport`] that sends through an explicit [`SesClient`].
#[derive(Debug)]
pub struct SesMailTransport {
    client: SesClient,
    last_message_id: Mutex<Option<String>>,
}

impl SesMailTransport {
    /// Create a transport around `client`.
    pub fn new(client: SesClient) -> Self {
        Self {
            client,
            last_message_id: Mutex::new(None),
        }
    }

    /// The client messages are sent with.
    pub fn client(&self) -> &SesClient {
        &self.client
    }

    /// Message ID of the last successful send.
    pub fn last_message_id(&self) -> Option<String> {
        self.last_message_id
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl MailTransport for SesMailTransport {
    async fn send(&self, mail: &OutboundMail) -> SesResult<()> {
        let raw = RawEmailMessage::new(mail.assemble());
        let result = self.client.send_raw_email(&raw).await?;

        #[cfg(feature = "tracing")]
        tracing::debug!(message_id = %result.message_id, "Raw message accepted");

        *self
            .last_message_id
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(result.message_id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SesConfig;
    use crate::error::SesError;
    use crate::http::{MockHttpClient, SesResponse};
    use crate::protocol::Action;
    use http::StatusCode;
    use std::collections::HashMap;
    use std::sync::Arc;

    fn transport(mock: MockHttpClient) -> SesMailTransport {
        let config = SesConfig::builder()
            .credentials("AKID", "SECRET")
            .build()
            .unwrap();
        SesMailTransport::new(SesClient::with_http_client(config, Arc::new(mock)))
    }

    fn response(body: &'static str) -> SesResult<SesResponse> {
        Ok(SesResponse::new(
            StatusCode::OK,
            HashMap::new(),
            body.as_bytes().to_vec(),
        ))
    }

    #[test]
    fn test_assemble_with_custom_eol() {
        let mail = OutboundMail::new("Subject: Hi\n", "Body").with_eol("\n");
        assert_eq!(mail.assemble(), "Subject: Hi\n\nBody");
        assert_eq!(mail.eol(), "\n");
    }

    #[tokio::test]
    async fn test_send_records_message_id() {
        let mut mock = MockHttpClient::new();
        mock.expect_send_request()
            .withf(|request| {
                request.action() == Action::SendRawEmail
                    && request.params().get("RawMessage.Data")
                        == Some("U3ViamVjdDogSGkNCg0KQm9keQ==")
                    && !request.params().contains_key("Destinations.member.1")
            })
            .times(1)
            .returning(|_| {
                response("<SendRawEmailResponse><SendRawEmailResult><MessageId>m-42</MessageId></SendRawEmailResult></SendRawEmailResponse>")
            });

        let transport = transport(mock);
        assert!(transport.last_message_id().is_none());

        transport
            .send(&OutboundMail::new("Subject: Hi\r\n", "Body"))
            .await
            .unwrap();

        assert_eq!(transport.last_message_id().as_deref(), Some("m-42"));
    }

    #[tokio::test]
    async fn test_failed_send_keeps_previous_id() {
        let mut mock = MockHttpClient::new();
        let mut calls = 0;
        mock.expect_send_request().times(2).returning(move |_| {
            calls += 1;
            if calls == 1 {
                response("<SendRawEmailResponse><SendRawEmailResult><MessageId>first</MessageId></SendRawEmailResult></SendRawEmailResponse>")
            } else {
                response("<ErrorResponse><Error><Code>MessageRejected</Code><Message>no</Message></Error></ErrorResponse>")
            }
        });

        let transport = transport(mock);
        let mail = OutboundMail::new("Subject: Hi\r\n", "Body");

        transport.send(&mail).await.unwrap();
        let err = transport.send(&mail).await.unwrap_err();

        assert!(matches!(err, SesError::Remote { .. }));
        assert_eq!(transport.last_message_id().as_deref(), Some("first"));
    }
}
