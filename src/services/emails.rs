//! `SendEmail` and `SendRawEmail`.

use std::sync::Arc;

use crate::error::SesResult;
use crate::http::HttpClient;
use crate::protocol::decode::{decode_send_email, decode_send_raw_email};
use crate::protocol::encode::{encode_send_email, encode_send_raw_email};
use crate::protocol::Action;
use crate::types::{EmailMessage, RawEmailMessage, SendEmailResult, SendRawEmailResult};

use super::SesService;

/// Service for sending messages.
#[derive(Clone)]
pub struct EmailService {
    http_client: Arc<dyn HttpClient>,
}

impl EmailService {
    /// Create a new email service.
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self { http_client }
    }

    /// Send a formatted message.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use integrations_aws_ses_query::builders::EmailBuilder;
    /// use integrations_aws_ses_query::services::EmailService;
    /// # use integrations_aws_ses_query::http::HttpClient;
    /// # use std::sync::Arc;
    ///
    /// # async fn example(http: Arc<dyn HttpClient>) -> Result<(), Box<dyn std::error::Error>> {
    /// let service = EmailService::new(http);
    /// let message = EmailBuilder::new()
    ///     .from("sender@example.com")
    ///     .to("recipient@example.com")
    ///     .subject("Hello")
    ///     .text("Hi there")
    ///     .build()?;
    ///
    /// let result = service.send_email(&message).await?;
    /// println!("Sent: {}", result.message_id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send_email(&self, message: &EmailMessage) -> SesResult<SendEmailResult> {
        let body = self
            .call(Action::SendEmail, encode_send_email(message))
            .await?;
        decode_send_email(&body)
    }

    /// Send a pre-assembled MIME message.
    ///
    /// Destinations on `message` are added to the recipients SES reads from
    /// the message headers.
    pub async fn send_raw_email(&self, message: &RawEmailMessage) -> SesResult<SendRawEmailResult> {
        let body = self
            .call(Action::SendRawEmail, encode_send_raw_email(message))
            .await?;
        decode_send_raw_email(&body)
    }
}

impl SesService for EmailService {
    fn http_client(&self) -> &Arc<dyn HttpClient> {
        &self.http_client
    }
}
