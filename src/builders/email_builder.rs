//! Fluent builder for [`EmailMessage`].

use crate::error::SesError;
use crate::protocol::RecipientRole;
use crate::types::{validate_address, EmailAddress, EmailMessage, DEFAULT_CHARSET};

use super::BuilderError;

/// Builds an immutable [`EmailMessage`].
///
/// Every method consumes the builder and returns it, so a message is never
/// observable half-built. Recipient lists keep insertion order.
///
/// Missing fields are not an error here: SES decides what a valid message
/// is. `build()` only checks the syntax of the addresses that were given,
/// unless [`skip_address_validation`](Self::skip_address_validation) is used.
///
/// # Examples
///
/// ```rust
/// use integrations_aws_ses_query::builders::EmailBuilder;
///
/// let message = EmailBuilder::new()
///     .from_with_name("sender@example.com", "Sender")
///     .to("a@example.com")
///     .to_with_name("b@example.com", "Bee")
///     .cc("c@example.com")
///     .reply_to("replies@example.com")
///     .subject("Quarterly report")
///     .text("See attached numbers.")
///     .return_path("bounces@example.com")
///     .build()?;
///
/// assert_eq!(message.recipient_count(), 3);
/// assert_eq!(message.to()[1].formatted(), "Bee <b@example.com>");
/// # Ok::<(), integrations_aws_ses_query::builders::BuilderError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EmailBuilder {
    message: EmailMessage,
    validate: bool,
    error: Option<BuilderError>,
}

impl Default for EmailBuilder {
    fn default() -> Self {
        Self {
            message: EmailMessage::default(),
            validate: true,
            error: None,
        }
    }
}

impl EmailBuilder {
    /// Create a new email builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sender address.
    pub fn from(mut self, email: impl Into<EmailAddress>) -> Self {
        self.message.source = Some(email.into());
        self
    }

    /// Set the sender address with a display name.
    pub fn from_with_name(self, email: &str, name: impl Into<String>) -> Self {
        self.from(EmailAddress::with_name(email, name))
    }

    /// Add a "To" recipient.
    pub fn to(mut self, email: impl Into<EmailAddress>) -> Self {
        self.message.to.push(email.into());
        self
    }

    /// Add a "To" recipient with a display name.
    pub fn to_with_name(self, email: &str, name: impl Into<String>) -> Self {
        self.to(EmailAddress::with_name(email, name))
    }

    /// Add a "Cc" recipient.
    pub fn cc(mut self, email: impl Into<EmailAddress>) -> Self {
        self.message.cc.push(email.into());
        self
    }

    /// Add a "Cc" recipient with a display name.
    pub fn cc_with_name(self, email: &str, name: impl Into<String>) -> Self {
        self.cc(EmailAddress::with_name(email, name))
    }

    /// Add a "Bcc" recipient.
    pub fn bcc(mut self, email: impl Into<EmailAddress>) -> Self {
        self.message.bcc.push(email.into());
        self
    }

    /// Add a "Bcc" recipient with a display name.
    pub fn bcc_with_name(self, email: &str, name: impl Into<String>) -> Self {
        self.bcc(EmailAddress::with_name(email, name))
    }

    /// Add a reply-to address.
    pub fn reply_to(mut self, email: impl Into<EmailAddress>) -> Self {
        self.message.reply_to.push(email.into());
        self
    }

    /// Add a reply-to address with a display name.
    pub fn reply_to_with_name(self, email: &str, name: impl Into<String>) -> Self {
        self.reply_to(EmailAddress::with_name(email, name))
    }

    /// Add an address to the list named by `role`.
    ///
    /// [`RecipientRole::Destinations`] only applies to raw messages; using
    /// it here makes `build()` fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use integrations_aws_ses_query::builders::EmailBuilder;
    /// use integrations_aws_ses_query::protocol::RecipientRole;
    ///
    /// let role: RecipientRole = "bcc".parse()?;
    /// let message = EmailBuilder::new()
    ///     .recipient(role, "audit@example.com")
    ///     .build()?;
    ///
    /// assert_eq!(message.bcc().len(), 1);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn recipient(self, role: RecipientRole, email: impl Into<EmailAddress>) -> Self {
        match role {
            RecipientRole::To => self.to(email),
            RecipientRole::Cc => self.cc(email),
            RecipientRole::Bcc => self.bcc(email),
            RecipientRole::ReplyTo => self.reply_to(email),
            RecipientRole::Destinations => self.fail(BuilderError::invalid_value(
                "role",
                "destinations can only be used with raw messages",
            )),
        }
    }

    /// Remove all "To" recipients.
    pub fn clear_to(mut self) -> Self {
        self.message.to.clear();
        self
    }

    /// Remove all "Cc" recipients.
    pub fn clear_cc(mut self) -> Self {
        self.message.cc.clear();
        self
    }

    /// Remove all "Bcc" recipients.
    pub fn clear_bcc(mut self) -> Self {
        self.message.bcc.clear();
        self
    }

    /// Remove all reply-to addresses.
    pub fn clear_reply_to(mut self) -> Self {
        self.message.reply_to.clear();
        self
    }

    /// Remove all To, Cc and Bcc recipients. Reply-to addresses are kept.
    pub fn clear_recipients(self) -> Self {
        self.clear_to().clear_cc().clear_bcc()
    }

    /// Set the subject line.
    pub fn subject(mut self, text: impl Into<String>) -> Self {
        self.message.subject = text.into();
        self
    }

    /// Set the plain-text body (utf-8).
    pub fn text(self, body: impl Into<String>) -> Self {
        self.text_with_charset(body, DEFAULT_CHARSET)
    }

    /// Set the plain-text body and its charset.
    pub fn text_with_charset(mut self, body: impl Into<String>, charset: impl Into<String>) -> Self {
        self.message.text_body = body.into();
        self.message.text_charset = charset.into();
        self
    }

    /// Set the HTML body (utf-8).
    pub fn html(self, body: impl Into<String>) -> Self {
        self.html_with_charset(body, DEFAULT_CHARSET)
    }

    /// Set the HTML body and its charset.
    pub fn html_with_charset(mut self, body: impl Into<String>, charset: impl Into<String>) -> Self {
        self.message.html_body = body.into();
        self.message.html_charset = charset.into();
        self
    }

    /// Set the address bounces are sent to.
    pub fn return_path(mut self, address: impl Into<String>) -> Self {
        self.message.return_path = Some(address.into());
        self
    }

    /// Send addresses as given, without the syntax check in `build()`.
    pub fn skip_address_validation(mut self) -> Self {
        self.validate = false;
        self
    }

    fn fail(mut self, error: BuilderError) -> Self {
        self.error.get_or_insert(error);
        self
    }

    /// Finish the message.
    ///
    /// # Errors
    ///
    /// - [`BuilderError::InvalidValue`] for an address that is not shaped
    ///   like `local@domain`, naming the list it was added to
    /// - [`BuilderError::InvalidValue`] with field `role` if
    ///   [`RecipientRole::Destinations`] was used
    pub fn build(self) -> Result<EmailMessage, BuilderError> {
        if let Some(error) = self.error {
            return Err(error);
        }

        if self.validate {
            let message = &self.message;
            let lists: [(&str, &[EmailAddress]); 4] = [
                ("to", &message.to),
                ("cc", &message.cc),
                ("bcc", &message.bcc),
                ("reply_to", &message.reply_to),
            ];

            check("from", message.source.iter())?;
            for (field, addresses) in lists {
                check(field, addresses.iter())?;
            }
            if let Some(return_path) = message.return_path.as_deref().filter(|p| !p.is_empty()) {
                validate_address("return_path", return_path).map_err(to_builder_error)?;
            }
        }

        Ok(self.message)
    }
}

fn check<'a>(
    field: &str,
    addresses: impl Iterator<Item = &'a EmailAddress>,
) -> Result<(), BuilderError> {
    for address in addresses {
        validate_address(field, &address.address).map_err(to_builder_error)?;
    }
    Ok(())
}

fn to_builder_error(error: SesError) -> BuilderError {
    match error {
        SesError::Validation { message, field } => {
            BuilderError::invalid_value(field.unwrap_or_default(), message)
        }
        other => BuilderError::invalid_value("", other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_email() {
        let message = EmailBuilder::new()
            .from("sender@example.com")
            .to("recipient@example.com")
            .subject("Test Email")
            .text("This is a test email")
            .build()
            .unwrap();

        assert_eq!(message.source().unwrap().address, "sender@example.com");
        assert_eq!(message.recipient_count(), 1);
        assert_eq!(message.subject(), "Test Email");
        assert_eq!(message.text_body(), "This is a test email");
        assert_eq!(message.html_body(), "");
    }

    #[test]
    fn test_recipient_order_is_kept() {
        let message = EmailBuilder::new()
            .to("1@example.com")
            .to("2@example.com")
            .to("3@example.com")
            .build()
            .unwrap();

        let to: Vec<&str> = message.to().iter().map(|a| a.address.as_str()).collect();
        assert_eq!(to, vec!["1@example.com", "2@example.com", "3@example.com"]);
    }

    #[test]
    fn test_clear_methods() {
        let message = EmailBuilder::new()
            .to("a@example.com")
            .cc("b@example.com")
            .bcc("c@example.com")
            .reply_to("d@example.com")
            .clear_recipients()
            .to("e@example.com")
            .build()
            .unwrap();

        assert_eq!(message.to().len(), 1);
        assert!(message.cc().is_empty());
        assert!(message.bcc().is_empty());
        assert_eq!(message.reply_to().len(), 1);

        let message = EmailBuilder::new()
            .reply_to("d@example.com")
            .clear_reply_to()
            .build()
            .unwrap();
        assert!(message.reply_to().is_empty());
    }

    #[test]
    fn test_charsets() {
        let message = EmailBuilder::new()
            .text_with_charset("plain", "iso-8859-1")
            .html("<b>html</b>")
            .build()
            .unwrap();

        assert_eq!(message.text_charset(), "iso-8859-1");
        assert_eq!(message.html_charset(), "utf-8");
    }

    #[test]
    fn test_recipient_by_role() {
        let message = EmailBuilder::new()
            .recipient(RecipientRole::To, "a@example.com")
            .recipient(RecipientRole::Cc, ("b@example.com", "Bee"))
            .recipient(RecipientRole::ReplyTo, "r@example.com")
            .build()
            .unwrap();

        assert_eq!(message.to().len(), 1);
        assert_eq!(message.cc()[0].formatted(), "Bee <b@example.com>");
        assert_eq!(message.reply_to().len(), 1);
    }

    #[test]
    fn test_destinations_role_rejected() {
        let result = EmailBuilder::new()
            .recipient(RecipientRole::Destinations, "a@example.com")
            .build();

        assert_eq!(result.unwrap_err().field(), "role");
    }

    #[test]
    fn test_invalid_address_rejected() {
        let result = EmailBuilder::new()
            .from("sender@example.com")
            .to("ok@example.com")
            .cc("not-an-address")
            .build();

        let error = result.unwrap_err();
        assert_eq!(error.field(), "cc");
        assert!(error.to_string().contains("not-an-address"));
    }

    #[test]
    fn test_invalid_return_path_rejected() {
        let result = EmailBuilder::new().return_path("bounces").build();
        assert_eq!(result.unwrap_err().field(), "return_path");
    }

    #[test]
    fn test_skip_address_validation() {
        let message = EmailBuilder::new()
            .to("not-an-address")
            .skip_address_validation()
            .build()
            .unwrap();

        assert_eq!(message.to()[0].address, "not-an-address");
    }

    #[test]
    fn test_empty_message_is_allowed() {
        let message = EmailBuilder::new().build().unwrap();
        assert!(message.source().is_none());
        assert_eq!(message.recipient_count(), 0);
    }
}
