//! Response decoding.
//!
//! Every reply is checked for an `<Error>` element first, whatever the HTTP
//! status. Success documents look like:
//!
//! ```xml
//! <SendEmailResponse xmlns="http://ses.amazonaws.com/doc/2010-12-01/">
//!   <SendEmailResult>
//!     <MessageId>000001...</MessageId>
//!   </SendEmailResult>
//!   <ResponseMetadata>
//!     <RequestId>b25f48e8-...</RequestId>
//!   </ResponseMetadata>
//! </SendEmailResponse>
//! ```

use crate::error::{AwsErrorResponse, SesError, SesResult};
use crate::types::{
    ApiResult, ListVerifiedEmailAddressesResult, ResponseMetadata, SendEmailResult,
    SendQuotaResult, SendRawEmailResult,
};

use super::xml::{self, Element};
use super::Action;

/// Decode the reply to `action`.
///
/// # Errors
///
/// - `SesError::Decode` if the body is not well-formed XML
/// - `SesError::Remote` if the document carries an `<Error>` element
/// - `SesError::UnexpectedResponse` if a required field is absent
///
/// # Examples
///
/// ```rust
/// use integrations_aws_ses_query::protocol::{decode, Action};
///
/// let body = r#"<GetSendQuotaResponse>
///   <GetSendQuotaResult>
///     <Max24HourSend>200.0</Max24HourSend>
///     <MaxSendRate>1.0</MaxSendRate>
///     <SentLast24Hours>12.0</SentLast24Hours>
///   </GetSendQuotaResult>
/// </GetSendQuotaResponse>"#;
///
/// let result = decode(Action::GetSendQuota, body)?;
/// assert!(result.message_id().is_none());
/// # Ok::<(), integrations_aws_ses_query::error::SesError>(())
/// ```
pub fn decode(action: Action, body: &str) -> SesResult<ApiResult> {
    Ok(match action {
        Action::SendEmail => ApiResult::SendEmail(decode_send_email(body)?),
        Action::SendRawEmail => ApiResult::SendRawEmail(decode_send_raw_email(body)?),
        Action::VerifyEmailAddress => {
            ApiResult::VerifyEmailAddress(decode_metadata(Action::VerifyEmailAddress, body)?)
        }
        Action::ListVerifiedEmailAddresses => {
            ApiResult::ListVerifiedEmailAddresses(decode_list_verified_email_addresses(body)?)
        }
        Action::DeleteVerifiedEmailAddress => ApiResult::DeleteVerifiedEmailAddress(
            decode_metadata(Action::DeleteVerifiedEmailAddress, body)?,
        ),
        Action::GetSendQuota => ApiResult::GetSendQuota(decode_get_send_quota(body)?),
    })
}

/// Decode a `SendEmail` reply.
pub fn decode_send_email(body: &str) -> SesResult<SendEmailResult> {
    let (message_id, request_id) = decode_message_id(Action::SendEmail, body)?;
    Ok(SendEmailResult {
        message_id,
        request_id,
    })
}

/// Decode a `SendRawEmail` reply.
pub fn decode_send_raw_email(body: &str) -> SesResult<SendRawEmailResult> {
    let (message_id, request_id) = decode_message_id(Action::SendRawEmail, body)?;
    Ok(SendRawEmailResult {
        message_id,
        request_id,
    })
}

/// Decode a `ListVerifiedEmailAddresses` reply.
///
/// Addresses keep document order. A reply without any `<member>` is an
/// empty list, not an error.
pub fn decode_list_verified_email_addresses(
    body: &str,
) -> SesResult<ListVerifiedEmailAddressesResult> {
    let root = parse_success(body)?;

    let addresses = root
        .descendants("member")
        .into_iter()
        .map(|member| member.text.clone())
        .collect();

    Ok(ListVerifiedEmailAddressesResult {
        addresses,
        request_id: request_id(&root),
    })
}

/// Decode a `GetSendQuota` reply. All three counters are required.
pub fn decode_get_send_quota(body: &str) -> SesResult<SendQuotaResult> {
    let action = Action::GetSendQuota;
    let root = parse_success(body)?;
    let result = result_element(&root, action)?;

    let field = |name: &str| -> SesResult<String> {
        result
            .child_text(name)
            .map(str::to_string)
            .ok_or_else(|| missing(action, &format!("{}/{}", action.result_element(), name)))
    };

    Ok(SendQuotaResult {
        max_24_hour_send: field("Max24HourSend")?,
        max_send_rate: field("MaxSendRate")?,
        sent_last_24_hours: field("SentLast24Hours")?,
        request_id: request_id(&root),
    })
}

/// Decode a reply that only carries response metadata.
pub fn decode_metadata(_action: Action, body: &str) -> SesResult<ResponseMetadata> {
    let root = parse_success(body)?;

    #[cfg(feature = "tracing")]
    tracing::trace!(action = %_action, root = %root.name, "Decoded metadata-only response");

    Ok(ResponseMetadata {
        request_id: request_id(&root),
    })
}

fn decode_message_id(action: Action, body: &str) -> SesResult<(String, Option<String>)> {
    let root = parse_success(body)?;

    let message_id = result_element(&root, action)?
        .child_text("MessageId")
        .map(str::to_string)
        .ok_or_else(|| missing(action, &format!("{}/MessageId", action.result_element())))?;

    Ok((message_id, request_id(&root)))
}

/// Parse the document and turn an `<Error>` element into `SesError::Remote`.
fn parse_success(body: &str) -> SesResult<Element> {
    let root = xml::parse(body)?;

    if let Some(error) = root.find("Error") {
        let response = AwsErrorResponse {
            error_type: error.child_text("Type").map(str::to_string),
            code: error.child_text("Code").unwrap_or_default().to_string(),
            message: error.child_text("Message").unwrap_or_default().to_string(),
            request_id: root.find("RequestId").map(|e| e.text.clone()),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            code = %response.code,
            request_id = ?response.request_id,
            "SES returned an error document"
        );

        return Err(response.into());
    }

    Ok(root)
}

fn result_element(root: &Element, action: Action) -> SesResult<&Element> {
    let name = action.result_element();
    root.child(&name).ok_or_else(|| missing(action, &name))
}

fn request_id(root: &Element) -> Option<String> {
    root.path(&["ResponseMetadata", "RequestId"])
        .map(|e| e.text.clone())
}

fn missing(action: Action, path: &str) -> SesError {
    SesError::UnexpectedResponse {
        action: action.to_string(),
        missing: path.to_string(),
    }
}
