//! `AWS3-HTTPS` request signing for the SES Query API.
//!
//! The scheme signs only the request date:
//!
//! 1. Format the current time as an RFC 2822 date (`Thu, 21 Dec 2000 16:01:07 +0000`)
//! 2. Compute `HMAC-SHA256(key = secret access key, message = date)`
//! 3. Base64-encode the digest
//! 4. Send the date in `Date` and the signature in `X-Amzn-Authorization`
//!
//! ```text
//! X-Amzn-Authorization: AWS3-HTTPS AWSAccessKeyId=AKID, Algorithm=HmacSHA256, Signature=...
//! ```
//!
//! The date must be fresh for every request; SES rejects stale ones.
//!
//! # Example
//!
//! ```
//! use integrations_aws_ses_query::signing::calculate_signature;
//!
//! let signature = calculate_signature(
//!     "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY",
//!     "Thu, 21 Dec 2000 16:01:07 +0000",
//! ).unwrap();
//! assert_eq!(signature, "HFoovsop5OGUcbjgbLI68YhzhNfhqisaPYjOuL57MnI=");
//! ```
//!
//! # Security Considerations
//!
//! - Never log the secret access key, the signature input or the session token
//! - Only send signed requests over HTTPS

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use http::header::{HeaderMap, HeaderName, HeaderValue, DATE};
use sha2::Sha256;

pub mod error;

pub use error::SigningError;

use crate::credentials::AwsCredentials;

type HmacSha256 = Hmac<Sha256>;

/// Authentication scheme name.
pub const AUTH_SCHEME: &str = "AWS3-HTTPS";

/// Signature algorithm reported in the authorization header.
pub const SIGNING_ALGORITHM: &str = "HmacSHA256";

/// Header carrying the signature.
pub const AUTHORIZATION_HEADER: &str = "x-amzn-authorization";

/// Header carrying the session token of temporary credentials.
pub const SECURITY_TOKEN_HEADER: &str = "x-amz-security-token";

/// Format a timestamp the way the signature expects it.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use integrations_aws_ses_query::signing::format_date;
///
/// let ts = Utc.with_ymd_and_hms(2000, 12, 21, 16, 1, 7).unwrap();
/// assert_eq!(format_date(&ts), "Thu, 21 Dec 2000 16:01:07 +0000");
/// ```
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc2822()
}

/// Base64 HMAC-SHA256 of `date` keyed with `secret_key`.
///
/// Deterministic: the same inputs always produce the same signature.
pub fn calculate_signature(secret_key: &str, date: &str) -> Result<String, SigningError> {
    let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes()).map_err(|e| {
        SigningError::SigningFailed {
            message: e.to_string(),
        }
    })?;
    mac.update(date.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Value of the `X-Amzn-Authorization` header.
pub fn authorization_header(access_key_id: &str, signature: &str) -> String {
    format!(
        "{} AWSAccessKeyId={}, Algorithm={}, Signature={}",
        AUTH_SCHEME, access_key_id, SIGNING_ALGORITHM, signature
    )
}

/// Add `Date`, `X-Amzn-Authorization` and, for temporary credentials,
/// `X-Amz-Security-Token` to `headers`.
///
/// Existing values for these headers are replaced.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use http::HeaderMap;
/// use integrations_aws_ses_query::credentials::AwsCredentials;
/// use integrations_aws_ses_query::signing::sign_request;
///
/// let credentials = AwsCredentials::new("AKID", "SECRET");
/// let mut headers = HeaderMap::new();
///
/// sign_request(&mut headers, &credentials, &Utc::now()).unwrap();
/// assert!(headers.contains_key("x-amzn-authorization"));
/// assert!(headers.contains_key("date"));
/// ```
pub fn sign_request(
    headers: &mut HeaderMap,
    credentials: &AwsCredentials,
    timestamp: &DateTime<Utc>,
) -> Result<(), SigningError> {
    if credentials.access_key_id().is_empty() {
        return Err(SigningError::InvalidCredentials {
            message: "Access key ID is required".to_string(),
        });
    }
    if credentials.secret_access_key().is_empty() {
        return Err(SigningError::InvalidCredentials {
            message: "Secret access key is required".to_string(),
        });
    }

    let date = format_date(timestamp);
    let signature = calculate_signature(credentials.secret_access_key(), &date)?;
    let authorization = authorization_header(credentials.access_key_id(), &signature);

    headers.insert(DATE, header_value(DATE.as_str(), &date)?);
    headers.insert(
        HeaderName::from_static(AUTHORIZATION_HEADER),
        header_value(AUTHORIZATION_HEADER, &authorization)?,
    );

    if let Some(token) = credentials.session_token() {
        headers.insert(
            HeaderName::from_static(SECURITY_TOKEN_HEADER),
            header_value(SECURITY_TOKEN_HEADER, token)?,
        );
    }

    Ok(())
}

fn header_value(header: &str, value: &str) -> Result<HeaderValue, SigningError> {
    HeaderValue::from_str(value).map_err(|_| SigningError::InvalidHeaderValue {
        header: header.to_string(),
    })
}
