//! Email addresses and their wire form.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{SesError, SesResult};

/// Wire form of an address with an optional display name.
///
/// `"Name <addr>"` when the name is non-empty, `"<addr>"` otherwise. Nothing
/// is validated or escaped.
///
/// # Examples
///
/// ```rust
/// use integrations_aws_ses_query::types::format_address;
///
/// assert_eq!(format_address("a@b.com", Some("Ann")), "Ann <a@b.com>");
/// assert_eq!(format_address("a@b.com", None), "<a@b.com>");
/// assert_eq!(format_address("a@b.com", Some("")), "<a@b.com>");
/// ```
pub fn format_address(address: &str, display_name: Option<&str>) -> String {
    match display_name {
        Some(name) if !name.is_empty() => format!("{} <{}>", name, address),
        _ => format!("<{}>", address),
    }
}

/// Check the basic shape of an address: one `@`, non-empty local part and
/// domain, no whitespace or angle brackets.
///
/// # Errors
///
/// Returns `SesError::Validation` naming `field` when the check fails.
pub fn validate_address(field: &str, address: &str) -> SesResult<()> {
    let invalid = |reason: &str| {
        Err(SesError::validation(
            field,
            format!("'{}' is not a valid email address: {}", address, reason),
        ))
    };

    if address
        .chars()
        .any(|c| c.is_whitespace() || c == '<' || c == '>')
    {
        return invalid("contains whitespace or angle brackets");
    }

    let mut parts = address.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            if local.is_empty() {
                invalid("empty local part")
            } else if domain.is_empty() {
                invalid("empty domain")
            } else {
                Ok(())
            }
        }
        _ => invalid("expected exactly one '@'"),
    }
}

/// An email address with an optional display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress {
    /// Bare address (e.g., "user@example.com").
    pub address: String,
    /// Display name (e.g., "John Doe").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl EmailAddress {
    /// Create an address without a display name.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            display_name: None,
        }
    }

    /// Create an address with a display name.
    pub fn with_name(address: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            display_name: Some(display_name.into()),
        }
    }

    /// The form sent to SES. See [`format_address`].
    pub fn formatted(&self) -> String {
        format_address(&self.address, self.display_name.as_deref())
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl From<String> for EmailAddress {
    fn from(address: String) -> Self {
        Self::new(address)
    }
}

impl From<&str> for EmailAddress {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}

impl<N: Into<String>> From<(&str, N)> for EmailAddress {
    fn from((address, name): (&str, N)) -> Self {
        Self::with_name(address, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a@b.com", Some("Ann"), "Ann <a@b.com>")]
    #[case("a@b.com", None, "<a@b.com>")]
    #[case("a@b.com", Some(""), "<a@b.com>")]
    #[case("jane.doe@example.org", Some("Doe, Jane"), "Doe, Jane <jane.doe@example.org>")]
    #[case("", None, "<>")]
    fn test_format_address(
        #[case] address: &str,
        #[case] name: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(format_address(address, name), expected);
    }

    #[rstest]
    #[case("user@example.com")]
    #[case("first.last+tag@sub.example.co.uk")]
    fn test_validate_address_accepts(#[case] address: &str) {
        assert!(validate_address("to", address).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("no-at-sign")]
    #[case("@example.com")]
    #[case("user@")]
    #[case("a@b@c")]
    #[case("user @example.com")]
    #[case("<user@example.com>")]
    fn test_validate_address_rejects(#[case] address: &str) {
        match validate_address("to", address) {
            Err(SesError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("to")),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_email_address_formatted() {
        assert_eq!(
            EmailAddress::with_name("a@b.com", "Ann").formatted(),
            "Ann <a@b.com>"
        );
        assert_eq!(EmailAddress::new("a@b.com").to_string(), "<a@b.com>");
        assert_eq!(
            EmailAddress::from(("a@b.com", "Ann")),
            EmailAddress::with_name("a@b.com", "Ann")
        );
    }
}
