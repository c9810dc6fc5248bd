//! HTTP response wrapper for SES Query API calls.

use http::StatusCode;
use std::collections::HashMap;

use crate::error::{SesError, SesResult};

/// A raw response from the SES Query API.
///
/// The status is kept for diagnostics only. Success or failure is decided
/// by the XML body.
#[derive(Debug, Clone)]
pub struct SesResponse {
    status: StatusCode,

    /// Header names are lower-cased.
    headers: HashMap<String, String>,

    body: Vec<u8>,
}

impl SesResponse {
    /// Create a new response.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use integrations_aws_ses_query::http::SesResponse;
    /// use http::StatusCode;
    /// use std::collections::HashMap;
    ///
    /// let response = SesResponse::new(StatusCode::OK, HashMap::new(), b"<xml/>".to_vec());
    /// assert_eq!(response.body_string().unwrap(), "<xml/>");
    /// ```
    pub fn new(status: StatusCode, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, value)| (name.to_lowercase(), value))
            .collect();

        Self {
            status,
            headers,
            body,
        }
    }

    /// Read a reqwest response to completion.
    pub async fn from_reqwest(response: reqwest::Response) -> SesResult<Self> {
        let status = response.status();

        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(value_str) = value.to_str() {
                headers.insert(name.as_str().to_lowercase(), value_str.to_string());
            }
        }

        let body = response.bytes().await?.to_vec();

        Ok(Self::new(status, headers, body))
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get a header value (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }

    /// All response headers.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns `SesError::Decode` if the body is not valid UTF-8.
    pub fn body_string(&self) -> SesResult<&str> {
        std::str::from_utf8(&self.body).map_err(|e| SesError::Decode {
            message: format!("Response body is not valid UTF-8: {}", e),
        })
    }

    /// AWS request ID from the response headers, if any.
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-amzn-requestid")
            .or_else(|| self.header("x-amz-request-id"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_are_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("X-Amzn-RequestId".to_string(), "req-1".to_string());
        headers.insert("Content-Type".to_string(), "text/xml".to_string());

        let response = SesResponse::new(StatusCode::OK, headers, Vec::new());

        assert_eq!(response.header("content-type"), Some("text/xml"));
        assert_eq!(response.header("CONTENT-TYPE"), Some("text/xml"));
        assert_eq!(response.request_id(), Some("req-1"));
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_body_string_rejects_invalid_utf8() {
        let response = SesResponse::new(StatusCode::OK, HashMap::new(), vec![0xff, 0xfe, 0x3c]);

        assert!(matches!(
            response.body_string(),
            Err(SesError::Decode { .. })
        ));
        assert_eq!(response.body(), &[0xff, 0xfe, 0x3c]);
    }
}
