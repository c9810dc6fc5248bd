//! Request types for the SES Query API.
//!
//! Every Query API call is a `POST` of an `application/x-www-form-urlencoded`
//! body. The body is the flat parameter map of the operation followed by
//! `Action=<Name>`.

use std::collections::HashMap;

use crate::protocol::Action;

/// Insertion-ordered map of request parameters with unique keys.
///
/// Inserting an existing key replaces its value in place, so the position of
/// a key is fixed by its first insertion.
///
/// # Examples
///
/// ```rust
/// use integrations_aws_ses_query::http::QueryParams;
///
/// let mut params = QueryParams::new();
/// params.insert("Source", "a@example.com");
/// params.insert("Message.Subject.Data", "Hi there");
/// params.insert("Source", "b@example.com");
///
/// assert_eq!(params.get("Source"), Some("b@example.com"));
/// assert_eq!(params.to_form(), "Source=b%40example.com&Message.Subject.Data=Hi+there");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl QueryParams {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, replacing the value of an existing key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&position) => self.entries[position].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// Insert every pair in order.
    pub fn extend<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.insert(key, value);
        }
    }

    /// Get the value of a parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&position| self.entries[position].1.as_str())
    }

    /// Returns true if the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Render as an `application/x-www-form-urlencoded` string.
    pub fn to_form(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        params.extend(iter);
        params
    }
}

/// A single Query API call: the action and its parameters.
///
/// # Examples
///
/// ```rust
/// use integrations_aws_ses_query::http::{QueryParams, SesRequest};
/// use integrations_aws_ses_query::protocol::Action;
///
/// let request = SesRequest::new(Action::GetSendQuota, QueryParams::new());
/// assert_eq!(request.body(), "Action=GetSendQuota");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SesRequest {
    action: Action,
    params: QueryParams,
}

impl SesRequest {
    /// Create a request for an action.
    pub fn new(action: Action, params: QueryParams) -> Self {
        Self { action, params }
    }

    /// The action this request performs.
    pub fn action(&self) -> Action {
        self.action
    }

    /// The operation parameters, without `Action`.
    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Form body with `Action=<Name>` appended last. An `Action` entry in
    /// the params is dropped in favour of the request's action.
    pub fn body(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        serializer.extend_pairs(self.params.iter().filter(|(key, _)| *key != "Action"));
        serializer.append_pair("Action", self.action.as_str());
        serializer.finish()
    }
}
