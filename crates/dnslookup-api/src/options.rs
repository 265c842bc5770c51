//! Query-string options for lookup requests.
//!
//! Options are applied in order on top of the defaults, so a later option
//! overrides an earlier one that sets the same parameter.

use std::collections::BTreeMap;

/// Query parameters of a lookup request, encoded in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// `application/x-www-form-urlencoded` rendering, keys sorted.
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter())
            .finish()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A single mutation of the request's query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOption {
    /// `outputFormat`: `JSON` or `XML`. Upper-cased.
    ///
    /// Ignored by [`DnsLookupClient::get`](crate::DnsLookupClient::get),
    /// which always asks for JSON.
    OutputFormat(String),
    /// `type`: record types to return, e.g. `A` or `A,SOA,TXT`. Upper-cased.
    /// `_all` (the default) returns every type.
    Type(String),
    /// `callback`: JSONP function name wrapped around a JSON response.
    Callback(String),
}

impl QueryOption {
    pub fn output_format(format: impl Into<String>) -> Self {
        Self::OutputFormat(format.into())
    }

    pub fn record_type(types: impl Into<String>) -> Self {
        Self::Type(types.into())
    }

    pub fn callback(name: impl Into<String>) -> Self {
        Self::Callback(name.into())
    }

    /// Apply this option to `params`.
    pub fn apply(&self, params: &mut QueryParams) {
        match self {
            Self::OutputFormat(format) => params.set("outputFormat", format.to_uppercase()),
            Self::Type(types) => params.set("type", types.to_uppercase()),
            Self::Callback(name) => params.set("callback", name.as_str()),
        }
    }
}
