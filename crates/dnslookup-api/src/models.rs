// DNS Lookup API response types
//
// The typed endpoint answers with
// `{ "DNSData": { ... }, "ErrorMessage": { "errorCode", "msg" } }`.
// Either member may be missing or `null`; both decode to their defaults.

use serde::{Deserialize, Serialize};

use crate::records::{DnsRecords, null_as_default};
use crate::time::ApiTime;

// ── Response Envelope ────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiEnvelope {
    #[serde(rename = "DNSData", default, deserialize_with = "null_as_default")]
    pub data: LookupResponse,
    #[serde(rename = "ErrorMessage", default, deserialize_with = "null_as_default")]
    pub error: ErrorMessage,
}

/// Structured error reported by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorMessage {
    #[serde(rename = "errorCode", deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(rename = "msg", deserialize_with = "null_as_default")]
    pub message: String,
}

impl ErrorMessage {
    /// `true` when neither a code nor a message was reported.
    pub fn is_empty(&self) -> bool {
        self.code.is_empty() && self.message.is_empty()
    }
}

// ── Lookup ───────────────────────────────────────────────────────────

/// When the records were collected and last refreshed by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Audit {
    #[serde(deserialize_with = "null_as_default")]
    pub created_date: ApiTime,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_date: ApiTime,
}

/// Parsed result of a DNS lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LookupResponse {
    /// The domain name that was looked up.
    #[serde(deserialize_with = "null_as_default")]
    pub domain_name: String,
    /// Numeric codes of the requested record types.
    #[serde(deserialize_with = "null_as_default")]
    pub types: Vec<i64>,
    /// Comma-separated names of the requested record types.
    #[serde(deserialize_with = "null_as_default")]
    pub dns_types: String,
    #[serde(deserialize_with = "null_as_default")]
    pub audit: Audit,
    pub dns_records: DnsRecords,
}
