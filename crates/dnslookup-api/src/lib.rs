// dnslookup-api: Async Rust client for the WhoisXML DNS Lookup API

pub mod client;
pub mod error;
pub mod models;
pub mod options;
pub mod records;
pub mod time;
pub mod transport;

pub use client::{ClientConfig, DEFAULT_BASE_URL, DnsLookupClient, RawResponse};
pub use error::Error;
pub use models::{Audit, ErrorMessage, LookupResponse};
pub use options::{QueryOption, QueryParams};
pub use records::{CommonFields, DnsRecord, DnsRecords, Record, RecordError, RecordKind};
pub use time::{ApiTime, TimeParseError};
pub use transport::{TlsMode, TransportConfig, USER_AGENT};

pub use tokio_util::sync::CancellationToken;
