use bytes::Bytes;
use thiserror::Error;

/// Top-level error type for the `dnslookup-api` crate.
///
/// Every variant aborts the call that produced it. Per-record decode
/// failures are not represented here: they travel inside
/// [`DnsRecord`](crate::DnsRecord) as a [`RecordError`](crate::RecordError)
/// so the records that did decode stay usable.
#[derive(Debug, Error)]
pub enum Error {
    // ── Arguments ───────────────────────────────────────────────────
    /// A caller-supplied argument was rejected before any I/O happened.
    ///
    /// Lookups do not raise this today: an empty domain name is sent to the
    /// service, whose answer surfaces as [`Error::Api`] or [`Error::BadStatus`].
    #[error("invalid argument: \"{name}\" {message}")]
    InvalidArgument { name: String, message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, TLS, etc.)
    #[error("cannot execute request: {0}")]
    Transport(#[source] reqwest::Error),

    /// The transport deadline elapsed before the exchange finished.
    #[error("cannot execute request: timed out")]
    Timeout(#[source] reqwest::Error),

    /// The caller's cancellation token fired while the request was in flight.
    #[error("request cancelled")]
    Cancelled,

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or HTTP client construction error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Response body ───────────────────────────────────────────────
    /// The body stream ended before the declared or expected length.
    #[error("cannot read response: unexpected EOF after {received} bytes{}", .expected.map_or_else(String::new, |n| format!(" of {n}")))]
    Truncated {
        expected: Option<u64>,
        received: u64,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Any other failure while reading the body.
    #[error("cannot read response: {0}")]
    ReadResponse(#[source] reqwest::Error),

    // ── Data ────────────────────────────────────────────────────────
    /// JSON decoding of the response envelope failed, with the raw body for debugging.
    #[error("cannot parse response: {message}")]
    Deserialization { message: String, body: String },

    // ── Remote ──────────────────────────────────────────────────────
    /// Structured error reported by the service inside a well-formed body.
    #[error("API error: [{code}] {message}")]
    Api { code: String, message: String },

    /// Non-2xx HTTP status on the raw access path.
    #[error("API failed with status code: {status}")]
    BadStatus { status: u16, body: Option<Bytes> },
}

impl Error {
    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_connect(),
            Self::Timeout(_) | Self::Truncated { .. } => true,
            Self::BadStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if the call was aborted by its cancellation token.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Extract the remote API error code, if available.
    pub fn api_error_code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// The HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadStatus { status, .. } => Some(*status),
            Self::Transport(e) | Self::ReadResponse(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The response body attached to the error, if one was received.
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            Self::BadStatus { body, .. } => body.as_deref(),
            Self::Deserialization { body, .. } => Some(body.as_bytes()),
            _ => None,
        }
    }
}
