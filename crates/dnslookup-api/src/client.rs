// Async HTTP client for the WhoisXML DNS Lookup API.
//
// Endpoint: GET {base}?apiKey=…&domainName=…&type=…&outputFormat=…
// Auth: `apiKey` query parameter

use std::borrow::Cow;
use std::future::Future;

use bytes::{Bytes, BytesMut};
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use secrecy::{ExposeSecret, SecretString};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

use crate::error::Error;
use crate::models::{ApiEnvelope, LookupResponse};
use crate::options::{QueryOption, QueryParams};
use crate::transport::TransportConfig;

/// Production endpoint of the DNS Lookup API.
pub const DEFAULT_BASE_URL: &str = "https://www.whoisxmlapi.com/whoisserver/DNSService";

const BODY_PREVIEW_CHARS: usize = 200;

// ── Configuration ────────────────────────────────────────────────────

/// Everything needed to build a [`DnsLookupClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub api_key: SecretString,
    pub transport: TransportConfig,
}

impl ClientConfig {
    /// Config for the production endpoint with default transport settings.
    pub fn new(api_key: SecretString) -> Result<Self, Error> {
        Ok(Self {
            base_url: Url::parse(DEFAULT_BASE_URL)?,
            api_key,
            transport: TransportConfig::default(),
        })
    }
}

// ── Raw response ─────────────────────────────────────────────────────

/// The HTTP exchange as received: status, headers and the full body.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the DNS Lookup API.
///
/// Holds only immutable configuration, so a single instance can be cloned
/// or shared across tasks.
#[derive(Debug, Clone)]
pub struct DnsLookupClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: SecretString,
}

impl DnsLookupClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Client for the production endpoint.
    pub fn new(api_key: SecretString, transport: &TransportConfig) -> Result<Self, Error> {
        Ok(Self {
            http: transport.build_client()?,
            base_url: Url::parse(DEFAULT_BASE_URL)?,
            api_key,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, Error> {
        Ok(Self {
            http: config.transport.build_client()?,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Wrap an existing `reqwest::Client` (caller manages headers and TLS).
    pub fn from_reqwest(api_key: SecretString, base_url: Url, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }

    /// Same client pointed at a different endpoint.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Lookups ──────────────────────────────────────────────────────

    /// Look up every record of `domain` and decode the result.
    ///
    /// `outputFormat=JSON` is always applied after `options`, so a caller
    /// supplied format has no effect. The HTTP status is not checked: the
    /// body decides the outcome. A non-empty `ErrorMessage` fails the call
    /// with [`Error::Api`].
    ///
    /// Returns the decoded data together with the raw exchange.
    pub async fn get(
        &self,
        domain: &str,
        options: &[QueryOption],
        cancel: &CancellationToken,
    ) -> Result<(LookupResponse, RawResponse), Error> {
        let mut params = self.params(domain, options);
        if let Some(requested) = params.get("outputFormat").filter(|f| *f != "JSON") {
            warn!(requested, "typed lookup always requests JSON, ignoring outputFormat");
        }
        QueryOption::output_format("JSON").apply(&mut params);

        let raw = cancellable(cancel, self.execute(domain, &params)).await?;

        let envelope: ApiEnvelope = serde_json::from_slice(&raw.body).map_err(|e| {
            let body = raw.text().into_owned();
            let preview: String = body.chars().take(BODY_PREVIEW_CHARS).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })?;

        if !envelope.error.is_empty() {
            return Err(Error::Api {
                code: envelope.error.code,
                message: envelope.error.message,
            });
        }

        Ok((envelope.data, raw))
    }

    /// Look up `domain` and return the response as received.
    ///
    /// The body is not decoded, so any `outputFormat` or `callback` works.
    /// A non-2xx status fails with [`Error::BadStatus`] carrying the body.
    pub async fn get_raw(
        &self,
        domain: &str,
        options: &[QueryOption],
        cancel: &CancellationToken,
    ) -> Result<RawResponse, Error> {
        let params = self.params(domain, options);
        let raw = cancellable(cancel, self.execute(domain, &params)).await?;

        if !raw.is_success() {
            return Err(Error::BadStatus {
                status: raw.status.as_u16(),
                body: (!raw.body.is_empty()).then_some(raw.body),
            });
        }

        Ok(raw)
    }

    // ── Request plumbing ─────────────────────────────────────────────

    /// `domainName` is sent as given, even when empty; the service reports
    /// what it makes of it.
    fn params(&self, domain: &str, options: &[QueryOption]) -> QueryParams {
        let mut params = QueryParams::new();
        params.set("apiKey", self.api_key.expose_secret());
        params.set("domainName", domain);
        params.set("type", "_all");
        for option in options {
            option.apply(&mut params);
        }
        params
    }

    async fn execute(&self, domain: &str, params: &QueryParams) -> Result<RawResponse, Error> {
        let mut url = self.base_url.clone();
        url.set_query(Some(&params.encode()));

        debug!(
            domain,
            record_type = params.get("type"),
            "GET {}",
            self.base_url
        );

        let resp = self.http.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout(e)
            } else {
                Error::Transport(e)
            }
        })?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = read_body(resp).await?;
        debug!(status = status.as_u16(), bytes = body.len(), "response received");

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

/// Read the whole body, failing with [`Error::Truncated`] when the stream
/// breaks off or ends short of the declared `Content-Length`.
async fn read_body(mut resp: reqwest::Response) -> Result<Bytes, Error> {
    let expected = resp.content_length();
    let mut buf = BytesMut::new();

    loop {
        match resp.chunk().await {
            Ok(Some(chunk)) => buf.extend_from_slice(&chunk),
            Ok(None) => break,
            Err(e) if e.is_timeout() => return Err(Error::Timeout(e)),
            Err(e) if e.is_body() || e.is_decode() => {
                return Err(Error::Truncated {
                    expected,
                    received: byte_count(&buf),
                    source: Some(e),
                });
            }
            Err(e) => return Err(Error::ReadResponse(e)),
        }
    }

    let received = byte_count(&buf);
    if expected.is_some_and(|n| received < n) {
        return Err(Error::Truncated {
            expected,
            received,
            source: None,
        });
    }

    Ok(buf.freeze())
}

fn byte_count(buf: &[u8]) -> u64 {
    u64::try_from(buf.len()).unwrap_or(u64::MAX)
}

/// Race `fut` against `cancel`; cancellation wins ties.
async fn cancellable<T>(
    cancel: &CancellationToken,
    fut: impl Future<Output = Result<T, Error>>,
) -> Result<T, Error> {
    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(Error::Cancelled),
        result = fut => result,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client() -> DnsLookupClient {
        DnsLookupClient::from_reqwest(
            SecretString::from("secret-key"),
            Url::parse("http://localhost/DNSService").unwrap(),
            reqwest::Client::new(),
        )
    }

    #[test]
    fn client_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DnsLookupClient>();
    }

    #[test]
    fn default_params() {
        let params = client().params("whoisxmlapi.com", &[]);
        assert_eq!(params.get("apiKey"), Some("secret-key"));
        assert_eq!(params.get("domainName"), Some("whoisxmlapi.com"));
        assert_eq!(params.get("type"), Some("_all"));
        assert_eq!(params.get("outputFormat"), None);
    }

    #[test]
    fn options_override_default_type() {
        let params = client()
            .params("whoisxmlapi.com", &[QueryOption::record_type("ns,mx")]);
        assert_eq!(params.get("type"), Some("NS,MX"));
    }

    #[test]
    fn empty_domain_is_passed_through() {
        let params = client().params("", &[]);
        assert_eq!(params.get("domainName"), Some(""));
        assert!(params.encode().contains("domainName=&"));
    }

    #[test]
    fn debug_output_hides_the_key() {
        let rendered = format!("{:?}", client());
        assert!(!rendered.contains("secret-key"));
    }

    #[tokio::test]
    async fn cancelled_token_short_circuits() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let result: Result<(), Error> = cancellable(&cancel, std::future::pending()).await;
        assert!(matches!(result, Err(Error::Cancelled)));
    }
}
