#![allow(clippy::unwrap_used)]
// Integration tests for `DnsLookupClient` using wiremock.

use std::time::Duration;

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use url::Url;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dnslookup_api::{
    CancellationToken, ClientConfig, DnsLookupClient, DnsRecord, Error, QueryOption, RecordKind,
    TransportConfig, USER_AGENT,
};

// ── Helpers ─────────────────────────────────────────────────────────

const API_PATH: &str = "/whoisserver/DNSService";
const API_KEY: &str = "test-key";

const OK_BODY: &str = r#"{"DNSData":{
  "domainName":"whoisxmlapi.com",
  "types":[1,2],
  "dnsTypes":"A,NS",
  "audit":{"createdDate":"2022-07-12 11:46:25 UTC","updatedDate":"2022-07-12 11:46:25 UTC"},
  "dnsRecords":[
    {"type":1,"dnsType":"A","name":"whoisxmlapi.com.","ttl":300,"rRsetType":1,
     "rawText":"whoisxmlapi.com.\u0009300\u0009IN\u0009A\u0009172.67.71.123","address":"172.67.71.123"},
    {"type":2,"dnsType":"NS","name":"whoisxmlapi.com.","additionalName":"elle.ns.cloudflare.com.","ttl":21600,"rRsetType":2,
     "rawText":"whoisxmlapi.com.\u000921600\u0009IN\u0009NS\u0009elle.ns.cloudflare.com.","target":"elle.ns.cloudflare.com."}
  ]}}"#;

const ERROR_BODY: &str = r#"{"ErrorMessage":{"errorCode":"TEST_CODE","msg":"test error message"}}"#;

fn api_url(base: &str) -> Url {
    Url::parse(&format!("{base}{API_PATH}")).unwrap()
}

fn client_for(base: &str) -> DnsLookupClient {
    let config = ClientConfig {
        base_url: api_url(base),
        api_key: SecretString::from(API_KEY),
        transport: TransportConfig::default(),
    };
    DnsLookupClient::from_config(&config).unwrap()
}

async fn setup() -> (MockServer, DnsLookupClient) {
    let server = MockServer::start().await;
    let client = client_for(&server.uri());
    (server, client)
}

async fn mount(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(response)
        .mount(server)
        .await;
}

/// A server that declares a longer body than it sends, then hangs up.
async fn truncating_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut request = Vec::new();
            let mut buf = [0_u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }

            let partial = r#"{"DNSData":{"domainName":"whoisxmlapi.com","dnsRecords":["#;
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n",
                partial.len() + 100
            );
            let _ = socket.write_all(head.as_bytes()).await;
            let _ = socket.write_all(partial.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{addr}")
}

// ── Typed lookups ───────────────────────────────────────────────────

#[tokio::test]
async fn test_get_decodes_records() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("apiKey", API_KEY))
        .and(query_param("domainName", "whoisxmlapi.com"))
        .and(query_param("type", "_all"))
        .and(query_param("outputFormat", "JSON"))
        .and(query_param_is_missing("callback"))
        .respond_with(ResponseTemplate::new(200).set_body_string(OK_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let (data, raw) = client
        .get("whoisxmlapi.com", &[], &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(raw.status.as_u16(), 200);
    assert_eq!(raw.text(), OK_BODY);

    assert_eq!(data.domain_name, "whoisxmlapi.com");
    assert_eq!(data.types, [1, 2]);
    assert_eq!(data.dns_types, "A,NS");
    assert_eq!(
        data.audit.updated_date.to_utc().unwrap().timestamp(),
        1_657_626_385
    );

    let records = &data.dns_records;
    assert_eq!(records.len(), 2);
    assert_eq!(records.typed_len(), 2);
    assert_eq!(records.a()[0].address, "172.67.71.123");
    assert_eq!(records.ns()[0].target, "elle.ns.cloudflare.com.");

    let kinds: Vec<_> = records.iter().map(DnsRecord::kind).collect();
    assert_eq!(kinds, [Some(RecordKind::A), Some(RecordKind::Ns)]);
}

#[tokio::test]
async fn test_get_sends_json_headers() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(header("accept", "application/json"))
        .and(header("content-type", "application/json"))
        .and(header("user-agent", USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_string(OK_BODY))
        .expect(1)
        .mount(&server)
        .await;

    client
        .get("whoisxmlapi.com", &[], &CancellationToken::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_forces_json_over_caller_format() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("outputFormat", "JSON"))
        .and(query_param("type", "A,NS"))
        .respond_with(ResponseTemplate::new(200).set_body_string(OK_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let options = [
        QueryOption::output_format("xml"),
        QueryOption::record_type("a,ns"),
    ];
    let (data, _) = client
        .get("whoisxmlapi.com", &options, &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(data.dns_records.len(), 2);
}

#[tokio::test]
async fn test_get_unparsable_body_is_decode_error() {
    let (server, client) = setup().await;
    mount(
        &server,
        ResponseTemplate::new(500).set_body_string("<?xml version=\"1.0\"?><error/>"),
    )
    .await;

    let result = client
        .get("whoisxmlapi.com", &[], &CancellationToken::new())
        .await;

    let err = result.unwrap_err();
    assert!(
        matches!(err, Error::Deserialization { .. }),
        "expected Deserialization error, got: {err:?}"
    );
    assert!(err.to_string().starts_with("cannot parse response"));
    assert_eq!(err.body(), Some(&b"<?xml version=\"1.0\"?><error/>"[..]));
}

#[tokio::test]
async fn test_get_error_envelope_is_api_error() {
    let (server, client) = setup().await;
    mount(&server, ResponseTemplate::new(499).set_body_string(ERROR_BODY)).await;

    let result = client
        .get("whoisxmlapi.com", &[], &CancellationToken::new())
        .await;

    match result {
        Err(Error::Api { code, message }) => {
            assert_eq!(code, "TEST_CODE");
            assert_eq!(message, "test error message");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_get_error_envelope_wins_over_success_status() {
    let (server, client) = setup().await;
    mount(&server, ResponseTemplate::new(200).set_body_string(ERROR_BODY)).await;

    let result = client
        .get("whoisxmlapi.com", &[], &CancellationToken::new())
        .await;
    assert_eq!(result.unwrap_err().api_error_code(), Some("TEST_CODE"));
}

#[tokio::test]
async fn test_get_incomplete_json_is_decode_error() {
    let (server, client) = setup().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_string(r#"{"DNSData":{"domainName":"whoisxmlapi.com""#),
    )
    .await;

    let result = client
        .get("whoisxmlapi.com", &[], &CancellationToken::new())
        .await;
    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}

// ── Raw lookups ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_raw_returns_body_verbatim() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("type", "NS,MX"))
        .and(query_param("callback", "handle"))
        .and(query_param_is_missing("outputFormat"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-request-id", "abc123")
                .set_body_string("handle({})"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let options = [
        QueryOption::record_type("NS,MX"),
        QueryOption::callback("handle"),
    ];
    let raw = client
        .get_raw("whoisxmlapi.com", &options, &CancellationToken::new())
        .await
        .unwrap();

    assert!(raw.is_success());
    assert_eq!(&raw.body[..], b"handle({})");
    assert_eq!(raw.headers.get("x-request-id").unwrap(), "abc123");
}

#[tokio::test]
async fn test_get_raw_bad_status_carries_body() {
    let (server, client) = setup().await;
    mount(
        &server,
        ResponseTemplate::new(500).set_body_string("<?xml version=\"1.0\"?><error/>"),
    )
    .await;

    let err = client
        .get_raw("whoisxmlapi.com", &[], &CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "API failed with status code: 500");
    assert_eq!(err.body(), Some(&b"<?xml version=\"1.0\"?><error/>"[..]));
}

#[tokio::test]
async fn test_get_raw_error_envelope_is_bad_status() {
    let (server, client) = setup().await;
    mount(&server, ResponseTemplate::new(499).set_body_string(ERROR_BODY)).await;

    let err = client
        .get_raw("whoisxmlapi.com", &[], &CancellationToken::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::BadStatus { status: 499, .. }));
}

#[tokio::test]
async fn test_get_raw_empty_error_body_is_omitted() {
    let (server, client) = setup().await;
    mount(&server, ResponseTemplate::new(503)).await;

    let err = client
        .get_raw("whoisxmlapi.com", &[], &CancellationToken::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::BadStatus { status: 503, body: None }));
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_get_raw_incomplete_json_is_returned() {
    let (server, client) = setup().await;
    let body = r#"{"DNSData":{"domainName":"whoisxmlapi.com""#;
    mount(&server, ResponseTemplate::new(200).set_body_string(body)).await;

    let raw = client
        .get_raw("whoisxmlapi.com", &[], &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(raw.text(), body);
}

// ── Transport failures ──────────────────────────────────────────────

#[tokio::test]
async fn test_truncated_body() {
    let base = truncating_server().await;
    let client = client_for(&base);

    let result = client
        .get("whoisxmlapi.com", &[], &CancellationToken::new())
        .await;
    let err = result.unwrap_err();
    assert!(
        matches!(err, Error::Truncated { .. }),
        "expected Truncated error, got: {err:?}"
    );
    assert!(err.to_string().starts_with("cannot read response"));

    let result = client
        .get_raw("whoisxmlapi.com", &[], &CancellationToken::new())
        .await;
    assert!(
        matches!(result, Err(Error::Truncated { .. })),
        "expected Truncated error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let result = client_for(&base)
        .get_raw("whoisxmlapi.com", &[], &CancellationToken::new())
        .await;
    let err = result.unwrap_err();
    assert!(
        matches!(err, Error::Transport(_)),
        "expected Transport error, got: {err:?}"
    );
    assert!(err.to_string().starts_with("cannot execute request"));
}

#[tokio::test]
async fn test_transport_deadline_is_timeout() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200)
            .set_body_string(OK_BODY)
            .set_delay(Duration::from_secs(5)),
    )
    .await;

    let config = ClientConfig {
        base_url: api_url(&server.uri()),
        api_key: SecretString::from(API_KEY),
        transport: TransportConfig::default().with_timeout(Duration::from_millis(100)),
    };
    let client = DnsLookupClient::from_config(&config).unwrap();

    let result = client
        .get("whoisxmlapi.com", &[], &CancellationToken::new())
        .await;
    assert!(
        matches!(result, Err(Error::Timeout(_))),
        "expected Timeout error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_cancellation_aborts_in_flight_request() {
    let (server, client) = setup().await;
    mount(
        &server,
        ResponseTemplate::new(200)
            .set_body_string(OK_BODY)
            .set_delay(Duration::from_secs(5)),
    )
    .await;

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let result = client.get("whoisxmlapi.com", &[], &cancel).await;
    assert!(
        result.as_ref().is_err_and(Error::is_cancelled),
        "expected Cancelled, got: {result:?}"
    );
}

#[tokio::test]
async fn test_empty_domain_is_left_to_the_service() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("domainName", ""))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"ErrorMessage":{"errorCode":"DNS_LOOKUP_01","msg":"domainName is required"}}"#,
        ))
        .expect(2)
        .mount(&server)
        .await;

    let err = client
        .get("", &[], &CancellationToken::new())
        .await
        .unwrap_err();
    assert_eq!(err.api_error_code(), Some("DNS_LOOKUP_01"));

    let raw = client
        .get_raw("", &[], &CancellationToken::new())
        .await
        .unwrap();
    assert!(raw.text().contains("domainName is required"));
}
