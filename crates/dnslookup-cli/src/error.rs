//! CLI error types with miette diagnostics.
//!
//! Maps library and config errors into user-facing errors with actionable
//! help text and a fixed exit code per category.

use miette::Diagnostic;
use thiserror::Error;

use dnslookup_api::Error as ApiError;
use dnslookup_config::ConfigError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
    pub const API: i32 = 9;
    pub const BAD_RESPONSE: i32 = 10;
    pub const INTERRUPTED: i32 = 130;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the DNS Lookup API")]
    #[diagnostic(
        code(dnslookup::connection_failed),
        help(
            "Check your network connection and the endpoint.\n\
             Override it with --base-url or base_url in your profile."
        )
    )]
    ConnectionFailed {
        #[source]
        source: Box<ApiError>,
    },

    #[error("Could not set up the HTTP client: {reason}")]
    #[diagnostic(
        code(dnslookup::tls_error),
        help("Check ca_cert and proxy in your profile, or use --insecure (-k).")
    )]
    TlsError { reason: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(dnslookup::timeout),
        help("Increase the timeout with --timeout or timeout in your profile.")
    )]
    Timeout,

    #[error("Interrupted")]
    #[diagnostic(code(dnslookup::interrupted))]
    Interrupted,

    // ── Authentication ───────────────────────────────────────────────
    #[error("No API key configured for profile '{profile}'")]
    #[diagnostic(
        code(dnslookup::no_credentials),
        help(
            "Store one with: dnslookup config set-key\n\
             Or set the DNSLOOKUP_API_KEY environment variable."
        )
    )]
    NoCredentials { profile: String },

    #[error("The API rejected the request with status {status}")]
    #[diagnostic(
        code(dnslookup::auth_failed),
        help("Verify your API key at https://user.whoisxmlapi.com/products")
    )]
    AuthFailed { status: u16 },

    // ── Remote ───────────────────────────────────────────────────────
    #[error("API error ({code}): {message}")]
    #[diagnostic(code(dnslookup::api_error))]
    Api { code: String, message: String },

    #[error("Unexpected response: {message}")]
    #[diagnostic(
        code(dnslookup::bad_response),
        help("Re-run with -vv to log the exchange, or use `dnslookup raw` to see the body.")
    )]
    BadResponse {
        message: String,
        #[source]
        source: Box<ApiError>,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(dnslookup::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(dnslookup::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: dnslookup config set-key --profile {name}"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error(transparent)]
    #[diagnostic(code(dnslookup::config))]
    Config(Box<ConfigError>),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Could not render output: {0}")]
    #[diagnostic(code(dnslookup::render))]
    Render(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::TlsError { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::Interrupted => exit_code::INTERRUPTED,
            Self::NoCredentials { .. } | Self::AuthFailed { .. } => exit_code::AUTH,
            Self::Api { .. } => exit_code::API,
            Self::BadResponse { .. } => exit_code::BAD_RESPONSE,
            Self::Validation { .. } | Self::ProfileNotFound { .. } => exit_code::USAGE,
            Self::Config(_) | Self::Io(_) | Self::Render(_) => exit_code::GENERAL,
        }
    }
}

// ── Library error mapping ────────────────────────────────────────────

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidArgument { name, message } => Self::Validation {
                field: name,
                reason: message,
            },
            ApiError::InvalidUrl(e) => Self::Validation {
                field: "base_url".into(),
                reason: e.to_string(),
            },
            ApiError::Tls(reason) => Self::TlsError { reason },
            ApiError::Timeout(_) => Self::Timeout,
            ApiError::Cancelled => Self::Interrupted,
            ApiError::Api { code, message } => Self::Api { code, message },
            ApiError::BadStatus {
                status: status @ (401 | 403),
                ..
            } => Self::AuthFailed { status },
            err @ ApiError::Transport(_) => Self::ConnectionFailed {
                source: Box::new(err),
            },
            err @ (ApiError::Truncated { .. }
            | ApiError::ReadResponse(_)
            | ApiError::Deserialization { .. }
            | ApiError::BadStatus { .. }) => Self::BadResponse {
                message: err.to_string(),
                source: Box::new(err),
            },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::NoCredentials { profile } => Self::NoCredentials { profile },
            other => Self::Config(Box::new(other)),
        }
    }
}
