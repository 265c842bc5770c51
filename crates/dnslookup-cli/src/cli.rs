//! Clap derive structures for the `dnslookup` CLI.
//!
//! Defines the command tree, global flags, and shared value enums.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// dnslookup -- query the WhoisXML DNS Lookup API
#[derive(Debug, Parser)]
#[command(
    name = "dnslookup",
    version,
    about = "Look up DNS records through the WhoisXML DNS Lookup API",
    long_about = "Fetch every DNS record of a domain from the WhoisXML DNS Lookup API.\n\n\
        `lookup` decodes the records into typed rows; `raw` prints the\n\
        response body exactly as the service sent it.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config profile to use
    #[arg(long, short = 'p', env = "DNSLOOKUP_PROFILE", global = true)]
    pub profile: Option<String>,

    /// API key (overrides profile)
    #[arg(long, env = "DNSLOOKUP_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// API endpoint (overrides profile)
    #[arg(long, env = "DNSLOOKUP_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "DNSLOOKUP_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept invalid TLS certificates
    #[arg(long, short = 'k', env = "DNSLOOKUP_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "DNSLOOKUP_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// HTTP(S) proxy URL (overrides profile)
    #[arg(long, env = "DNSLOOKUP_PROXY", global = true)]
    pub proxy: Option<String>,
}

// ── Output Enums ─────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one record per line (scripting)
    Plain,
}

/// Response body format requested from the service.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum BodyFormat {
    Json,
    Xml,
}

impl BodyFormat {
    pub fn as_param(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Xml => "XML",
        }
    }
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up and decode the DNS records of a domain
    #[command(alias = "l")]
    Lookup(LookupArgs),

    /// Fetch a lookup response and print the body verbatim
    Raw(RawArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Lookups ──────────────────────────────────────────────────────────

/// Reject blank domain names before anything is sent.
fn domain_name(value: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("domain name must not be empty".into());
    }
    Ok(value.to_owned())
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Domain name to look up
    #[arg(value_parser = domain_name)]
    pub domain: String,

    /// Record types, comma separated (e.g. "A,MX"); all types when omitted
    #[arg(long = "type", short = 't')]
    pub record_type: Option<String>,

    /// Emit only the record list, without the lookup summary
    #[arg(long)]
    pub records_only: bool,
}

#[derive(Debug, Args)]
pub struct RawArgs {
    /// Domain name to look up
    #[arg(value_parser = domain_name)]
    pub domain: String,

    /// Record types, comma separated (e.g. "NS,MX"); all types when omitted
    #[arg(long = "type", short = 't')]
    pub record_type: Option<String>,

    /// Body format requested from the service
    #[arg(long, short = 'f')]
    pub format: Option<BodyFormat>,

    /// JSONP callback function wrapped around a JSON body
    #[arg(long)]
    pub callback: Option<String>,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,

    /// Display the current configuration with API keys masked
    Show,

    /// Store the API key of the active profile
    SetKey {
        /// API key; prompted for when omitted
        key: Option<String>,

        /// Write the key into the config file instead of the system keyring
        #[arg(long)]
        plaintext: bool,
    },
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
