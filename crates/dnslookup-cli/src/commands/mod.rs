//! Command handlers: bridge CLI args -> API client -> output formatting.

pub mod config_cmd;
pub mod lookup;
pub mod raw;

use clap::CommandFactory;
use tracing::{debug, info};

use dnslookup_api::{CancellationToken, DnsLookupClient};

use crate::cli::{Cli, CompletionsArgs, GlobalOpts};
use crate::config;
use crate::error::CliError;

/// A configured client plus the token that Ctrl-C fires.
pub struct Session {
    pub client: DnsLookupClient,
    pub cancel: CancellationToken,
}

impl Session {
    /// Resolve configuration, build the client, and arm the interrupt handler.
    pub fn connect(global: &GlobalOpts) -> Result<Self, CliError> {
        let client_config = config::build_client_config(global)?;
        let client = DnsLookupClient::from_config(&client_config)?;
        debug!(base_url = %client.base_url(), "client ready");

        Ok(Self {
            client,
            cancel: cancel_on_interrupt(),
        })
    }
}

fn cancel_on_interrupt() -> CancellationToken {
    let cancel = CancellationToken::new();
    let token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupt received, cancelling request");
            token.cancel();
        }
    });
    cancel
}

/// Write a completion script for `args.shell` to stdout.
pub fn completions(args: &CompletionsArgs) {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "dnslookup", &mut std::io::stdout());
}
