//! `raw` command: fetch and print the response body untouched.

use std::io::{self, IsTerminal, Write};

use tracing::debug;

use dnslookup_api::QueryOption;

use crate::cli::{GlobalOpts, RawArgs};
use crate::error::CliError;

use super::Session;

fn options(args: RawArgs) -> Vec<QueryOption> {
    let mut options = Vec::new();
    if let Some(types) = args.record_type {
        options.push(QueryOption::record_type(types));
    }
    if let Some(format) = args.format {
        options.push(QueryOption::output_format(format.as_param()));
    }
    if let Some(name) = args.callback {
        options.push(QueryOption::callback(name));
    }
    options
}

pub async fn handle(session: &Session, args: RawArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let domain = args.domain.clone();
    let options = options(args);

    let resp = session
        .client
        .get_raw(&domain, &options, &session.cancel)
        .await?;

    debug!(
        status = resp.status.as_u16(),
        content_type = ?resp.headers.get("content-type"),
        bytes = resp.body.len(),
        "raw response"
    );

    if global.quiet {
        return Ok(());
    }

    let stdout = io::stdout();
    let interactive = stdout.is_terminal();
    let mut stdout = stdout.lock();
    stdout.write_all(&resp.body)?;
    if interactive && !resp.body.ends_with(b"\n") {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}
