//! `lookup` command: typed fetch and record rendering.

use tabled::Tabled;
use tracing::debug;

use dnslookup_api::{ApiTime, DnsRecord, LookupResponse, QueryOption};

use crate::cli::{GlobalOpts, LookupArgs};
use crate::error::CliError;
use crate::output;

use super::Session;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Type")]
    record_type: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "TTL")]
    ttl: i64,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl RecordRow {
    fn new(record: &DnsRecord, color: bool) -> Self {
        let common = record.common();
        Self {
            record_type: if common.dns_type.is_empty() {
                "?".into()
            } else {
                common.dns_type.clone()
            },
            name: common.name.clone(),
            ttl: common.ttl,
            value: rdata(record),
            status: record.parse_error().map_or_else(
                || output::paint_ok("ok", color),
                |e| output::paint_err(&e.to_string(), color),
            ),
        }
    }
}

/// Record data portion of the zone-file line, e.g. `172.67.71.123` out of
/// `whoisxmlapi.com.\t300\tIN\tA\t172.67.71.123`.
fn rdata(record: &DnsRecord) -> String {
    let raw_text = &record.common().raw_text;
    if raw_text.is_empty() {
        return record.raw().to_owned();
    }
    raw_text
        .splitn(5, '\t')
        .nth(4)
        .map_or_else(|| raw_text.clone(), str::to_owned)
}

/// The zone-file line, or the raw JSON for entries that have none.
fn plain_line(record: &DnsRecord) -> String {
    let raw_text = &record.common().raw_text;
    if raw_text.is_empty() {
        record.raw().to_owned()
    } else {
        raw_text.clone()
    }
}

fn date_or_dash(time: &ApiTime) -> String {
    if time.is_zero() {
        "-".into()
    } else {
        time.to_string()
    }
}

fn detail(resp: &LookupResponse, color: bool) -> String {
    let records = &resp.dns_records;
    let rows: Vec<RecordRow> = records.iter().map(|r| RecordRow::new(r, color)).collect();

    [
        format!("Domain:  {}", resp.domain_name),
        format!("Types:   {}", resp.dns_types),
        format!("Created: {}", date_or_dash(&resp.audit.created_date)),
        format!("Updated: {}", date_or_dash(&resp.audit.updated_date)),
        format!(
            "Records: {} ({} decoded)",
            records.len(),
            records.typed_len()
        ),
        String::new(),
        output::render_table(&rows),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    session: &Session,
    args: LookupArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let options: Vec<QueryOption> = args
        .record_type
        .into_iter()
        .map(QueryOption::record_type)
        .collect();

    let (resp, _) = session
        .client
        .get(&args.domain, &options, &session.cancel)
        .await?;

    let failed = resp.dns_records.failed().count();
    if failed > 0 {
        debug!(failed, "some records could not be decoded");
    }

    let color = output::should_color();
    let out = if args.records_only {
        output::render_list(
            &global.output,
            resp.dns_records.all(),
            |r| RecordRow::new(r, color),
            plain_line,
        )?
    } else {
        output::render_single(
            &global.output,
            &resp,
            |r| detail(r, color),
            |r| {
                r.dns_records
                    .iter()
                    .map(plain_line)
                    .collect::<Vec<_>>()
                    .join("\n")
            },
        )?
    };

    output::print_output(&out, global.quiet);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use dnslookup_api::DnsRecords;

    use super::*;

    fn records(json: &str) -> DnsRecords {
        DnsRecords::decode(json.as_bytes()).unwrap()
    }

    #[test]
    fn rdata_strips_the_owner_columns() {
        let records = records(
            r#"[{"dnsType":"MX","name":"example.com.","rawText":"example.com.\u00093600\u0009IN\u0009MX\u000910 mx.example.com.","priority":10,"target":"mx.example.com."}]"#,
        );
        assert_eq!(rdata(&records.all()[0]), "10 mx.example.com.");
    }

    #[test]
    fn entries_without_raw_text_fall_back_to_json() {
        let records = records(r#"[{"dnsType":"BOGUS"}]"#);
        let entry = &records.all()[0];

        assert_eq!(plain_line(entry), r#"{"dnsType":"BOGUS"}"#);

        let row = RecordRow::new(entry, false);
        assert_eq!(row.record_type, "BOGUS");
        assert_eq!(row.status, "unknown DNS type");
    }

    #[test]
    fn zero_dates_render_as_dash() {
        assert_eq!(date_or_dash(&ApiTime::zero()), "-");
    }
}
