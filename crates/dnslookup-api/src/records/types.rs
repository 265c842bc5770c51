// Concrete DNS record shapes returned in `dnsRecords`.
//
// Every shape carries the shared envelope as `common` (flattened on the wire)
// plus its own fields. Missing and `null` fields decode to their zero value,
// matching how the service omits or nulls out empty members.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Fields present on every record regardless of type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommonFields {
    /// Numeric DNS type code (1 for A, 2 for NS, ...).
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub record_type: i64,
    /// DNS type name; selects the concrete shape.
    #[serde(deserialize_with = "null_as_default")]
    pub dns_type: String,
    /// Owner domain name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Time to live, in seconds.
    #[serde(deserialize_with = "null_as_default")]
    pub ttl: i64,
    /// Resource record set type code.
    #[serde(rename = "rRsetType", deserialize_with = "null_as_default")]
    pub rrset_type: i64,
    /// The record in zone-file presentation format.
    #[serde(deserialize_with = "null_as_default")]
    pub raw_text: String,
}

// ── Address records ──────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ARecord {
    #[serde(flatten)]
    pub common: CommonFields,
    /// IPv4 address.
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AaaaRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    /// IPv6 address.
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
}

/// NSAP address (RFC 1706).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NsapRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
}

// ── Name-pointing records ────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NsRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    /// Authoritative name server.
    #[serde(deserialize_with = "null_as_default")]
    pub target: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PtrRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    #[serde(deserialize_with = "null_as_default")]
    pub target: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CnameRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    #[serde(deserialize_with = "null_as_default")]
    pub alias: String,
    /// Canonical name the alias points to.
    #[serde(deserialize_with = "null_as_default")]
    pub target: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnameRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    #[serde(deserialize_with = "null_as_default")]
    pub alias: String,
    /// Subtree the alias is redirected to.
    #[serde(deserialize_with = "null_as_default")]
    pub target: String,
}

// ── Mail records ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MxRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    /// Mail exchanger host.
    #[serde(deserialize_with = "null_as_default")]
    pub target: String,
    /// Preference; lower values are tried first.
    #[serde(deserialize_with = "null_as_default")]
    pub priority: i64,
}

/// Mail destination (obsolete, RFC 883).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MdRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    #[serde(deserialize_with = "null_as_default")]
    pub additional_name: String,
    /// Host with a mail agent for the domain.
    #[serde(deserialize_with = "null_as_default")]
    pub mail_agent: String,
}

/// Mail forwarder (obsolete, RFC 883).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MfRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    #[serde(deserialize_with = "null_as_default")]
    pub additional_name: String,
    /// Host with a mail agent that will forward mail for the domain.
    #[serde(deserialize_with = "null_as_default")]
    pub mail_agent: String,
}

/// Mailbox domain name (experimental, RFC 1035).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MbRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    #[serde(deserialize_with = "null_as_default")]
    pub additional_name: String,
    /// Host holding the specified mailbox.
    #[serde(deserialize_with = "null_as_default")]
    pub mailbox: String,
}

/// Responsible person (RFC 1183).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RpRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    #[serde(deserialize_with = "null_as_default")]
    pub mailbox: String,
    /// Domain holding TXT records with more information.
    #[serde(deserialize_with = "null_as_default")]
    pub text_domain: String,
}

// ── Zone records ─────────────────────────────────────────────────────

/// Start of authority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoaRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    /// Mailbox of the zone administrator.
    #[serde(deserialize_with = "null_as_default")]
    pub admin: String,
    /// Primary master name server.
    #[serde(deserialize_with = "null_as_default")]
    pub host: String,
    /// Seconds after which secondaries stop answering if the master is unreachable.
    #[serde(deserialize_with = "null_as_default")]
    pub expire: i64,
    /// Negative response caching TTL.
    #[serde(deserialize_with = "null_as_default")]
    pub minimum: i64,
    /// Seconds between secondary refresh checks.
    #[serde(deserialize_with = "null_as_default")]
    pub refresh: i64,
    /// Seconds before a failed refresh is retried.
    #[serde(deserialize_with = "null_as_default")]
    pub retry: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub serial: i64,
}

// ── Text and metadata records ────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxtRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    /// Character strings making up the record.
    #[serde(deserialize_with = "null_as_default")]
    pub strings: Vec<String>,
}

/// Certification authority authorization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaaRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    #[serde(deserialize_with = "null_as_default")]
    pub flags: i64,
    /// Property tag, e.g. `issue` or `iodef`.
    #[serde(deserialize_with = "null_as_default")]
    pub tag: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HinfoRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    #[serde(deserialize_with = "null_as_default")]
    pub cpu: String,
    #[serde(deserialize_with = "null_as_default")]
    pub os: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SrvRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    #[serde(deserialize_with = "null_as_default")]
    pub port: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub priority: i64,
    /// Host providing the service.
    #[serde(deserialize_with = "null_as_default")]
    pub target: String,
    /// Relative weight among targets of equal priority.
    #[serde(deserialize_with = "null_as_default")]
    pub weight: i64,
}

/// Naming authority pointer (RFC 3403).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NaptrRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    /// Flags controlling rewriting and interpretation of the other fields.
    #[serde(deserialize_with = "null_as_default")]
    pub flags: String,
    /// Order in which records must be processed.
    #[serde(deserialize_with = "null_as_default")]
    pub order: i64,
    /// Order among records with equal `order`.
    #[serde(deserialize_with = "null_as_default")]
    pub preference: i64,
    /// Substitution expression applied to the client's string.
    #[serde(deserialize_with = "null_as_default")]
    pub regexp: String,
    /// Next domain name to query.
    #[serde(deserialize_with = "null_as_default")]
    pub replacement: String,
    #[serde(deserialize_with = "null_as_default")]
    pub service: String,
}

/// Geographic location (RFC 1876).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    #[serde(deserialize_with = "null_as_default")]
    pub altitude: f64,
    /// Horizontal precision, in centimeters.
    #[serde(deserialize_with = "null_as_default")]
    pub h_precision: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub latitude: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub longitude: f64,
    /// Diameter of the sphere enclosing the described entity.
    #[serde(deserialize_with = "null_as_default")]
    pub size: f64,
    /// Vertical precision, in centimeters.
    #[serde(deserialize_with = "null_as_default")]
    pub v_precision: f64,
}

// ── DNSSEC records ───────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DnskeyRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    #[serde(deserialize_with = "null_as_default")]
    pub algorithm: i64,
    /// Zone key flags.
    #[serde(deserialize_with = "null_as_default")]
    pub flags: i64,
    /// Key tag.
    #[serde(deserialize_with = "null_as_default")]
    pub footprint: i64,
    /// Public key material.
    #[serde(deserialize_with = "null_as_default")]
    pub key: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub protocol: i64,
    /// Human-readable key description.
    #[serde(deserialize_with = "null_as_default")]
    pub public_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Nsec3ParamRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    #[serde(deserialize_with = "null_as_default")]
    pub flags: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub hash_algorithm: i64,
    /// Additional hash iterations.
    #[serde(deserialize_with = "null_as_default")]
    pub iterations: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub salt: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NsecRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    /// Next owner name in canonical order.
    #[serde(deserialize_with = "null_as_default")]
    pub next: String,
    /// Type bit map, as type codes.
    #[serde(deserialize_with = "null_as_default")]
    pub types: Vec<i64>,
}

/// Delegation signer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DsRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    /// Algorithm of the referenced DNSKEY.
    #[serde(deserialize_with = "null_as_default")]
    pub algorithm: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub digest: Vec<String>,
    /// Digest algorithm.
    #[serde(rename = "digestID", deserialize_with = "null_as_default")]
    pub digest_id: i64,
    /// Key tag of the referenced DNSKEY.
    #[serde(deserialize_with = "null_as_default")]
    pub footprint: i64,
}

/// DNSSEC lookaside validation; same layout as DS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DlvRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    #[serde(deserialize_with = "null_as_default")]
    pub algorithm: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub digest: Vec<String>,
    #[serde(rename = "digestID", deserialize_with = "null_as_default")]
    pub digest_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub footprint: i64,
}

/// SSH public key fingerprint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SshfpRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    #[serde(deserialize_with = "null_as_default")]
    pub algorithm: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub digest_type: i64,
    #[serde(rename = "fingerPrint", deserialize_with = "null_as_default")]
    pub fingerprint: Vec<String>,
}

/// DANE TLS association.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TlsaRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    /// Data matched against the presented certificate.
    #[serde(deserialize_with = "null_as_default")]
    pub certificate_association_data: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub certificate_usage: i64,
    /// How the association data is presented (exact, SHA-256, SHA-512).
    #[serde(deserialize_with = "null_as_default")]
    pub matching_type: i64,
    /// Which part of the certificate is matched.
    #[serde(deserialize_with = "null_as_default")]
    pub selector: i64,
}

// ── Opaque data records ──────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DhcidRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    #[serde(deserialize_with = "null_as_default")]
    pub data: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NullRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    /// Up to 65535 octets of anything.
    #[serde(deserialize_with = "null_as_default")]
    pub data: Vec<String>,
}
