//! Polymorphic decoding of the `dnsRecords` array.
//!
//! The array mixes records of every type, told apart only by `dnsType`.
//! Each element is decoded on its own: first the shared envelope, then the
//! concrete shape selected by the tag. A bad element is kept in
//! [`DnsRecords::all`] with its error attached and never aborts the batch.

mod types;

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use strum::IntoEnumIterator;
use thiserror::Error;
use tracing::trace;

pub use types::*;

/// Why a single record could not be decoded in full.
#[derive(Debug, Clone, Error)]
pub enum RecordError {
    /// The `dnsType` tag is not one the decoder knows.
    #[error("unknown DNS type")]
    UnsupportedType,

    /// The record is not valid JSON for its envelope or concrete shape.
    #[error(transparent)]
    Decode(Arc<serde_json::Error>),
}

impl From<serde_json::Error> for RecordError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(Arc::new(err))
    }
}

/// Decode `null` the same as an absent member: as the field's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// ── Tag table ────────────────────────────────────────────────────────

macro_rules! record_kinds {
    ($( $variant:ident => $tag:literal, $list:ident, $ty:ident; )+) => {
        /// Record types with a concrete shape.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
        pub enum RecordKind {
            $( $variant, )+
        }

        impl RecordKind {
            /// Look up a `dnsType` tag. Unknown tags yield `None`.
            pub fn from_tag(tag: &str) -> Option<Self> {
                match tag {
                    $( $tag => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// The wire tag, e.g. `"AAAA"`.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $tag, )+
                }
            }

            fn decode(self, raw: &RawValue) -> Result<Record, serde_json::Error> {
                match self {
                    $( Self::$variant => serde_json::from_str::<$ty>(raw.get()).map(Record::$variant), )+
                }
            }
        }

        /// A fully decoded record of any known type.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum Record {
            $( $variant($ty), )+
        }

        impl Record {
            pub fn kind(&self) -> RecordKind {
                match self {
                    $( Self::$variant(_) => RecordKind::$variant, )+
                }
            }

            pub fn common(&self) -> &CommonFields {
                match self {
                    $( Self::$variant(r) => &r.common, )+
                }
            }
        }

        /// Decoded contents of a `dnsRecords` array.
        ///
        /// [`all`](Self::all) holds one entry per array element, in order,
        /// including the ones that failed. The per-type accessors hold only
        /// fully decoded records of that type and are a read-only view:
        /// they are not part of the serialized form.
        #[derive(Debug, Clone, Default)]
        pub struct DnsRecords {
            all: Vec<DnsRecord>,
            $( $list: Vec<$ty>, )+
        }

        impl DnsRecords {
            $(
                #[doc = concat!("Decoded `", $tag, "` records, in response order.")]
                pub fn $list(&self) -> &[$ty] {
                    &self.$list
                }
            )+

            /// Number of fully decoded records of `kind`.
            pub fn count(&self, kind: RecordKind) -> usize {
                match kind {
                    $( RecordKind::$variant => self.$list.len(), )+
                }
            }

            fn push_typed(&mut self, record: Record) {
                match record {
                    $( Record::$variant(r) => self.$list.push(r), )+
                }
            }
        }
    };
}

record_kinds! {
    A          => "A",          a,          ARecord;
    Aaaa       => "AAAA",       aaaa,       AaaaRecord;
    Ns         => "NS",         ns,         NsRecord;
    Mx         => "MX",         mx,         MxRecord;
    Md         => "MD",         md,         MdRecord;
    Mf         => "MF",         mf,         MfRecord;
    Mb         => "MB",         mb,         MbRecord;
    Soa        => "SOA",        soa,        SoaRecord;
    Txt        => "TXT",        txt,        TxtRecord;
    Caa        => "CAA",        caa,        CaaRecord;
    Cname      => "CNAME",      cname,      CnameRecord;
    Dname      => "DNAME",      dname,      DnameRecord;
    Dnskey     => "DNSKEY",     dnskey,     DnskeyRecord;
    Nsec3Param => "NSEC3PARAM", nsec3param, Nsec3ParamRecord;
    Nsec       => "NSEC",       nsec,       NsecRecord;
    Ds         => "DS",         ds,         DsRecord;
    Ptr        => "PTR",        ptr,        PtrRecord;
    Srv        => "SRV",        srv,        SrvRecord;
    Loc        => "LOC",        loc,        LocRecord;
    Naptr      => "NAPTR",      naptr,      NaptrRecord;
    Hinfo      => "HINFO",      hinfo,      HinfoRecord;
    Rp         => "RP",         rp,         RpRecord;
    Dlv        => "DLV",        dlv,        DlvRecord;
    Sshfp      => "SSHFP",      sshfp,      SshfpRecord;
    Dhcid      => "DHCID",      dhcid,      DhcidRecord;
    Tlsa       => "TLSA",       tlsa,       TlsaRecord;
    Nsap       => "NSAP",       nsap,       NsapRecord;
    Null       => "NULL",       null,       NullRecord;
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Per-element entry ────────────────────────────────────────────────

/// One element of the `dnsRecords` array: its envelope, the original JSON,
/// and the error that stopped a full decode, if any.
///
/// Serializes as `{"CommonFields": {...}, "raw": {...}, "parseError": ...}`
/// with `parseError` as `null` or the error message. The message is carried
/// so encoded output stays readable; the service's own client library encoded
/// errors as an opaque `{}` instead. Deserializing that form keeps the
/// envelope and raw JSON but never restores the error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsRecord {
    #[serde(rename = "CommonFields", default, deserialize_with = "null_as_default")]
    common: CommonFields,
    raw: Box<RawValue>,
    #[serde(
        rename = "parseError",
        serialize_with = "serialize_parse_error",
        skip_deserializing
    )]
    parse_error: Option<RecordError>,
}

impl DnsRecord {
    /// The shared envelope. Empty when the element was not a valid record.
    pub fn common(&self) -> &CommonFields {
        &self.common
    }

    /// The element exactly as it appeared in the response.
    pub fn raw(&self) -> &str {
        self.raw.get()
    }

    pub fn parse_error(&self) -> Option<&RecordError> {
        self.parse_error.as_ref()
    }

    pub fn is_ok(&self) -> bool {
        self.parse_error.is_none()
    }

    /// Known record type of this entry, if its tag is in the table.
    pub fn kind(&self) -> Option<RecordKind> {
        RecordKind::from_tag(&self.common.dns_type)
    }

    /// Decode the raw JSON again into its concrete shape.
    pub fn to_record(&self) -> Result<Record, RecordError> {
        let kind = self.kind().ok_or(RecordError::UnsupportedType)?;
        Ok(kind.decode(&self.raw)?)
    }
}

#[allow(clippy::ref_option)]
fn serialize_parse_error<S: Serializer>(
    err: &Option<RecordError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match err {
        Some(err) => serializer.collect_str(err),
        None => serializer.serialize_none(),
    }
}

// ── Decoder ──────────────────────────────────────────────────────────

impl DnsRecords {
    /// Decode a JSON array of records.
    ///
    /// Fails only when the input is not a JSON array (or `null`, which
    /// yields an empty collection); element failures are recorded per entry.
    pub fn decode(json: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(json)
    }

    fn from_fragments(fragments: Vec<Box<RawValue>>) -> Self {
        let mut records = Self {
            all: Vec::with_capacity(fragments.len()),
            ..Self::default()
        };
        for raw in fragments {
            let entry = records.decode_fragment(raw);
            records.all.push(entry);
        }
        records
    }

    fn decode_fragment(&mut self, raw: Box<RawValue>) -> DnsRecord {
        // A bare `null` element is an empty envelope, which then fails the tag lookup.
        let common = match serde_json::from_str::<Option<CommonFields>>(raw.get()) {
            Ok(common) => common.unwrap_or_default(),
            Err(err) => {
                trace!(error = %err, "record envelope decode failed");
                return DnsRecord {
                    common: CommonFields::default(),
                    raw,
                    parse_error: Some(err.into()),
                };
            }
        };

        let Some(kind) = RecordKind::from_tag(&common.dns_type) else {
            trace!(dns_type = %common.dns_type, "unsupported record type");
            return DnsRecord {
                common,
                raw,
                parse_error: Some(RecordError::UnsupportedType),
            };
        };

        match kind.decode(&raw) {
            Ok(record) => {
                self.push_typed(record);
                DnsRecord {
                    common,
                    raw,
                    parse_error: None,
                }
            }
            Err(err) => {
                trace!(dns_type = %kind, error = %err, "record decode failed");
                DnsRecord {
                    common,
                    raw,
                    parse_error: Some(err.into()),
                }
            }
        }
    }

    /// Every array element, in response order.
    pub fn all(&self) -> &[DnsRecord] {
        &self.all
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DnsRecord> {
        self.all.iter()
    }

    /// Entries whose full decode failed.
    pub fn failed(&self) -> impl Iterator<Item = &DnsRecord> {
        self.all.iter().filter(|r| !r.is_ok())
    }

    /// Total number of records across the per-type lists.
    pub fn typed_len(&self) -> usize {
        RecordKind::iter().map(|kind| self.count(kind)).sum()
    }
}

impl<'a> IntoIterator for &'a DnsRecords {
    type Item = &'a DnsRecord;
    type IntoIter = std::slice::Iter<'a, DnsRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.all.iter()
    }
}

impl Serialize for DnsRecords {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.all.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DnsRecords {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fragments = Option::<Vec<Box<RawValue>>>::deserialize(deserializer)?;
        Ok(Self::from_fragments(fragments.unwrap_or_default()))
    }
}
