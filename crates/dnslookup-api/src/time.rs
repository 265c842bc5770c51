//! Timestamp codec for the audit block.
//!
//! The service writes dates as `"2022-07-12 11:46:25 UTC"`: a naive date-time
//! followed by a zone abbreviation. An empty string means "no timestamp".

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

const LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// A timestamp as reported by the DNS Lookup API.
///
/// The zone abbreviation is kept verbatim so that re-encoding reproduces the
/// wire literal exactly. [`ApiTime::default`] is the zero timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ApiTime(Option<Stamp>);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Stamp {
    local: NaiveDateTime,
    zone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("parsing time {input:?}: expected \"YYYY-MM-DD HH:MM:SS ZZZ\"")]
    Layout { input: String },

    #[error("parsing time {input:?}: {source}")]
    DateTime {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("parsing time {input:?}: invalid zone abbreviation {zone:?}")]
    Zone { input: String, zone: String },
}

impl ApiTime {
    /// The zero timestamp (encodes as `""`).
    pub const fn zero() -> Self {
        Self(None)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_none()
    }

    /// Wall-clock date-time as written on the wire, without zone.
    pub fn naive(&self) -> Option<NaiveDateTime> {
        self.0.as_ref().map(|s| s.local)
    }

    /// Zone abbreviation as written on the wire (e.g. `UTC`, `EST`).
    pub fn zone(&self) -> Option<&str> {
        self.0.as_ref().map(|s| s.zone.as_str())
    }

    /// The instant in UTC, when the zone is `UTC`/`GMT`/`Z`.
    ///
    /// Other abbreviations are ambiguous and yield `None`.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let stamp = self.0.as_ref()?;
        matches!(stamp.zone.as_str(), "UTC" | "GMT" | "Z").then(|| stamp.local.and_utc())
    }
}

impl From<DateTime<Utc>> for ApiTime {
    fn from(value: DateTime<Utc>) -> Self {
        Self(Some(Stamp {
            local: value.naive_utc(),
            zone: "UTC".into(),
        }))
    }
}

impl FromStr for ApiTime {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::zero());
        }

        let Some((local, zone)) = s.rsplit_once(' ') else {
            return Err(TimeParseError::Layout { input: s.into() });
        };

        let local = NaiveDateTime::parse_from_str(local, LAYOUT).map_err(|source| {
            TimeParseError::DateTime {
                input: s.into(),
                source,
            }
        })?;

        // Abbreviations are 3-5 letters (UTC, EST, CEST, ChST).
        if !(3..=5).contains(&zone.len()) || !zone.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(TimeParseError::Zone {
                input: s.into(),
                zone: zone.into(),
            });
        }

        Ok(Self(Some(Stamp {
            local,
            zone: zone.into(),
        })))
    }
}

impl fmt::Display for ApiTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            None => Ok(()),
            Some(stamp) => write!(f, "{} {}", stamp.local.format(LAYOUT), stamp.zone),
        }
    }
}

impl Serialize for ApiTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ApiTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
