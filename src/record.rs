//! Record types and change-request construction.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default TTL for new records, in seconds.
pub const DEFAULT_TTL: u32 = 300;

/// Record types the provider accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    A,
    Aaaa,
    Caa,
    Cname,
    Mx,
    Naptr,
    Ns,
    Ptr,
    Soa,
    Spf,
    Srv,
    Txt,
}

impl RecordType {
    /// Canonical uppercase name, as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
            RecordType::Caa => "CAA",
            RecordType::Cname => "CNAME",
            RecordType::Mx => "MX",
            RecordType::Naptr => "NAPTR",
            RecordType::Ns => "NS",
            RecordType::Ptr => "PTR",
            RecordType::Soa => "SOA",
            RecordType::Spf => "SPF",
            RecordType::Srv => "SRV",
            RecordType::Txt => "TXT",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::Aaaa),
            "CAA" => Ok(RecordType::Caa),
            "CNAME" => Ok(RecordType::Cname),
            "MX" => Ok(RecordType::Mx),
            "NAPTR" => Ok(RecordType::Naptr),
            "NS" => Ok(RecordType::Ns),
            "PTR" => Ok(RecordType::Ptr),
            "SOA" => Ok(RecordType::Soa),
            "SPF" => Ok(RecordType::Spf),
            "SRV" => Ok(RecordType::Srv),
            "TXT" => Ok(RecordType::Txt),
            _ => Err(Error::InvalidRecordType(s.to_string())),
        }
    }
}

/// Destination for a record: a bare value or a list of values.
///
/// Both forms normalize to the same value list, so
/// `Destination::Single("4.4.4.4")` and `Destination::Many(vec!["4.4.4.4"])`
/// build identical change requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Single(String),
    Many(Vec<String>),
}

impl Destination {
    /// Parse a CLI-style destination argument, comma-separated for
    /// multiple values.
    pub fn from_arg(raw: &str) -> Self {
        if raw.contains(',') {
            Destination::Many(raw.split(',').map(|v| v.trim().to_string()).collect())
        } else {
            Destination::Single(raw.to_string())
        }
    }

    /// Normalize to the internal value list.
    pub fn into_values(self) -> Vec<String> {
        match self {
            Destination::Single(value) => vec![value],
            Destination::Many(values) => values,
        }
    }
}

impl From<&str> for Destination {
    fn from(value: &str) -> Self {
        Destination::Single(value.to_string())
    }
}

impl From<String> for Destination {
    fn from(value: String) -> Self {
        Destination::Single(value)
    }
}

impl From<Vec<String>> for Destination {
    fn from(values: Vec<String>) -> Self {
        Destination::Many(values)
    }
}

/// Normalize a record name to absolute form with a single trailing dot.
pub fn normalize_fqdn(name: &str) -> String {
    format!("{}.", name.trim_end_matches('.'))
}

/// Change request document, in the provider's wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeBatch {
    #[serde(rename = "Comment")]
    pub comment: String,
    #[serde(rename = "Changes")]
    pub changes: Vec<Change>,
}

/// A single change inside a batch. Only ever carries one entry here, but
/// the wire format is a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Change {
    #[serde(rename = "Action")]
    pub action: ChangeAction,
    #[serde(rename = "ResourceRecordSet")]
    pub record_set: ResourceRecordSet,
}

/// Change action. Upsert only: create-if-absent-else-replace keeps repeated
/// invocations idempotent at the provider, and plain create/delete are out
/// of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeAction {
    Upsert,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRecordSet {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub record_type: RecordType,
    #[serde(rename = "TTL")]
    pub ttl: u32,
    #[serde(rename = "ResourceRecords")]
    pub resource_records: Vec<ResourceRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRecord {
    #[serde(rename = "Value")]
    pub value: String,
}

/// Build an upsert change request for a record set.
///
/// `values` must be non-empty; callers normalize a bare string through
/// [`Destination`] first.
pub fn build_change(
    name: &str,
    record_type: RecordType,
    values: Vec<String>,
    ttl: u32,
    comment: &str,
) -> Result<ChangeBatch> {
    if values.is_empty() {
        return Err(Error::EmptyDestination);
    }

    Ok(ChangeBatch {
        comment: comment.to_string(),
        changes: vec![Change {
            action: ChangeAction::Upsert,
            record_set: ResourceRecordSet {
                name: name.to_string(),
                record_type,
                ttl,
                resource_records: values
                    .into_iter()
                    .map(|value| ResourceRecord { value })
                    .collect(),
            },
        }],
    })
}
