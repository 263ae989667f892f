//! Hosted-zone resolution heuristic.

use crate::api::{DnsApi, HostedZone};
use crate::error::{Error, Result};

/// Pick the hosted zone whose dotted name equals the last three labels of
/// `record_name`.
///
/// String matching only: assumes a three-label zone apex such as
/// `example.com.` and misses deeper or shallower zone layouts. When several
/// zones carry the same name, the last one in listing order wins; that
/// tie-break is an accident of iteration, not a contract.
pub fn match_zone<'a>(zones: &'a [HostedZone], record_name: &str) -> Option<&'a HostedZone> {
    let labels: Vec<&str> = record_name.split('.').collect();
    let tail = &labels[labels.len().saturating_sub(3)..];

    zones
        .iter()
        .filter(|zone| zone.name.split('.').eq(tail.iter().copied()))
        .last()
}

/// List the caller's hosted zones and guess the one owning `record_name`.
///
/// Fails with [`Error::ZoneNotFound`] when nothing matches; the caller must
/// then supply a zone explicitly.
pub async fn guess_hosted_zone(api: &dyn DnsApi, record_name: &str) -> Result<String> {
    let zones = api.list_hosted_zones().await?;

    match match_zone(&zones, record_name) {
        Some(zone) => {
            tracing::debug!("Guessed hosted zone {} for {}", zone.id, record_name);
            Ok(zone.id.clone())
        }
        None => Err(Error::ZoneNotFound {
            name: record_name.to_string(),
        }),
    }
}
