//! Top-level record creation flow.

use crate::api::{ChangeInfo, DnsApi};
use crate::error::Result;
use crate::ip::IpResolver;
use crate::record::{
    build_change, normalize_fqdn, ChangeBatch, Destination, RecordType, DEFAULT_TTL,
};
use crate::zone::guess_hosted_zone;
use serde::Serialize;

/// Parameters for a record upsert.
#[derive(Debug, Clone)]
pub struct CreateRecord {
    pub record_type: RecordType,
    /// Record name; normalized to absolute form before use.
    pub name: String,
    pub destination: Destination,
    /// Hosted zone id. Guessed from the record name when unset.
    pub zone: Option<String>,
    pub comment: String,
    pub ttl: u32,
    /// Build the change request but do not submit it.
    pub dry_run: bool,
}

impl CreateRecord {
    /// Create a request with the defaults: no explicit zone, empty comment,
    /// TTL 300, live submission.
    pub fn new(
        record_type: RecordType,
        name: impl Into<String>,
        destination: impl Into<Destination>,
    ) -> Self {
        Self {
            record_type,
            name: name.into(),
            destination: destination.into(),
            zone: None,
            comment: String::new(),
            ttl: DEFAULT_TTL,
            dry_run: false,
        }
    }

    pub fn zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = Some(zone.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// What a create call produced.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CreateOutcome {
    /// Dry run: the zone the change would go to, and the exact change
    /// request that would have been sent.
    DryRun {
        hosted_zone_id: String,
        change: ChangeBatch,
    },
    /// Provider acknowledgement for a submitted change.
    Submitted(ChangeInfo),
}

/// Create or update a record in a hosted zone.
///
/// Normalizes the name and destination, resolves the zone (guessing it from
/// the record name unless one was given), builds the upsert change request,
/// and submits it. With `dry_run` set, stops short of the provider mutation
/// and returns the request instead.
pub async fn create_record(api: &dyn DnsApi, request: CreateRecord) -> Result<CreateOutcome> {
    let name = normalize_fqdn(&request.name);
    let values = request.destination.into_values();

    let hosted_zone_id = match request.zone {
        Some(zone) => zone,
        None => guess_hosted_zone(api, &name).await?,
    };

    let change = build_change(
        &name,
        request.record_type,
        values,
        request.ttl,
        &request.comment,
    )?;

    if request.dry_run {
        tracing::info!("Dry run; not submitting change for {}", name);
        return Ok(CreateOutcome::DryRun {
            hosted_zone_id,
            change,
        });
    }

    let info = api.change_record_sets(&hosted_zone_id, &change).await?;
    tracing::info!("Submitted change {} ({})", info.id, info.status);
    Ok(CreateOutcome::Submitted(info))
}

/// Upsert an A record for `name` pointing at this machine's public IP.
pub async fn point_record_to_here(
    api: &dyn DnsApi,
    resolver: &IpResolver,
    name: &str,
) -> Result<CreateOutcome> {
    let ip = resolver.get_global_ip().await?;
    create_record(api, CreateRecord::new(RecordType::A, name, vec![ip])).await
}
