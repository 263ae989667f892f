//! # pin-dns
//!
//! Create or update a record in a hosted DNS zone with one call, optionally
//! pointing it at the machine you are running on.
//!
//! The flow is deliberately small: resolve the public IP when no destination
//! is given, guess which hosted zone owns the record name, build a single
//! idempotent upsert change request, and submit it to the provider (or print
//! it in dry-run mode).
//!
//! ## Usage
//!
//! ```bash
//! # Point test.example.com at this machine's public IP
//! pin-dns test.example.com
//!
//! # Point test.example.com at 93.184.216.34
//! pin-dns test.example.com 93.184.216.34
//!
//! # Several values in descending order, with a TTL of 6000 seconds
//! pin-dns test.example.com 93.184.216.34,93.184.216.35 --ttl 6000
//!
//! # Show the change request without submitting it
//! pin-dns test.example.com 4.4.4.4 --dry-run
//! ```

pub mod api;
pub mod config;
pub mod create;
pub mod error;
pub mod ip;
pub mod record;
pub mod zone;

pub use api::{ChangeInfo, DnsApi, HostedZone, HttpDnsApi};
pub use config::Config;
pub use create::{create_record, point_record_to_here, CreateOutcome, CreateRecord};
pub use error::{Error, Result};
pub use ip::IpResolver;
pub use record::{Destination, RecordType, DEFAULT_TTL};
