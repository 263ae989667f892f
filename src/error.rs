//! Error types for pin-dns.

use thiserror::Error;

/// Result type alias for pin-dns.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while creating a record.
#[derive(Error, Debug)]
pub enum Error {
    /// Record type outside the supported set.
    #[error(
        "invalid record type {0:?} (valid: A, AAAA, CAA, CNAME, MX, NAPTR, NS, PTR, SOA, SPF, SRV, TXT)"
    )]
    InvalidRecordType(String),

    /// Destination normalized to an empty value list.
    #[error("destination is empty; a change needs at least one value")]
    EmptyDestination,

    /// The zone guess heuristic found no matching hosted zone.
    #[error("could not find a hosted zone for record {name}; specify one explicitly")]
    ZoneNotFound { name: String },

    /// Network/HTTP error.
    #[error("network error: {0}")]
    Network(String),

    /// Response body was not what the service promised.
    #[error("malformed response: {0}")]
    Format(String),

    /// Provider API rejection, passed through verbatim.
    #[error("provider rejected the request (HTTP {status}): {message}")]
    Provider { status: u16, message: String },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Network(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Format(e.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
