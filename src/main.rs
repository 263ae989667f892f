//! pin-dns - create or update a record in a hosted DNS zone.

use anyhow::Context;
use clap::Parser;
use pin_dns::api::HttpDnsApi;
use pin_dns::config::Config;
use pin_dns::create::{create_record, CreateOutcome, CreateRecord};
use pin_dns::ip::IpResolver;
use pin_dns::record::{Destination, RecordType, DEFAULT_TTL};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "pin-dns")]
#[command(about = "Create or update a record in a hosted DNS zone")]
#[command(version)]
struct Cli {
    /// Record to add (e.g. "test.example.com")
    name: String,

    /// Destination value(s), comma-separated. Defaults to this machine's
    /// public IP when omitted.
    destination: Option<String>,

    /// The type of the record to add.
    #[arg(
        long = "type",
        value_name = "TYPE",
        default_value = "A",
        value_parser = parse_record_type
    )]
    record_type: RecordType,

    /// The TTL for the new record, in seconds.
    #[arg(long, default_value_t = DEFAULT_TTL, value_parser = clap::value_parser!(u32).range(1..))]
    ttl: u32,

    /// Hosted zone id. Guessed from the record name when omitted.
    #[arg(long)]
    zone: Option<String>,

    /// Optional comment for the change request.
    #[arg(long, default_value = "")]
    comment: String,

    /// Print the change request and quit without making changes.
    #[arg(long)]
    dry_run: bool,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn parse_record_type(s: &str) -> Result<RecordType, pin_dns::Error> {
    RecordType::from_str(s)
}

fn get_config_path(cli_path: Option<PathBuf>) -> PathBuf {
    if let Some(path) = cli_path {
        return path;
    }

    // Default locations
    let candidates = [
        dirs::config_dir().map(|p| p.join("pin-dns/config.toml")),
        Some(PathBuf::from("/etc/pin-dns/config.toml")),
        Some(PathBuf::from("config.toml")),
    ];

    for candidate in candidates.into_iter().flatten() {
        if candidate.exists() {
            return candidate;
        }
    }

    // Return default even if it doesn't exist
    dirs::config_dir()
        .map(|p| p.join("pin-dns/config.toml"))
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config_path = get_config_path(cli.config.clone());
    let config = Config::load_from(&config_path)?;

    let api = HttpDnsApi::from_config(&config)?;

    let destination = match &cli.destination {
        Some(raw) => Destination::from_arg(raw),
        None => {
            let resolver = IpResolver::with_url(&config.ip_service, config.timeout());
            let ip = resolver
                .get_global_ip()
                .await
                .context("failed to resolve this machine's public IP")?;
            Destination::Single(ip)
        }
    };

    let request = CreateRecord {
        record_type: cli.record_type,
        name: cli.name,
        destination,
        zone: cli.zone,
        comment: cli.comment,
        ttl: cli.ttl,
        dry_run: cli.dry_run,
    };

    match create_record(&api, request).await? {
        outcome @ CreateOutcome::DryRun { .. } => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        CreateOutcome::Submitted(info) => {
            println!("submitted change {} ({})", info.id, info.status);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_multiple_values_and_ttl() {
        let cli = Cli::try_parse_from([
            "pin-dns",
            "test.example.com",
            "93.184.216.34,93.184.216.35",
            "--ttl",
            "6000",
        ])
        .unwrap();

        assert_eq!(cli.ttl, 6000);
        let values = Destination::from_arg(cli.destination.as_deref().unwrap()).into_values();
        assert_eq!(
            values,
            vec!["93.184.216.34".to_string(), "93.184.216.35".to_string()]
        );
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["pin-dns", "test.example.com"]).unwrap();

        assert_eq!(cli.record_type, RecordType::A);
        assert_eq!(cli.ttl, DEFAULT_TTL);
        assert!(cli.destination.is_none());
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_cli_rejects_unknown_record_type() {
        let result =
            Cli::try_parse_from(["pin-dns", "test.example.com", "--type", "BOGUS"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_zero_ttl() {
        let result = Cli::try_parse_from(["pin-dns", "test.example.com", "--ttl", "0"]);
        assert!(result.is_err());
    }
}
