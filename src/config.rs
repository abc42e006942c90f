//! Process configuration.
//!
//! Every option can be given as a flag or through the environment; flags win.

use crate::storage::LatestPolicy;
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

#[derive(Parser, Clone, Debug, PartialEq)]
#[command(author, version, about = "Stores and serves road detection measurements")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Upper bound for a single store call, in milliseconds.
    #[arg(
        long,
        env = "STORE_TIMEOUT_MS",
        default_value_t = 2000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub store_timeout_ms: u64,

    /// Ordering used to pick the most recent record.
    #[arg(long, env = "LATEST_BY", value_enum, default_value_t = LatestPolicy::Uid)]
    pub latest_by: LatestPolicy,
}

impl Config {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let config = Config::try_parse_from([
            "detection-store",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--store-timeout-ms",
            "250",
            "--latest-by",
            "timestamp",
        ])
        .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.store_timeout(), Duration::from_millis(250));
        assert_eq!(config.latest_by, LatestPolicy::Timestamp);
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let result = Config::try_parse_from(["detection-store", "--latest-by", "newest"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let result = Config::try_parse_from(["detection-store", "--store-timeout-ms", "0"]);
        assert!(result.is_err());
    }
}
