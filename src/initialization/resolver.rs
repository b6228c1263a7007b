//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::initialization::ProbeLogger;

/// Builds the resolver options used for every lookup.
///
/// Each query gets a single attempt bounded by `DNS_TIMEOUT_SECS`; the probe
/// never retries. The answer cache is disabled so two lookups never share
/// state.
pub fn resolver_opts() -> ResolverOpts {
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(crate::config::DNS_TIMEOUT_SECS);
    opts.attempts = 1;
    opts.cache_size = 0;
    opts.ndots = 0;
    opts
}

/// Keeps only the name servers of `config`; the `domain` and `search`
/// entries are dropped so a name is never retried under a local suffix.
pub fn without_search_domains(config: &ResolverConfig) -> ResolverConfig {
    ResolverConfig::from_parts(None, vec![], config.name_servers().to_vec())
}

/// Initializes the DNS resolver for record lookups.
///
/// Uses the name servers of the system configuration (`/etc/resolv.conf` on
/// Unix) when it can be read, and falls back to the default configuration
/// (Google DNS) otherwise.
pub fn init_resolver(logger: &ProbeLogger) -> TokioAsyncResolver {
    let config = match hickory_resolver::system_conf::read_system_conf() {
        Ok((config, _)) => without_search_domains(&config),
        Err(e) => {
            logger.warn(format_args!(
                "Failed to read system DNS configuration, using defaults: {e}"
            ));
            ResolverConfig::default()
        }
    };

    TokioAsyncResolver::tokio(config, resolver_opts())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_resolver::config::NameServerConfigGroup;
    use hickory_resolver::proto::rr::Name;
    use std::str::FromStr;

    #[test]
    fn test_resolver_opts_single_attempt() {
        let opts = resolver_opts();
        assert_eq!(opts.timeout, Duration::from_secs(5));
        assert_eq!(opts.attempts, 1);
        assert_eq!(opts.cache_size, 0);
    }

    #[test]
    fn test_search_domains_are_dropped() {
        let system = ResolverConfig::from_parts(
            Some(Name::from_str("corp.example.").unwrap()),
            vec![
                Name::from_str("corp.example.").unwrap(),
                Name::from_str("example.net.").unwrap(),
            ],
            NameServerConfigGroup::google(),
        );

        let config = without_search_domains(&system);
        assert!(config.domain().is_none());
        assert!(config.search().is_empty());
        assert_eq!(config.name_servers(), system.name_servers());
    }

    #[tokio::test]
    async fn test_init_resolver_does_not_panic() {
        let _resolver = init_resolver(&ProbeLogger::silent());
    }
}
