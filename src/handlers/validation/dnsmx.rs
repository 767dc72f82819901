use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};
use trust_dns_resolver::{
    TokioAsyncResolver,
    config::{ResolverConfig, ResolverOpts},
    error::ResolveError,
    system_conf,
};

#[cfg(test)]
use mockall::automock;

/// Failure of a single MX lookup.
///
/// Callers of [`resolve_mx`] never see this: every failure is folded into an
/// empty record list.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("dns resolution failed: {0}")]
    Resolve(#[from] ResolveError),
    #[error("no MX records for {0}")]
    NoRecords(String),
}

/// Source of MX records for a domain.
///
/// Implementations return exchange hostnames in the order the source reports
/// them, without re-sorting by preference.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MxLookup: Send + Sync {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<String>, LookupError>;
}

/// MX lookups over the network through the system resolver.
///
/// The resolver's answer cache is disabled so every call issues a fresh
/// query. Timeouts and retries are left at the library defaults.
#[derive(Clone)]
pub struct DnsMxResolver {
    resolver: TokioAsyncResolver,
}

impl DnsMxResolver {
    /// Builds a resolver from `/etc/resolv.conf` (or the platform equivalent),
    /// falling back to the library's default upstreams when the system
    /// configuration cannot be read.
    pub fn from_system_conf() -> Self {
        let (config, mut opts) = match system_conf::read_system_conf() {
            Ok(conf) => conf,
            Err(err) => {
                warn!(error = %err, "system resolver configuration unavailable, using defaults");
                (ResolverConfig::default(), ResolverOpts::default())
            }
        };
        opts.cache_size = 0;

        Self {
            resolver: TokioAsyncResolver::tokio(config, opts),
        }
    }
}

#[async_trait]
impl MxLookup for DnsMxResolver {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<String>, LookupError> {
        let lookup = self.resolver.mx_lookup(fully_qualified(domain)).await?;
        Ok(lookup.iter().map(|mx| mx.exchange().to_utf8()).collect())
    }
}

/// Appends the root label so the resolver queries the name as given instead
/// of expanding it with the `resolv.conf` search list.
fn fully_qualified(domain: &str) -> String {
    if domain.ends_with('.') {
        domain.to_string()
    } else {
        format!("{domain}.")
    }
}

/// Fixed, in-memory MX table.
///
/// Resolves deterministically without touching the network; domains not in
/// the table fail with [`LookupError::NoRecords`].
#[derive(Debug, Clone, Default)]
pub struct StaticMxResolver {
    records: HashMap<String, Vec<String>>,
}

impl StaticMxResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records<I, S>(mut self, domain: &str, exchanges: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.records.insert(
            domain.to_string(),
            exchanges.into_iter().map(Into::into).collect(),
        );
        self
    }
}

#[async_trait]
impl MxLookup for StaticMxResolver {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<String>, LookupError> {
        self.records
            .get(domain)
            .cloned()
            .ok_or_else(|| LookupError::NoRecords(domain.to_string()))
    }
}

/// Resolves the MX exchanges of `domain`.
///
/// An empty domain is answered locally with no records. Any lookup failure
/// (NXDOMAIN, timeout, malformed name, empty answer) also yields an empty
/// list, indistinguishable from a domain that legitimately has no MX
/// records. Trailing root dots are stripped from the returned hostnames.
pub async fn resolve_mx(lookup: &dyn MxLookup, domain: &str) -> Vec<String> {
    if domain.is_empty() {
        return Vec::new();
    }

    match lookup.lookup_mx(domain).await {
        Ok(exchanges) => exchanges
            .into_iter()
            .map(|exchange| exchange.trim_end_matches('.').to_string())
            .collect(),
        Err(err) => {
            debug!(domain, error = %err, "MX lookup failed");
            Vec::new()
        }
    }
}
