//! Resolver configuration sourced from the environment.

/// Environment variable naming the nameserver address.
pub const DNS_SERVER_VAR: &str = "DNS_SERVER";

/// Environment variable naming the search domain.
pub const SEARCH_DOMAIN_VAR: &str = "SEARCH_DOMAIN";

/// Environment variable overriding the resolver config path
/// (default `/etc/resolv.conf`).
pub const RESOLV_CONF_PATH_VAR: &str = "RESOLV_CONF_PATH";

/// A complete resolver configuration: one search domain, one nameserver.
///
/// Only ever constructed when both values are present — a partial
/// configuration is represented by the absence of a `ResolvConfig`, and the
/// resolver file is then left untouched.
///
/// # Example
///
/// ```
/// use resolv_entrypoint::ResolvConfig;
///
/// let config = ResolvConfig::new("example.com", "8.8.8.8");
/// assert_eq!(config.search_domain, "example.com");
/// assert_eq!(config.nameserver, "8.8.8.8");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvConfig {
    /// Domain suffix appended to unqualified hostnames during lookup.
    pub search_domain: String,

    /// Nameserver address (e.g., `"8.8.8.8"`).
    pub nameserver: String,
}

impl ResolvConfig {
    /// Creates a resolver config from explicit values.
    #[must_use]
    pub fn new(search_domain: impl Into<String>, nameserver: impl Into<String>) -> Self {
        Self {
            search_domain: search_domain.into(),
            nameserver: nameserver.into(),
        }
    }

    /// Resolves [`DNS_SERVER_VAR`] and [`SEARCH_DOMAIN_VAR`] from the
    /// process environment.
    ///
    /// Returns `None` when either variable is unset or empty; the caller is
    /// expected to warn and skip the resolver write.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_vars(
            std::env::var(DNS_SERVER_VAR).ok().as_deref(),
            std::env::var(SEARCH_DOMAIN_VAR).ok().as_deref(),
        )
    }

    /// Environment-independent core of [`from_env`](Self::from_env).
    ///
    /// An unset variable and a variable set to the empty string are
    /// equivalent: both yield `None`.
    #[must_use]
    pub fn from_vars(dns_server: Option<&str>, search_domain: Option<&str>) -> Option<Self> {
        match (dns_server, search_domain) {
            (Some(dns), Some(domain)) if !dns.is_empty() && !domain.is_empty() => {
                Some(Self::new(domain, dns))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_values() {
        let c = ResolvConfig::new("corp.internal", "10.0.0.2");
        assert_eq!(c.search_domain, "corp.internal");
        assert_eq!(c.nameserver, "10.0.0.2");
    }

    #[test]
    fn from_vars_requires_both() {
        let c = ResolvConfig::from_vars(Some("8.8.8.8"), Some("example.com")).unwrap();
        assert_eq!(c.search_domain, "example.com");
        assert_eq!(c.nameserver, "8.8.8.8");
    }

    #[test]
    fn from_vars_rejects_missing() {
        assert_eq!(ResolvConfig::from_vars(None, Some("example.com")), None);
        assert_eq!(ResolvConfig::from_vars(Some("8.8.8.8"), None), None);
        assert_eq!(ResolvConfig::from_vars(None, None), None);
    }

    #[test]
    fn from_vars_treats_empty_as_unset() {
        assert_eq!(ResolvConfig::from_vars(Some(""), Some("example.com")), None);
        assert_eq!(ResolvConfig::from_vars(Some("8.8.8.8"), Some("")), None);
        assert_eq!(ResolvConfig::from_vars(Some(""), Some("")), None);
    }
}
