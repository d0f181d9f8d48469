//! `/etc/resolv.conf` writing.
//!
//! The file is rendered in full and replaced in a single write. There is no
//! append path and no merging with prior content: re-running with the same
//! inputs reproduces the same bytes.

use crate::config::{RESOLV_CONF_PATH_VAR, ResolvConfig};
use crate::error::{EntrypointError, Result};
use std::path::{Path, PathBuf};

/// Default resolver configuration path consulted by the libc resolver.
const DEFAULT_RESOLV_CONF: &str = "/etc/resolv.conf";

/// Writes the resolver configuration file.
///
/// # Ordering
///
/// [`write`](Self::write) runs to completion (or the process aborts) before
/// the workload is executed, so the workload only ever observes the fully
/// written file or the untouched previous state.
///
/// # Example
///
/// ```rust,ignore
/// use resolv_entrypoint::{ResolvConfig, ResolvFile};
///
/// let file = ResolvFile::new();
/// file.write(&ResolvConfig::new("example.com", "8.8.8.8"))?;
/// ```
pub struct ResolvFile {
    path: PathBuf,
}

impl ResolvFile {
    /// Targets the default `/etc/resolv.conf`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_RESOLV_CONF),
        }
    }

    /// Targets a custom file (useful for testing).
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Targets the path named by [`RESOLV_CONF_PATH_VAR`], falling back to
    /// the default when the variable is unset or empty.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(RESOLV_CONF_PATH_VAR) {
            Ok(path) if !path.is_empty() => Self::with_path(path),
            _ => Self::new(),
        }
    }

    /// Returns the target path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the target file with the rendered configuration.
    ///
    /// Any previous content is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`EntrypointError::WriteResolv`] when the file cannot be
    /// written. Callers must treat this as fatal rather than continue with a
    /// stale resolver state.
    pub fn write(&self, config: &ResolvConfig) -> Result<()> {
        std::fs::write(&self.path, render(config)).map_err(|source| {
            EntrypointError::WriteResolv {
                path: self.path.display().to_string(),
                source,
            }
        })?;

        tracing::info!(
            search_domain = %config.search_domain,
            nameserver = %config.nameserver,
            path = %self.path.display(),
            "Wrote resolver configuration"
        );
        Ok(())
    }
}

impl Default for ResolvFile {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// File content helpers
// ---------------------------------------------------------------------------

/// Renders the resolver file body.
///
/// ```text
/// search example.com
/// nameserver 8.8.8.8
/// ```
///
/// Exactly two directives, a trailing newline after each, nothing else.
#[must_use]
pub fn render(config: &ResolvConfig) -> String {
    format!(
        "search {domain}\nnameserver {ns}\n",
        domain = config.search_domain,
        ns = config.nameserver,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_is_bit_exact() {
        let config = ResolvConfig::new("example.com", "8.8.8.8");
        assert_eq!(render(&config), "search example.com\nnameserver 8.8.8.8\n");
    }

    #[test]
    fn default_targets_etc_resolv_conf() {
        assert_eq!(ResolvFile::new().path(), Path::new("/etc/resolv.conf"));
    }

    #[test]
    fn write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resolv.conf");

        ResolvFile::with_path(&path)
            .write(&ResolvConfig::new("corp.internal", "10.0.0.2"))
            .unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "search corp.internal\nnameserver 10.0.0.2\n"
        );
    }

    #[test]
    fn write_overwrites_in_full() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resolv.conf");
        std::fs::write(&path, "nameserver 1.1.1.1\noptions ndots:5\n").unwrap();

        ResolvFile::with_path(&path)
            .write(&ResolvConfig::new("example.com", "8.8.8.8"))
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "search example.com\nnameserver 8.8.8.8\n");
        assert!(!content.contains("1.1.1.1"));
        assert!(!content.contains("ndots"));
    }

    #[test]
    fn write_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resolv.conf");
        let file = ResolvFile::with_path(&path);
        let config = ResolvConfig::new("example.com", "8.8.8.8");

        file.write(&config).unwrap();
        let first = std::fs::read_to_string(&path).unwrap();
        file.write(&config).unwrap();
        let second = std::fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn write_to_missing_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("resolv.conf");

        let err = ResolvFile::with_path(&path)
            .write(&ResolvConfig::new("example.com", "8.8.8.8"))
            .unwrap_err();

        assert!(matches!(err, EntrypointError::WriteResolv { .. }));
    }
}
