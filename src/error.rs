//! Error types.

use thiserror::Error;

/// Result alias for entrypoint operations.
pub type Result<T> = std::result::Result<T, EntrypointError>;

/// Errors returned by entrypoint operations.
///
/// All variants are fatal: the shim either completes its setup and execs the
/// workload, or it exits non-zero. A missing `DNS_SERVER`/`SEARCH_DOMAIN`
/// pair is deliberately not an error (see [`crate::config::ResolvConfig::from_env`]).
#[derive(Debug, Error)]
pub enum EntrypointError {
    /// The resolver configuration could not be written (typically a
    /// read-only filesystem or missing permissions on `/etc`).
    #[error("failed to write resolver configuration to {path}: {source}")]
    WriteResolv {
        /// The file that could not be written.
        path: String,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// No child command was supplied on the command line.
    #[error("no command specified: pass the program to execute and its arguments")]
    NoCommand,

    /// The child command could not be executed.
    #[error("failed to execute {command}: {source}")]
    Exec {
        /// The program that could not be executed.
        command: String,
        /// The underlying I/O failure.
        source: std::io::Error,
    },
}

impl EntrypointError {
    /// Returns `true` if the underlying I/O error is `PermissionDenied`.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(
            self,
            Self::WriteResolv { source, .. } | Self::Exec { source, .. }
                if source.kind() == std::io::ErrorKind::PermissionDenied
        )
    }
}
