//! # resolv-entrypoint
//!
//! Container entrypoint shim: write `/etc/resolv.conf` from the environment,
//! then exec the container's real workload.
//!
//! Deployments that inject per-environment DNS settings do so through two
//! environment variables. This shim reads them once at startup, overwrites
//! the resolver configuration when both are present, and replaces itself
//! with the command given on its command line — forwarding every argument
//! unchanged and inheriting stdin, stdout and stderr.
//!
//! ## Behavior
//!
//! | `DNS_SERVER` | `SEARCH_DOMAIN` | effect |
//! |---|---|---|
//! | non-empty | non-empty | resolver config is overwritten in full |
//! | anything else | | warning on stderr, file left untouched |
//!
//! The written file is exactly two lines:
//!
//! ```text
//! search <SEARCH_DOMAIN>
//! nameserver <DNS_SERVER>
//! ```
//!
//! ## Usage
//!
//! ```dockerfile
//! ENTRYPOINT ["/usr/local/bin/resolv-entrypoint"]
//! CMD ["myservice", "--listen", "0.0.0.0:8080"]
//! ```
//!
//! ```rust,ignore
//! use resolv_entrypoint::{ResolvConfig, ResolvFile, exec};
//!
//! if let Some(config) = ResolvConfig::from_env() {
//!     ResolvFile::from_env().write(&config)?;
//! }
//! exec::hand_off(std::env::args_os().skip(1).collect())?;
//! ```
//!
//! ## Failure model
//!
//! Missing variables are a warning, not an error: the file is left untouched
//! and the workload still starts, falling back to whatever resolver
//! configuration the image already carries. A failed write is fatal —
//! starting the workload anyway would turn a visible startup error into
//! silent DNS breakage downstream. An empty command line is fatal too: there
//! is nothing to hand off to.
//!
//! ## Permissions
//!
//! `/etc/resolv.conf` must be writable by the entrypoint (the default when
//! the container runs as root). Set `RESOLV_CONF_PATH` to redirect the write
//! target, e.g. for unprivileged integration tests.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod exec;
pub mod resolv_file;

pub use config::{DNS_SERVER_VAR, RESOLV_CONF_PATH_VAR, ResolvConfig, SEARCH_DOMAIN_VAR};
pub use error::{EntrypointError, Result};
pub use resolv_file::ResolvFile;
