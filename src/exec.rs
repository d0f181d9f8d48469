//! Process handoff.
//!
//! The shim's final act is to replace itself with the container's real
//! workload. On Unix this is a true `exec(2)`: same pid, inherited stdio, no
//! shim left resident. Elsewhere the closest equivalent is spawn-and-wait
//! with the child's exit code propagated as our own.

use crate::error::{EntrypointError, Result};
use std::convert::Infallible;
use std::ffi::OsString;
use std::process::Command;

/// Replaces the current process with the command named by `argv`.
///
/// The child receives the argument vector unchanged and inherits stdin,
/// stdout and stderr. Returns only on failure.
///
/// # Errors
///
/// Returns [`EntrypointError::NoCommand`] when `argv` is empty, and
/// [`EntrypointError::Exec`] when the program cannot be executed.
pub fn hand_off(argv: Vec<OsString>) -> Result<Infallible> {
    let mut argv = argv.into_iter();
    let program = argv.next().ok_or(EntrypointError::NoCommand)?;

    let mut command = Command::new(&program);
    command.args(argv);

    Err(EntrypointError::Exec {
        command: program.to_string_lossy().into_owned(),
        source: run(command),
    })
}

// Success never reaches the `Err` above: on Unix the process image is gone,
// on other platforms `run` exits with the child's code.

#[cfg(unix)]
fn run(mut command: Command) -> std::io::Error {
    use std::os::unix::process::CommandExt;
    command.exec()
}

#[cfg(not(unix))]
fn run(mut command: Command) -> std::io::Error {
    match command.status() {
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(e) => e,
    }
}
