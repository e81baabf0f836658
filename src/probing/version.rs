//! Async runtime version query with timeout.

use crate::ProbeError;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Query the version of the runtime interpreter.
///
/// Runs the interpreter with `--version` and captures its output. The
/// execution is wrapped in the configured timeout so a stuck interpreter
/// cannot hang the bootstrap.
///
/// Returns the version output (stdout preferred, stderr fallback), or a
/// [`ProbeError`] on failure:
/// - `Timeout` if the command exceeds the ceiling
/// - `PermissionDenied` if the executable cannot be run due to permissions
/// - `IoError` for other I/O failures or non-zero exit codes
/// - `OutputUnreadable` if the output is not valid UTF-8
pub(crate) async fn check_version(path: &Path, ceiling: Duration) -> Result<String, ProbeError> {
    let mut command = Command::new(path);
    command.arg("--version").kill_on_drop(true);

    let output = timeout(ceiling, command.output())
        .await
        .map_err(|_| ProbeError::Timeout)?
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                ProbeError::PermissionDenied
            } else {
                ProbeError::IoError
            }
        })?;

    if !output.status.success() {
        return Err(ProbeError::IoError);
    }

    // Older interpreters print the version banner to stderr
    let out = if !output.stdout.is_empty() {
        output.stdout
    } else {
        output.stderr
    };

    String::from_utf8(out).map_err(|_| ProbeError::OutputUnreadable)
}
