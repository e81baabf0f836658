//! Payload handoff.

use crate::config::BootstrapConfig;
use crate::InstallMode;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::process::Command;

/// Result of running the installer payload.
#[derive(Debug, Clone)]
pub struct HandoffResult {
    /// The payload's exit code, verbatim.
    pub exit_code: i32,

    /// The payload's log file, when the payload failed and left one.
    pub log_path: Option<PathBuf>,
}

impl HandoffResult {
    /// Whether the payload reported success.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// The payload could not be run at all.
///
/// Distinct from a payload that ran and failed; that case is a
/// [`HandoffResult`] with a non-zero exit code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HandoffError {
    /// Spawning the payload process failed.
    #[error("failed to launch {}: {reason}", .payload.display())]
    Spawn {
        /// Payload that was being launched.
        payload: PathBuf,
        /// Description of the launch failure.
        reason: String,
    },
}

/// Run the payload under the probed interpreter and wait for it to finish.
///
/// The payload runs in the install root with stdio inherited, so the user
/// interacts with the installer directly. A `--cli` flag is appended in
/// [`InstallMode::CommandLine`]. The exit status is captured verbatim; the
/// payload's output is never interpreted. When the exit status is non-zero
/// and the fixed-name log file exists in the install root, the result
/// references it.
pub async fn invoke(
    runtime: &Path,
    payload: &Path,
    mode: InstallMode,
    config: &BootstrapConfig,
) -> Result<HandoffResult, HandoffError> {
    tracing::info!(
        payload = %payload.display(),
        mode = mode.display_name(),
        "handing off to installer payload"
    );

    let status = Command::new(runtime)
        .arg(payload)
        .args(mode.payload_args())
        .current_dir(&config.install_root)
        .kill_on_drop(true)
        .status()
        .await
        .map_err(|e| HandoffError::Spawn {
            payload: payload.to_path_buf(),
            reason: e.to_string(),
        })?;

    // A signal-terminated payload has no code; treat it as a plain failure
    let exit_code = status.code().unwrap_or(1);
    tracing::info!(exit_code, "installer payload finished");

    let log_path = if exit_code != 0 {
        let path = config.log_path();
        path.exists().then_some(path)
    } else {
        None
    };

    Ok(HandoffResult { exit_code, log_path })
}
