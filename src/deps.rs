//! Dependency manifest installation.
//!
//! The payload may ship a `requirements.txt` next to itself. When one is
//! present in the install root, the bootstrap installs it through the
//! interpreter's package manager before handing off; otherwise dependency
//! resolution is the payload's own job and this step is a no-op.

use crate::config::BootstrapConfig;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;
use tokio::time::timeout;

/// Errors from manifest-based dependency installation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DepsError {
    /// The interpreter could not be launched for `pip`.
    #[error("failed to launch {}: {reason}", .runtime.display())]
    Spawn {
        /// Interpreter that was being launched.
        runtime: std::path::PathBuf,
        /// Description of the launch failure.
        reason: String,
    },

    /// `pip install` ran but exited non-zero.
    #[error("dependency installation exited with code {exit_code:?}")]
    InstallFailed {
        /// Exit code, if the process was not killed by a signal.
        exit_code: Option<i32>,
        /// Trimmed standard error output.
        stderr: String,
    },

    /// Installation did not finish within the configured ceiling.
    #[error("dependency installation timed out after {0:?}")]
    Timeout(Duration),
}

/// Install the dependency manifest, when one exists in the install root.
///
/// Runs `<runtime> -m pip install -r requirements.txt` bounded by the
/// download timeout. Returns `Ok(true)` when a manifest was installed,
/// `Ok(false)` when there was no manifest to install.
pub async fn install_dependencies(
    runtime: &Path,
    config: &BootstrapConfig,
) -> Result<bool, DepsError> {
    let manifest = config.manifest_path();
    if !manifest.is_file() {
        tracing::debug!(path = %manifest.display(), "no dependency manifest, skipping");
        return Ok(false);
    }

    tracing::info!(path = %manifest.display(), "installing dependency manifest");

    let mut command = Command::new(runtime);
    command
        .arg("-m")
        .arg("pip")
        .arg("install")
        .arg("-r")
        .arg(&manifest)
        .current_dir(&config.install_root)
        .kill_on_drop(true);

    let output = timeout(config.download_timeout, command.output())
        .await
        .map_err(|_| DepsError::Timeout(config.download_timeout))?
        .map_err(|e| DepsError::Spawn {
            runtime: runtime.to_path_buf(),
            reason: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(DepsError::InstallFailed {
            exit_code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(true)
}
