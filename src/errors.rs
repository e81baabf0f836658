//! Top-level error taxonomy for a bootstrap run.
//!
//! Only run-terminating conditions appear here. Everything recoverable
//! (a single failed download method, a missing GUI toolkit, an
//! unparseable version banner) is absorbed where it happens and turned
//! into the next decision instead.

use crate::config::BootstrapConfig;
use crate::probing::RUNTIME_CANDIDATES;
use crate::{DepsError, FetchError, HandoffError};
use std::path::PathBuf;
use thiserror::Error;

/// Run-terminating failures, each with actionable remediation text.
///
/// # Example
///
/// ```rust
/// use enm_bootstrap::{BootstrapConfig, BootstrapError};
///
/// fn report(error: BootstrapError, config: &BootstrapConfig) {
///     eprintln!("error: {error}");
///     eprintln!("{}", error.remediation(config));
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BootstrapError {
    /// The required interpreter is not installed on this machine.
    #[error("Python runtime not found (tried: {candidates})")]
    RuntimeMissing {
        /// Interpreter names that were searched for.
        candidates: String,
    },

    /// Every download method failed or was unavailable.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Manifest-based dependency installation failed.
    #[error(transparent)]
    Deps(#[from] DepsError),

    /// The user declined the command-line fallback; no mode was selected.
    #[error("installation cancelled")]
    Aborted,

    /// The payload could not be launched.
    #[error(transparent)]
    Handoff(#[from] HandoffError),

    /// The payload ran and exited non-zero.
    #[error("the installer exited with code {exit_code}")]
    PayloadFailed {
        /// The payload's exit code.
        exit_code: i32,
        /// The payload's log file, when it left one.
        log_path: Option<PathBuf>,
    },
}

impl BootstrapError {
    /// Actionable suggestion for resolving this failure.
    pub fn remediation(&self, config: &BootstrapConfig) -> String {
        match self {
            Self::RuntimeMissing { .. } => {
                "Install Python 3 from https://www.python.org/downloads/ (or your OS package \
                 manager) and re-run this installer."
                    .to_string()
            }
            Self::Fetch(_) => format!(
                "Download {} manually, save it as {}, then re-run this installer.",
                config.payload_url,
                config.payload_path().display()
            ),
            Self::Deps(_) => format!(
                "Check your network connection and that pip works ({} -m pip --version), \
                 then re-run this installer.",
                RUNTIME_CANDIDATES[0]
            ),
            Self::Aborted => {
                "Install the Tk toolkit (python3-tk on Debian/Ubuntu) for the graphical \
                 installer, or re-run and confirm the command-line fallback."
                    .to_string()
            }
            Self::Handoff(_) => format!(
                "Check that {} exists and is readable, or delete it and re-run this \
                 installer to fetch a fresh copy.",
                config.payload_path().display()
            ),
            Self::PayloadFailed { log_path, .. } => match log_path {
                Some(log) => format!("See {} for details.", log.display()),
                None => "The installer did not leave a log file; re-run it directly for \
                         more output."
                    .to_string(),
            },
        }
    }

    /// The process exit code this failure maps to.
    ///
    /// The payload's own non-zero code is propagated verbatim; every
    /// bootstrapper-internal failure exits 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::PayloadFailed { exit_code, .. } => *exit_code,
            _ => 1,
        }
    }
}
