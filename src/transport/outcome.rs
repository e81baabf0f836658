//! Attempt records and error types for the transport selector.

use crate::TransportKind;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Failure of a single download mechanism.
///
/// A `TransportError` is recovered locally by falling through to the next
/// method; it only reaches the caller inside
/// [`FetchError::AllMethodsExhausted`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransportError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("server returned HTTP {status}")]
    HttpStatus {
        /// Status code from the response.
        status: u16,
    },

    /// The external tool could not be launched.
    #[error("failed to launch {tool}: {reason}")]
    Spawn {
        /// Tool that was being launched.
        tool: &'static str,
        /// Description of the launch failure.
        reason: String,
    },

    /// The external tool ran but exited non-zero.
    #[error("{tool} exited with code {exit_code:?}: {stderr}")]
    ToolFailed {
        /// Tool that failed.
        tool: &'static str,
        /// Exit code, if the tool was not killed by a signal.
        exit_code: Option<i32>,
        /// Trimmed standard error output.
        stderr: String,
    },

    /// The attempt did not finish within the configured ceiling.
    #[error("download timed out after {0:?}")]
    Timeout(Duration),

    /// Writing the downloaded bytes to disk failed.
    #[error("I/O error writing {path}: {reason}")]
    Io {
        /// Destination being written.
        path: PathBuf,
        /// Description of the I/O failure.
        reason: String,
    },
}

/// Outcome of one download attempt.
#[derive(Debug)]
pub enum AttemptOutcome {
    /// The method downloaded the payload.
    Success,

    /// The method's underlying tool is absent on this host.
    ///
    /// Not counted as a failure; the method was skipped, not tried.
    Unavailable,

    /// The method was tried and failed.
    Failed(TransportError),
}

impl fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "succeeded"),
            Self::Unavailable => write!(f, "not available on this system"),
            Self::Failed(e) => write!(f, "failed: {e}"),
        }
    }
}

/// Transient per-method record, retained only for diagnostic display.
#[derive(Debug)]
pub struct DownloadAttempt {
    /// The method that was considered.
    pub method: TransportKind,

    /// What happened when it was considered.
    pub outcome: AttemptOutcome,
}

impl fmt::Display for DownloadAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.method.display_name(), self.outcome)
    }
}

/// Terminal failure of the transport selector.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    /// Every registered method failed or was unavailable.
    #[error("every download method failed or was unavailable")]
    AllMethodsExhausted {
        /// Per-method outcomes, in the order they were considered.
        attempts: Vec<DownloadAttempt>,
    },
}

impl FetchError {
    /// Per-method outcomes for diagnostic display.
    pub fn attempts(&self) -> &[DownloadAttempt] {
        match self {
            Self::AllMethodsExhausted { attempts } => attempts,
        }
    }
}

/// Result of a successful [`fetch`](crate::fetch) call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The destination already held a non-empty payload; nothing was tried.
    AlreadyPresent,

    /// The payload was downloaded by the given method.
    Downloaded {
        /// Method that succeeded.
        method: TransportKind,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_outcome_display() {
        assert_eq!(AttemptOutcome::Success.to_string(), "succeeded");
        assert_eq!(
            AttemptOutcome::Unavailable.to_string(),
            "not available on this system"
        );
        let failed = AttemptOutcome::Failed(TransportError::HttpStatus { status: 503 });
        assert_eq!(failed.to_string(), "failed: server returned HTTP 503");
    }

    #[test]
    fn test_download_attempt_display_names_the_method() {
        let attempt = DownloadAttempt {
            method: TransportKind::Curl,
            outcome: AttemptOutcome::Unavailable,
        };
        assert_eq!(attempt.to_string(), "curl: not available on this system");
    }

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::ToolFailed {
            tool: "curl",
            exit_code: Some(22),
            stderr: "The requested URL returned error: 404".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("curl"));
        assert!(msg.contains("22"));

        let err = TransportError::Timeout(Duration::from_secs(300));
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn test_fetch_error_exposes_attempts() {
        let err = FetchError::AllMethodsExhausted {
            attempts: vec![
                DownloadAttempt {
                    method: TransportKind::HttpClient,
                    outcome: AttemptOutcome::Failed(TransportError::Request("dns".into())),
                },
                DownloadAttempt {
                    method: TransportKind::Curl,
                    outcome: AttemptOutcome::Unavailable,
                },
            ],
        };
        assert_eq!(err.attempts().len(), 2);
        assert!(err.to_string().contains("every download method"));
    }
}
