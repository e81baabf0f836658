//! Environment probe results.

use semver::Version;
use std::path::{Path, PathBuf};

/// Metadata for a detected runtime interpreter.
#[derive(Debug, Clone)]
pub struct RuntimeMetadata {
    /// Path to the interpreter executable.
    pub path: PathBuf,

    /// Parsed interpreter version, when the version query produced one.
    ///
    /// Presence of the interpreter, never a minimum version, gates the run;
    /// this field exists for display and logging only.
    pub version: Option<Version>,

    /// Raw trimmed output of the version query (e.g. `Python 3.11.4`).
    pub raw_version: Option<String>,
}

/// Result of probing for the runtime interpreter.
///
/// # Example
///
/// ```rust
/// use enm_bootstrap::RuntimeStatus;
///
/// let status = RuntimeStatus::NotFound;
/// assert!(!status.is_found());
/// assert!(status.path().is_none());
/// ```
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum RuntimeStatus {
    /// Interpreter located on this machine.
    Found(RuntimeMetadata),

    /// Interpreter definitively not found.
    NotFound,
}

impl RuntimeStatus {
    /// Check whether an interpreter was located.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Path to the interpreter, if one was located.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(meta) => Some(&meta.path),
            Self::NotFound => None,
        }
    }

    /// Parsed interpreter version, if the version query produced one.
    pub fn version(&self) -> Option<&Version> {
        match self {
            Self::Found(meta) => meta.version.as_ref(),
            Self::NotFound => None,
        }
    }
}

/// Snapshot of the host capabilities, created once at startup and read-only
/// thereafter.
///
/// Produced by [`probe`](crate::probe); consumed by
/// [`select_mode`](crate::select_mode) and the orchestrator.
#[derive(Debug, Clone)]
pub struct EnvironmentProbe {
    /// Whether and where the runtime interpreter was found.
    pub runtime: RuntimeStatus,

    /// Whether the Tk toolkit module loaded in a throwaway subprocess.
    ///
    /// Always `false` when the runtime is absent, since the check needs the
    /// interpreter to run.
    pub gui_capable: bool,
}

impl EnvironmentProbe {
    /// Check whether the runtime interpreter was located.
    pub fn runtime_found(&self) -> bool {
        self.runtime.is_found()
    }

    /// Path to the runtime interpreter, if one was located.
    pub fn runtime_path(&self) -> Option<&Path> {
        self.runtime.path()
    }
}

/// Typed error variants for individual capability checks.
///
/// These never abort the probe; a failed check is folded into the
/// [`EnvironmentProbe`] as an absent capability.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProbeError {
    /// The check subprocess did not finish within the configured timeout.
    Timeout,

    /// Permission denied executing the interpreter.
    PermissionDenied,

    /// The subprocess ran but its output was not usable UTF-8.
    OutputUnreadable,

    /// I/O error spawning or waiting on the check subprocess.
    IoError,
}

impl ProbeError {
    /// Human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Timeout => "probe timed out",
            Self::PermissionDenied => "permission denied",
            Self::OutputUnreadable => "probe output was not valid UTF-8",
            Self::IoError => "I/O error during probe",
        }
    }
}
