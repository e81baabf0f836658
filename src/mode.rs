//! Installation mode selection.

use crate::EnvironmentProbe;
use serde::{Deserialize, Serialize};

/// How the installer payload is run.
///
/// Decided once per run; there is no transition back to undecided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstallMode {
    /// Full graphical installer.
    Graphical,

    /// Text-only installer.
    CommandLine,
}

impl InstallMode {
    /// Extra arguments passed to the payload for this mode.
    pub fn payload_args(&self) -> &'static [&'static str] {
        match self {
            Self::Graphical => &[],
            Self::CommandLine => &["--cli"],
        }
    }

    /// Human-readable name for progress messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Graphical => "graphical",
            Self::CommandLine => "command-line",
        }
    }
}

/// Decide the installation mode from the environment probe.
///
/// A GUI-capable host always gets [`InstallMode::Graphical`]; the
/// confirmation callback is not invoked. Without GUI capability the
/// callback decides whether to degrade to [`InstallMode::CommandLine`];
/// declining returns `None`, which the caller must treat as an abort (no
/// mode is ever selected for the run, and no handoff may happen).
///
/// The callback abstracts "prompt and wait for a keypress" so this
/// decision is testable without a terminal.
///
/// # Example
///
/// ```rust
/// use enm_bootstrap::{select_mode, EnvironmentProbe, InstallMode, RuntimeStatus};
///
/// let env = EnvironmentProbe {
///     runtime: RuntimeStatus::NotFound,
///     gui_capable: false,
/// };
/// assert_eq!(select_mode(&env, || true), Some(InstallMode::CommandLine));
/// assert_eq!(select_mode(&env, || false), None);
/// ```
pub fn select_mode(
    probe: &EnvironmentProbe,
    confirm_fallback: impl FnOnce() -> bool,
) -> Option<InstallMode> {
    if probe.gui_capable {
        return Some(InstallMode::Graphical);
    }

    if confirm_fallback() {
        Some(InstallMode::CommandLine)
    } else {
        None
    }
}
