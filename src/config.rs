//! Bootstrap configuration.
//!
//! All components take the install root and timeouts from [`BootstrapConfig`]
//! instead of reading the ambient working directory, so the whole flow can be
//! pointed at a scratch directory in tests.

use std::path::PathBuf;
use std::time::Duration;

/// Release URL the installer payload is fetched from.
pub const PAYLOAD_URL: &str =
    "https://github.com/EmergencyNeuMuensterOfficial/Autoclicker/releases/latest/download/installer.py";

/// Fixed filename the payload is saved under in the install root.
pub const PAYLOAD_FILENAME: &str = "installer.py";

/// Fixed filename the payload writes its log to on failure.
pub const PAYLOAD_LOG_FILENAME: &str = "installer.log";

/// Dependency manifest the payload may ship alongside itself.
pub const MANIFEST_FILENAME: &str = "requirements.txt";

/// Configuration for a single bootstrap run.
///
/// # Example
///
/// ```rust
/// use enm_bootstrap::BootstrapConfig;
///
/// let config = BootstrapConfig::with_install_root("/tmp/enm");
/// assert!(config.payload_path().ends_with("installer.py"));
/// ```
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// Directory the payload is saved to and executed from.
    pub install_root: PathBuf,

    /// HTTPS URL of the installer payload.
    pub payload_url: String,

    /// Filename the payload is saved under.
    pub payload_filename: String,

    /// Filename of the payload's failure log.
    pub log_filename: String,

    /// Filename of the optional dependency manifest.
    pub manifest_filename: String,

    /// Ceiling for each capability probe subprocess.
    pub probe_timeout: Duration,

    /// Ceiling for each download attempt and for dependency installation.
    pub download_timeout: Duration,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            install_root: PathBuf::from("."),
            payload_url: PAYLOAD_URL.to_string(),
            payload_filename: PAYLOAD_FILENAME.to_string(),
            log_filename: PAYLOAD_LOG_FILENAME.to_string(),
            manifest_filename: MANIFEST_FILENAME.to_string(),
            probe_timeout: Duration::from_secs(5),
            download_timeout: Duration::from_secs(300),
        }
    }
}

impl BootstrapConfig {
    /// Default configuration rooted at the given directory.
    pub fn with_install_root(root: impl Into<PathBuf>) -> Self {
        Self {
            install_root: root.into(),
            ..Self::default()
        }
    }

    /// Full path the payload is saved to.
    pub fn payload_path(&self) -> PathBuf {
        self.install_root.join(&self.payload_filename)
    }

    /// Full path of the payload's failure log.
    pub fn log_path(&self) -> PathBuf {
        self.install_root.join(&self.log_filename)
    }

    /// Full path of the dependency manifest, if the payload shipped one.
    pub fn manifest_path(&self) -> PathBuf {
        self.install_root.join(&self.manifest_filename)
    }
}
