//! Environment probing.

use crate::config::BootstrapConfig;
use crate::probing::{check_gui_module, check_version, find_runtime, parse_version};
use crate::{EnvironmentProbe, RuntimeMetadata, RuntimeStatus};

/// Probe the host for the runtime interpreter and GUI capability.
///
/// This function never fails; every missing capability is represented in
/// the returned [`EnvironmentProbe`] rather than raised as an error.
///
/// # Probe Process
///
/// 1. Search for the interpreter in PATH and fallback locations
/// 2. If absent, return immediately with `gui_capable: false` (the GUI
///    check needs the interpreter, so it is never attempted)
/// 3. Otherwise run the version query and the toolkit import check
///    concurrently, each under the configured probe timeout
///
/// A failed or unparseable version query is non-fatal: the runtime still
/// counts as found by presence, with empty version fields.
///
/// # Example
///
/// ```rust,no_run
/// use enm_bootstrap::{probe, BootstrapConfig};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let env = probe(&BootstrapConfig::default()).await;
///     if env.runtime_found() {
///         println!("runtime at {:?}", env.runtime_path());
///     }
/// }
/// ```
pub async fn probe(config: &BootstrapConfig) -> EnvironmentProbe {
    let path = match find_runtime() {
        Some(p) => p,
        None => {
            return EnvironmentProbe {
                runtime: RuntimeStatus::NotFound,
                gui_capable: false,
            }
        }
    };

    tracing::debug!(path = %path.display(), "runtime interpreter located");

    let (version_output, gui_capable) = futures::join!(
        check_version(&path, config.probe_timeout),
        check_gui_module(&path, config.probe_timeout),
    );

    let raw_version = match version_output {
        Ok(out) => Some(out.trim().to_string()),
        Err(e) => {
            tracing::debug!(error = e.description(), "runtime version query failed");
            None
        }
    };
    let version = raw_version.as_deref().and_then(parse_version);

    EnvironmentProbe {
        runtime: RuntimeStatus::Found(RuntimeMetadata {
            path,
            version,
            raw_version,
        }),
        gui_capable,
    }
}
