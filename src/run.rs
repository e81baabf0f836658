//! Orchestration of a full bootstrap run.

use crate::config::BootstrapConfig;
use crate::probing::RUNTIME_CANDIDATES;
use crate::transport::{fetch, FetchOptions, FetchOutcome};
use crate::{
    install_dependencies, invoke, probe, select_mode, BootstrapError, InstallMode, RuntimeStatus,
};

/// Options for a bootstrap run, usually filled in from the command line.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Force command-line mode regardless of GUI capability.
    pub force_cli: bool,
}

/// Run the whole bootstrap: probe, fetch, dependencies, mode, handoff.
///
/// The sequence and its failure policy:
///
/// 1. Probe the environment. A missing runtime is fatal before anything
///    else runs; nothing is probed further and no download is attempted.
/// 2. Fetch the payload, unless a non-empty copy already exists in the
///    install root. Exhausting every download method is fatal.
/// 3. Install the dependency manifest if the payload shipped one.
/// 4. Select the mode. `force_cli` short-circuits to command-line;
///    otherwise a GUI-capable host goes graphical and anything else asks
///    `confirm_fallback`, whose refusal aborts the run before handoff.
/// 5. Hand off to the payload and propagate its exit status.
///
/// Progress is printed to stdout; diagnostics go through `tracing`.
pub async fn run<F>(
    config: &BootstrapConfig,
    options: &RunOptions,
    confirm_fallback: F,
) -> Result<(), BootstrapError>
where
    F: FnOnce() -> bool,
{
    println!("Checking environment...");
    let env = probe(config).await;

    let runtime = match &env.runtime {
        RuntimeStatus::Found(meta) => meta,
        RuntimeStatus::NotFound => {
            return Err(BootstrapError::RuntimeMissing {
                candidates: RUNTIME_CANDIDATES.join(", "),
            })
        }
    };
    println!(
        "  {} at {}",
        runtime.raw_version.as_deref().unwrap_or("Python (version unknown)"),
        runtime.path.display()
    );

    let payload = config.payload_path();
    let fetch_options = FetchOptions {
        timeout: config.download_timeout,
    };
    match fetch(&config.payload_url, &payload, &fetch_options).await? {
        FetchOutcome::AlreadyPresent => {
            println!("Using existing {}", payload.display());
        }
        FetchOutcome::Downloaded { method } => {
            println!("Fetched installer via {}", method.display_name());
        }
    }

    if install_dependencies(&runtime.path, config).await? {
        println!("Installed dependency manifest");
    }

    let mode = if options.force_cli {
        InstallMode::CommandLine
    } else {
        if !env.gui_capable {
            println!("The Tk graphical toolkit was not detected; the graphical installer is unavailable.");
        }
        select_mode(&env, confirm_fallback).ok_or(BootstrapError::Aborted)?
    };

    println!("Starting installer ({} mode)...", mode.display_name());
    let result = invoke(&runtime.path, &payload, mode, config).await?;

    if !result.success() {
        return Err(BootstrapError::PayloadFailed {
            exit_code: result.exit_code,
            log_path: result.log_path,
        });
    }

    Ok(())
}
