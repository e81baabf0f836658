//! # enm-bootstrap
//!
//! Bootstrap installer for the ENM Clicker desktop app.
//!
//! The bootstrapper prepares a machine to run the full installer: it checks
//! that a Python runtime (and optionally the Tk toolkit) is present, fetches
//! the installer payload over HTTPS using whichever download mechanism the
//! host offers, and hands execution off to the payload in graphical or
//! command-line mode.
//!
//! ## Structure
//!
//! - [`probe`] detects the runtime interpreter and GUI capability
//! - [`fetch`] tries an ordered list of download methods until one succeeds
//! - [`select_mode`] decides between graphical and command-line installation
//! - [`invoke`] runs the payload and reports its exit status
//! - [`run`] sequences the whole flow
//!
//! ## Example
//!
//! ```rust,no_run
//! use enm_bootstrap::{probe, select_mode, BootstrapConfig, InstallMode};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let config = BootstrapConfig::default();
//!     let env = probe(&config).await;
//!     if !env.runtime_found() {
//!         eprintln!("Python 3 is required");
//!         return;
//!     }
//!     let mode = select_mode(&env, || false).unwrap_or(InstallMode::CommandLine);
//!     println!("installing in {} mode", mode.display_name());
//! }
//! ```

mod config;
mod deps;
mod environment;
mod errors;
mod handoff;
mod mode;
mod probe;
mod probing;
mod run;
mod transport;

pub use config::BootstrapConfig;
pub use deps::{install_dependencies, DepsError};
pub use environment::{EnvironmentProbe, ProbeError, RuntimeMetadata, RuntimeStatus};
pub use errors::BootstrapError;
pub use handoff::{invoke, HandoffError, HandoffResult};
pub use mode::{select_mode, InstallMode};
pub use probe::probe;
pub use run::{run, RunOptions};
pub use transport::{
    fetch, AttemptOutcome, DownloadAttempt, FetchError, FetchOptions, FetchOutcome, TransportError,
    TransportKind,
};
