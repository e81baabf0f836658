//! Payload download with ordered transport fallback.
//!
//! Different hosts expose different download tooling: some only the
//! in-process HTTP client compiled into this binary, some a background
//! transfer service, some an external command-line downloader, some only
//! the runtime interpreter's own networking library. [`fetch`] tries each
//! registered method in a fixed priority order and falls through on any
//! failure, so a single broken mechanism never aborts the bootstrap.
//!
//! # Example
//!
//! ```rust,no_run
//! use enm_bootstrap::{fetch, FetchOptions, FetchOutcome};
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let result = fetch(
//!         "https://example.com/installer.py",
//!         Path::new("installer.py"),
//!         &FetchOptions::default(),
//!     )
//!     .await;
//!
//!     match result {
//!         Ok(FetchOutcome::Downloaded { method }) => {
//!             println!("fetched via {}", method.display_name());
//!         }
//!         Ok(FetchOutcome::AlreadyPresent) => println!("nothing to do"),
//!         Err(e) => eprintln!("{e}"),
//!     }
//! }
//! ```

mod kind;
mod methods;
mod outcome;
mod selector;

pub use kind::TransportKind;
pub use outcome::{AttemptOutcome, DownloadAttempt, FetchError, FetchOutcome, TransportError};
pub use selector::{fetch, payload_is_present, FetchOptions};
