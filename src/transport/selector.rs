//! The fallback download loop.

use crate::transport::methods::{default_methods, TransportMethod};
use crate::transport::outcome::{AttemptOutcome, DownloadAttempt, FetchError, FetchOutcome};
use std::path::Path;
use std::time::Duration;

/// Options controlling a [`fetch`] call.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Ceiling for each individual download attempt.
    ///
    /// Default: 5 minutes.
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(300),
        }
    }
}

/// Check whether a usable payload already exists at `path`.
///
/// "Usable" means a regular, non-empty file; an empty file is treated as a
/// leftover from an interrupted run and fetched again.
pub fn payload_is_present(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|m| m.is_file() && m.len() > 0)
        .unwrap_or(false)
}

/// Download `url` to `dest`, trying each registered method in order.
///
/// The selection policy:
///
/// 1. If `dest` already holds a non-empty payload, return
///    [`FetchOutcome::AlreadyPresent`] without touching any method.
/// 2. A method whose availability check fails is skipped; that is not a
///    failed attempt.
/// 3. The first successful method wins; later methods are never invoked.
/// 4. A failed attempt removes any partial file at `dest`, then the next
///    method is tried.
///
/// When every method fails or is unavailable,
/// [`FetchError::AllMethodsExhausted`] carries the per-method outcomes for
/// diagnostic display.
pub async fn fetch(
    url: &str,
    dest: &Path,
    options: &FetchOptions,
) -> Result<FetchOutcome, FetchError> {
    fetch_with_methods(&default_methods(), url, dest, options).await
}

pub(crate) async fn fetch_with_methods(
    methods: &[Box<dyn TransportMethod>],
    url: &str,
    dest: &Path,
    options: &FetchOptions,
) -> Result<FetchOutcome, FetchError> {
    if payload_is_present(dest) {
        tracing::info!(path = %dest.display(), "payload already present, skipping download");
        return Ok(FetchOutcome::AlreadyPresent);
    }

    let mut attempts = Vec::with_capacity(methods.len());

    for method in methods {
        let kind = method.kind();

        if !method.is_available() {
            tracing::debug!(method = kind.display_name(), "transport unavailable, skipping");
            attempts.push(DownloadAttempt {
                method: kind,
                outcome: AttemptOutcome::Unavailable,
            });
            continue;
        }

        tracing::info!(method = kind.display_name(), url, "attempting download");
        match method.execute(url, dest, options.timeout).await {
            Ok(()) => {
                tracing::info!(method = kind.display_name(), "download succeeded");
                return Ok(FetchOutcome::Downloaded { method: kind });
            }
            Err(e) => {
                tracing::warn!(method = kind.display_name(), error = %e, "download attempt failed");
                discard_partial(dest).await;
                attempts.push(DownloadAttempt {
                    method: kind,
                    outcome: AttemptOutcome::Failed(e),
                });
            }
        }
    }

    Err(FetchError::AllMethodsExhausted { attempts })
}

/// Remove whatever a failed attempt left at `dest`.
async fn discard_partial(dest: &Path) {
    if tokio::fs::remove_file(dest).await.is_ok() {
        tracing::debug!(path = %dest.display(), "removed partial download");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::outcome::TransportError;
    use crate::TransportKind;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    enum StubBehavior {
        Succeed,
        Fail,
        FailLeavingPartial,
    }

    struct StubTransport {
        kind: TransportKind,
        available: bool,
        behavior: StubBehavior,
        calls: Arc<AtomicUsize>,
    }

    impl StubTransport {
        fn new(kind: TransportKind, available: bool, behavior: StubBehavior) -> (Box<Self>, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let stub = Box::new(Self {
                kind,
                available,
                behavior,
                calls: calls.clone(),
            });
            (stub, calls)
        }
    }

    #[async_trait]
    impl TransportMethod for StubTransport {
        fn kind(&self) -> TransportKind {
            self.kind
        }

        fn is_available(&self) -> bool {
            self.available
        }

        async fn execute(
            &self,
            _url: &str,
            dest: &Path,
            _ceiling: Duration,
        ) -> Result<(), TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.behavior {
                StubBehavior::Succeed => {
                    std::fs::write(dest, b"payload").unwrap();
                    Ok(())
                }
                StubBehavior::Fail => Err(TransportError::Request("stub failure".into())),
                StubBehavior::FailLeavingPartial => {
                    std::fs::write(dest, b"trunc").unwrap();
                    Err(TransportError::Request("stub failure".into()))
                }
            }
        }
    }

    fn temp_dest() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("installer.py");
        (dir, dest)
    }

    #[tokio::test]
    async fn test_first_success_stops_iteration() {
        let (_dir, dest) = temp_dest();
        let (a, a_calls) = StubTransport::new(TransportKind::HttpClient, true, StubBehavior::Fail);
        let (b, b_calls) = StubTransport::new(TransportKind::Curl, true, StubBehavior::Succeed);
        let (c, c_calls) =
            StubTransport::new(TransportKind::RuntimeFetch, true, StubBehavior::Succeed);
        let methods: Vec<Box<dyn TransportMethod>> = vec![a, b, c];

        let outcome = fetch_with_methods(&methods, "https://x", &dest, &FetchOptions::default())
            .await
            .unwrap();

        assert_eq!(
            outcome,
            FetchOutcome::Downloaded {
                method: TransportKind::Curl
            }
        );
        assert_eq!(a_calls.load(Ordering::SeqCst), 1);
        assert_eq!(b_calls.load(Ordering::SeqCst), 1);
        // No wasted attempts after the first success
        assert_eq!(c_calls.load(Ordering::SeqCst), 0);
        assert!(payload_is_present(&dest));
    }

    #[tokio::test]
    async fn test_unavailable_methods_are_skipped_not_failed() {
        let (_dir, dest) = temp_dest();
        let (a, a_calls) = StubTransport::new(TransportKind::HttpClient, false, StubBehavior::Fail);
        let (b, _) = StubTransport::new(TransportKind::Curl, false, StubBehavior::Fail);
        let methods: Vec<Box<dyn TransportMethod>> = vec![a, b];

        let err = fetch_with_methods(&methods, "https://x", &dest, &FetchOptions::default())
            .await
            .unwrap_err();

        // execute never ran for an unavailable method
        assert_eq!(a_calls.load(Ordering::SeqCst), 0);
        let FetchError::AllMethodsExhausted { attempts } = err;
        assert_eq!(attempts.len(), 2);
        assert!(attempts
            .iter()
            .all(|a| matches!(a.outcome, AttemptOutcome::Unavailable)));
    }

    #[tokio::test]
    async fn test_exhaustion_records_every_failure() {
        let (_dir, dest) = temp_dest();
        let (a, _) = StubTransport::new(TransportKind::HttpClient, true, StubBehavior::Fail);
        let (b, _) = StubTransport::new(TransportKind::SystemTransfer, false, StubBehavior::Fail);
        let (c, _) = StubTransport::new(TransportKind::Curl, true, StubBehavior::Fail);
        let methods: Vec<Box<dyn TransportMethod>> = vec![a, b, c];

        let err = fetch_with_methods(&methods, "https://x", &dest, &FetchOptions::default())
            .await
            .unwrap_err();

        let FetchError::AllMethodsExhausted { attempts } = err;
        assert_eq!(attempts.len(), 3);
        assert!(matches!(attempts[0].outcome, AttemptOutcome::Failed(_)));
        assert!(matches!(attempts[1].outcome, AttemptOutcome::Unavailable));
        assert!(matches!(attempts[2].outcome, AttemptOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn test_existing_payload_skips_every_method() {
        let (_dir, dest) = temp_dest();
        std::fs::write(&dest, b"already here").unwrap();

        let (a, a_calls) =
            StubTransport::new(TransportKind::HttpClient, true, StubBehavior::Succeed);
        let methods: Vec<Box<dyn TransportMethod>> = vec![a];

        let outcome = fetch_with_methods(&methods, "https://x", &dest, &FetchOptions::default())
            .await
            .unwrap();

        assert_eq!(outcome, FetchOutcome::AlreadyPresent);
        assert_eq!(a_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_file_does_not_count_as_present() {
        let (_dir, dest) = temp_dest();
        std::fs::write(&dest, b"").unwrap();

        let (a, a_calls) =
            StubTransport::new(TransportKind::HttpClient, true, StubBehavior::Succeed);
        let methods: Vec<Box<dyn TransportMethod>> = vec![a];

        let outcome = fetch_with_methods(&methods, "https://x", &dest, &FetchOptions::default())
            .await
            .unwrap();

        assert_eq!(
            outcome,
            FetchOutcome::Downloaded {
                method: TransportKind::HttpClient
            }
        );
        assert_eq!(a_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_attempt_discards_partial_file() {
        let (_dir, dest) = temp_dest();
        let (a, _) = StubTransport::new(
            TransportKind::HttpClient,
            true,
            StubBehavior::FailLeavingPartial,
        );
        let methods: Vec<Box<dyn TransportMethod>> = vec![a];

        let result =
            fetch_with_methods(&methods, "https://x", &dest, &FetchOptions::default()).await;

        assert!(result.is_err());
        assert!(!dest.exists());
    }

    #[test]
    fn test_payload_is_present_semantics() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing");
        assert!(!payload_is_present(&missing));

        let empty = dir.path().join("empty");
        std::fs::write(&empty, b"").unwrap();
        assert!(!payload_is_present(&empty));

        let full = dir.path().join("full");
        std::fs::write(&full, b"#!/usr/bin/env python3\n").unwrap();
        assert!(payload_is_present(&full));

        // A directory is never a payload
        assert!(!payload_is_present(dir.path()));
    }
}
