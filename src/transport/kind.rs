//! Transport kind enum identifying the download mechanisms.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A download mechanism the bootstrap can try.
///
/// Declaration order is priority order: the in-process client comes first
/// because it has the richest error reporting and no external-process
/// overhead, and the runtime's own networking library is the last resort.
///
/// # Extensibility
///
/// This enum is marked `#[non_exhaustive]` to allow adding new mechanisms
/// in future versions. When matching on `TransportKind`, always include a
/// wildcard pattern.
///
/// # Example
///
/// ```rust
/// use enm_bootstrap::TransportKind;
///
/// let order: Vec<_> = TransportKind::all().collect();
/// assert_eq!(order[0], TransportKind::HttpClient);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[non_exhaustive]
pub enum TransportKind {
    /// In-process HTTP client (always available).
    HttpClient,
    /// OS background transfer service (BITS via PowerShell; Windows only).
    SystemTransfer,
    /// External `curl` command-line downloader.
    Curl,
    /// The runtime interpreter's own networking library (`urllib`).
    RuntimeFetch,
}

impl TransportKind {
    /// Human-readable name for progress and diagnostic messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::HttpClient => "built-in HTTP client",
            Self::SystemTransfer => "Windows background transfer",
            Self::Curl => "curl",
            Self::RuntimeFetch => "Python urllib",
        }
    }

    /// Iterator over all transport kinds, in priority order.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}
