//! Concrete download method implementations.
//!
//! Each mechanism lives behind the [`TransportMethod`] trait so the
//! selector iterates a registry instead of branching on the OS. Platform
//! differences are confined to each method's availability check.

use crate::probing::find_runtime;
use crate::transport::outcome::TransportError;
use crate::TransportKind;
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;

/// One concrete download mechanism.
#[async_trait]
pub(crate) trait TransportMethod: Send + Sync {
    /// Which registry entry this method implements.
    fn kind(&self) -> TransportKind;

    /// Whether the underlying executable or library is present on this host.
    ///
    /// A `false` here means the method is skipped, not that it failed.
    fn is_available(&self) -> bool;

    /// Download `url` to `dest`, bounded by `ceiling`.
    async fn execute(&self, url: &str, dest: &Path, ceiling: Duration)
        -> Result<(), TransportError>;
}

/// The registered methods, in priority order.
pub(crate) fn default_methods() -> Vec<Box<dyn TransportMethod>> {
    vec![
        Box::new(HttpClientTransport),
        Box::new(SystemTransferTransport),
        Box::new(CurlTransport),
        Box::new(RuntimeFetchTransport),
    ]
}

/// In-process streaming download via `reqwest`.
pub(crate) struct HttpClientTransport;

#[async_trait]
impl TransportMethod for HttpClientTransport {
    fn kind(&self) -> TransportKind {
        TransportKind::HttpClient
    }

    fn is_available(&self) -> bool {
        // Compiled into the binary
        true
    }

    async fn execute(
        &self,
        url: &str,
        dest: &Path,
        ceiling: Duration,
    ) -> Result<(), TransportError> {
        timeout(ceiling, stream_to_file(url, dest))
            .await
            .map_err(|_| TransportError::Timeout(ceiling))?
    }
}

async fn stream_to_file(url: &str, dest: &Path) -> Result<(), TransportError> {
    use futures::StreamExt;

    let response = reqwest::Client::new()
        .get(url)
        .send()
        .await
        .map_err(|e| TransportError::Request(e.to_string()))?;

    if !response.status().is_success() {
        return Err(TransportError::HttpStatus {
            status: response.status().as_u16(),
        });
    }

    let io_err = |e: std::io::Error| TransportError::Io {
        path: dest.to_path_buf(),
        reason: e.to_string(),
    };

    let mut file = tokio::fs::File::create(dest).await.map_err(io_err)?;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| TransportError::Request(e.to_string()))?;
        file.write_all(&chunk).await.map_err(io_err)?;
    }
    file.flush().await.map_err(io_err)?;

    Ok(())
}

/// Background transfer service via `powershell Start-BitsTransfer`.
pub(crate) struct SystemTransferTransport;

#[async_trait]
impl TransportMethod for SystemTransferTransport {
    fn kind(&self) -> TransportKind {
        TransportKind::SystemTransfer
    }

    fn is_available(&self) -> bool {
        cfg!(windows) && which::which("powershell").is_ok()
    }

    async fn execute(
        &self,
        url: &str,
        dest: &Path,
        ceiling: Duration,
    ) -> Result<(), TransportError> {
        let mut command = Command::new("powershell");
        command.arg("-NoProfile").arg("-NonInteractive").arg("-Command").arg(format!(
            "Start-BitsTransfer -Source '{}' -Destination '{}'",
            url,
            dest.display()
        ));
        run_tool("powershell", command, ceiling).await
    }
}

/// External `curl` downloader.
pub(crate) struct CurlTransport;

#[async_trait]
impl TransportMethod for CurlTransport {
    fn kind(&self) -> TransportKind {
        TransportKind::Curl
    }

    fn is_available(&self) -> bool {
        which::which("curl").is_ok()
    }

    async fn execute(
        &self,
        url: &str,
        dest: &Path,
        ceiling: Duration,
    ) -> Result<(), TransportError> {
        let mut command = Command::new("curl");
        command.arg("-fsSL").arg("--output").arg(dest).arg(url);
        run_tool("curl", command, ceiling).await
    }
}

/// Last resort: the runtime interpreter's own `urllib`.
pub(crate) struct RuntimeFetchTransport;

/// One-liner handed to the interpreter; url and dest arrive as argv.
const URLLIB_FETCH: &str =
    "import sys, urllib.request; urllib.request.urlretrieve(sys.argv[1], sys.argv[2])";

#[async_trait]
impl TransportMethod for RuntimeFetchTransport {
    fn kind(&self) -> TransportKind {
        TransportKind::RuntimeFetch
    }

    fn is_available(&self) -> bool {
        find_runtime().is_some()
    }

    async fn execute(
        &self,
        url: &str,
        dest: &Path,
        ceiling: Duration,
    ) -> Result<(), TransportError> {
        let runtime = find_runtime().ok_or_else(|| TransportError::Spawn {
            tool: "python",
            reason: "interpreter disappeared after availability check".to_string(),
        })?;

        let mut command = Command::new(runtime);
        command.arg("-c").arg(URLLIB_FETCH).arg(url).arg(dest);
        run_tool("python", command, ceiling).await
    }
}

/// Run an external downloader and map its exit status.
async fn run_tool(
    tool: &'static str,
    mut command: Command,
    ceiling: Duration,
) -> Result<(), TransportError> {
    command.kill_on_drop(true);

    let output = timeout(ceiling, command.output())
        .await
        .map_err(|_| TransportError::Timeout(ceiling))?
        .map_err(|e| TransportError::Spawn {
            tool,
            reason: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(TransportError::ToolFailed {
            tool,
            exit_code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(())
}
