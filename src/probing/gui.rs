//! GUI toolkit availability check.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Module whose importability decides GUI capability.
const GUI_MODULE: &str = "tkinter";

/// Check whether the GUI toolkit module loads under the given interpreter.
///
/// Spawns a throwaway subprocess that does nothing but import the module;
/// a zero exit means the toolkit is present and linkable. Any failure
/// (missing module, crash, timeout, spawn error) reads as "not capable",
/// never as an error, since the bootstrap degrades to command-line mode.
pub(crate) async fn check_gui_module(runtime: &Path, ceiling: Duration) -> bool {
    let mut command = Command::new(runtime);
    command
        .arg("-c")
        .arg(format!("import {GUI_MODULE}"))
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true);

    matches!(
        timeout(ceiling, command.status()).await,
        Ok(Ok(status)) if status.success()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const TEST_TIMEOUT: Duration = Duration::from_secs(5);

    #[tokio::test]
    async fn test_gui_check_nonexistent_interpreter_is_not_capable() {
        let path = PathBuf::from("/nonexistent/path/to/interpreter");
        assert!(!check_gui_module(&path, TEST_TIMEOUT).await);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_gui_check_trusts_zero_exit() {
        let fake = write_fake_interpreter("exit 0");
        assert!(check_gui_module(&fake, TEST_TIMEOUT).await);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_gui_check_trusts_nonzero_exit() {
        let fake = write_fake_interpreter("exit 1");
        assert!(!check_gui_module(&fake, TEST_TIMEOUT).await);
    }

    /// Stand-in interpreter that ignores its arguments and exits as told.
    #[cfg(unix)]
    fn write_fake_interpreter(body: &str) -> tempfile::TempPath {
        use std::io::Write;
        use std::os::unix::fs::PermissionsExt;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "#!/bin/sh\n{body}").unwrap();
        let path = file.into_temp_path();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path
    }
}
