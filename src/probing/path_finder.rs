//! PATH-based runtime interpreter lookup with fallback locations.

use std::path::PathBuf;

/// Interpreter names to try, in preference order.
#[cfg(windows)]
pub(crate) const RUNTIME_CANDIDATES: &[&str] = &["python"];

/// Interpreter names to try, in preference order.
#[cfg(not(windows))]
pub(crate) const RUNTIME_CANDIDATES: &[&str] = &["python3", "python"];

/// System fallback paths to check if the executable is not found in PATH.
const FALLBACK_PATHS: &[&str] = &["/usr/local/bin", "/usr/bin"];

/// Find the runtime interpreter.
///
/// Tries each candidate name via the system PATH first, then common system
/// and per-user locations that are not always on PATH.
pub(crate) fn find_runtime() -> Option<PathBuf> {
    find_executable(RUNTIME_CANDIDATES)
}

/// Find the first of the candidate executables that exists on this machine.
///
/// The PATH lookup goes through the `which` crate, which handles symlinks
/// and platform differences (e.g. `.exe` suffixes).
pub(crate) fn find_executable(candidates: &[&str]) -> Option<PathBuf> {
    for name in candidates {
        if let Ok(path) = which::which(name) {
            return Some(path);
        }
    }

    // Fallback: common system locations not always in PATH
    for dir in FALLBACK_PATHS {
        for name in candidates {
            let path = PathBuf::from(dir).join(name);
            if path.exists() {
                return Some(path);
            }
        }
    }

    // Home directory locations (common for user-installed interpreters)
    if let Ok(home) = std::env::var("HOME") {
        for name in candidates {
            let home_paths = [
                format!("{}/.local/bin/{}", home, name),
                format!("{}/bin/{}", home, name),
            ];
            for p in home_paths {
                let path = PathBuf::from(&p);
                if path.exists() {
                    return Some(path);
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_common_executable() {
        // sh should exist on any Unix system
        #[cfg(unix)]
        {
            let result = find_executable(&["sh"]);
            assert!(result.is_some());
            assert!(result.unwrap().exists());
        }
    }

    #[test]
    fn test_find_nonexistent_executable() {
        let result = find_executable(&["definitely_not_a_real_interpreter_12345"]);
        assert!(result.is_none());
    }

    #[test]
    fn test_first_candidate_wins() {
        // With an impossible name first, the lookup falls through to the
        // real one instead of giving up.
        #[cfg(unix)]
        {
            let result = find_executable(&["definitely_not_a_real_interpreter_12345", "sh"]);
            assert!(result.is_some());
        }
    }

    #[test]
    fn test_find_runtime_does_not_panic() {
        // Result depends on the host; the call itself must always be safe.
        let _ = find_runtime();
    }
}
