//! Host environment probing.
//!
//! Low-level lookups the checker builds on: parsing the search path,
//! resolving a binary against it, and detecting CI. Resolution iterates
//! PATH entries directly rather than shelling out to `which`, whose
//! behavior varies across systems and is sometimes a shell builtin with
//! inconsistent error handling.

use std::path::{Path, PathBuf};

/// Parse the `PATH` environment variable into a list of directories.
pub fn parse_search_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a binary by iterating over search-path entries.
///
/// Returns the first match that exists as an executable regular file.
/// Lookup failures of any kind resolve to `None`; they are never errors.
pub fn resolve_binary(binary: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(binary);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Check whether we are running in a CI environment.
pub fn is_ci() -> bool {
    std::env::var_os("CI").is_some() || std::env::var_os("GITHUB_ACTIONS").is_some()
}
