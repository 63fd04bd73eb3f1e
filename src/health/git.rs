//! Global git configuration lookup.

use std::process::{Command, Stdio};

/// Read a key from the global git configuration.
///
/// Returns `None` when the key is unset, the value is empty, or the lookup
/// fails for any reason (git missing, spawn failure, bad UTF-8). A lookup
/// failure is treated as absence, never as an error; one broken probe must
/// not take down the run.
pub fn global_config_value(key: &str) -> Option<String> {
    let output = Command::new("git")
        .args(["config", "--global", "--get", key])
        .stderr(Stdio::null())
        .output()
        .ok()?;

    if !output.status.success() {
        tracing::debug!("git config --global {} is unset", key);
        return None;
    }

    let value = String::from_utf8(output.stdout).ok()?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
