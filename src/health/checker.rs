//! The health checker.
//!
//! Walks the catalog in order, evaluates every check exactly once against a
//! [`HostEnv`], and prints one status line per check as it runs so progress
//! is visible on a slow machine. Checks are isolated: no probe failure may
//! abort the run or skip a later check, and nothing short-circuits.

use std::path::{Path, PathBuf};

use crate::health::catalog::{CheckDef, CheckKind, Section, CATALOG};
use crate::health::probe;
use crate::health::report::{CheckResult, Report};
use crate::ui::UserInterface;

/// Injectable lookup for global git configuration values.
pub type GitLookup = Box<dyn Fn(&str) -> Option<String>>;

/// The host state checks are evaluated against.
///
/// Holds the search path, the home directory, and the git-config lookup.
/// Tests construct one with [`HostEnv::with_lookups`] so nothing touches
/// real environment state.
pub struct HostEnv {
    path_entries: Vec<PathBuf>,
    home: PathBuf,
    git_lookup: GitLookup,
}

impl HostEnv {
    /// Probe the real host: `PATH`, the home directory, and `git config`.
    pub fn detect() -> Self {
        Self {
            path_entries: probe::parse_search_path(),
            home: dirs::home_dir().unwrap_or_else(|| PathBuf::from("/")),
            git_lookup: Box::new(|key| crate::health::git::global_config_value(key)),
        }
    }

    /// Build a host environment with explicit lookups.
    pub fn with_lookups<F>(path_entries: Vec<PathBuf>, home: PathBuf, git_lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + 'static,
    {
        Self {
            path_entries,
            home,
            git_lookup: Box::new(git_lookup),
        }
    }

    /// Search-path entries used for command resolution.
    pub fn path_entries(&self) -> &[PathBuf] {
        &self.path_entries
    }

    /// The home directory used for file and SSH-key checks.
    pub fn home(&self) -> &Path {
        &self.home
    }
}

/// Runs the check catalog against a host environment.
pub struct HealthChecker {
    catalog: &'static [Section],
    env: HostEnv,
}

impl Default for HealthChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthChecker {
    /// Create a checker for the built-in catalog against the real host.
    pub fn new() -> Self {
        Self::with_env(HostEnv::detect())
    }

    /// Create a checker for the built-in catalog against a given host.
    pub fn with_env(env: HostEnv) -> Self {
        Self::with_catalog(CATALOG, env)
    }

    /// Create a checker for a custom catalog (tests).
    pub fn with_catalog(catalog: &'static [Section], env: HostEnv) -> Self {
        Self { catalog, env }
    }

    /// Run every check, printing a section heading and a status line per
    /// check as it goes, and return the finalized report.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Report {
        let show_progress = ui.output_mode().shows_progress();
        let mut report = Report::new();

        for section in self.catalog {
            if show_progress {
                ui.show_section(section.title);
            }
            for check in section.checks {
                let result = self.run_check(check);
                if show_progress {
                    show_check_line(ui, &result);
                }
                report.record(result);
            }
        }

        report
    }

    /// Run every check without printing (JSON mode).
    pub fn collect(&self) -> Report {
        let mut report = Report::new();
        for section in self.catalog {
            for check in section.checks {
                report.record(self.run_check(check));
            }
        }
        report
    }

    /// Evaluate a single check. Never fails: every probe error collapses
    /// into "absent".
    pub fn run_check(&self, check: &'static CheckDef) -> CheckResult {
        let (passed, detail) = match check.kind {
            CheckKind::Command { binary } => {
                let resolved = probe::resolve_binary(binary, &self.env.path_entries);
                if let Some(path) = &resolved {
                    tracing::debug!("{} resolved at {}", binary, path.display());
                }
                (resolved.is_some(), None)
            }
            CheckKind::CommandAny { binaries } => {
                let hit = binaries
                    .iter()
                    .find(|b| probe::resolve_binary(b, &self.env.path_entries).is_some());
                match hit {
                    Some(&binary) if binary != binaries[0] => {
                        (true, Some(binary.to_string()))
                    }
                    Some(_) => (true, None),
                    None => (false, None),
                }
            }
            CheckKind::HomeFile { relative } => (self.env.home.join(relative).exists(), None),
            CheckKind::AppBundle { path } => (Path::new(path).exists(), None),
            CheckKind::GitConfig { key } => match (self.env.git_lookup)(key) {
                Some(value) => (true, Some(value)),
                None => (false, None),
            },
            CheckKind::SshKey { candidates } => {
                let ssh_dir = self.env.home.join(".ssh");
                (candidates.iter().any(|c| ssh_dir.join(c).exists()), None)
            }
        };

        CheckResult {
            check,
            passed,
            detail,
        }
    }
}

/// Print one status line for a result: pass, hard fail, or soft warn.
fn show_check_line(ui: &mut dyn UserInterface, result: &CheckResult) {
    let label = match &result.detail {
        Some(detail) => format!("{} ({})", result.check.name, detail),
        None => result.check.name.to_string(),
    };
    if result.passed {
        ui.success(&label);
    } else if result.check.required {
        ui.error(&label);
    } else {
        ui.warning(&label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::catalog::check_count;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn create_fake_binary(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    fn empty_env(temp: &TempDir) -> HostEnv {
        HostEnv::with_lookups(vec![], temp.path().to_path_buf(), |_| None)
    }

    #[test]
    fn every_check_produces_exactly_one_result() {
        let temp = TempDir::new().unwrap();
        let checker = HealthChecker::with_env(empty_env(&temp));

        let report = checker.collect();
        assert_eq!(report.results().len(), check_count());
    }

    #[test]
    fn bare_host_misses_exactly_the_required_commands() {
        let temp = TempDir::new().unwrap();
        let checker = HealthChecker::with_env(empty_env(&temp));

        let report = checker.collect();
        let expected: Vec<&str> = CATALOG
            .iter()
            .flat_map(|s| s.checks)
            .filter(|c| c.required)
            .map(|c| c.name)
            .collect();
        assert_eq!(report.missing_tools(), expected);
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn command_check_passes_when_binary_on_path() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        create_fake_binary(&bin.join("git"));

        let env = HostEnv::with_lookups(vec![bin], temp.path().to_path_buf(), |_| None);
        let checker = HealthChecker::with_env(env);

        let git = CATALOG[0]
            .checks
            .iter()
            .find(|c| c.name == "git")
            .unwrap();
        assert!(checker.run_check(git).passed);
    }

    #[test]
    fn alternative_pair_accepts_fallback_binary() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        create_fake_binary(&bin.join("speedtest-cli"));

        let env = HostEnv::with_lookups(vec![bin], temp.path().to_path_buf(), |_| None);
        let checker = HealthChecker::with_env(env);

        let speedtest = CATALOG
            .iter()
            .flat_map(|s| s.checks)
            .find(|c| c.name == "speedtest")
            .unwrap();
        let result = checker.run_check(speedtest);
        assert!(result.passed);
        assert_eq!(result.detail.as_deref(), Some("speedtest-cli"));
    }

    #[test]
    fn alternative_pair_primary_needs_no_detail() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        create_fake_binary(&bin.join("speedtest"));

        let env = HostEnv::with_lookups(vec![bin], temp.path().to_path_buf(), |_| None);
        let checker = HealthChecker::with_env(env);

        let speedtest = CATALOG
            .iter()
            .flat_map(|s| s.checks)
            .find(|c| c.name == "speedtest")
            .unwrap();
        let result = checker.run_check(speedtest);
        assert!(result.passed);
        assert!(result.detail.is_none());
    }

    #[test]
    fn git_identity_detail_carries_value() {
        let temp = TempDir::new().unwrap();
        let env = HostEnv::with_lookups(vec![], temp.path().to_path_buf(), |key| {
            (key == "user.name").then(|| "Jane Doe".to_string())
        });
        let checker = HealthChecker::with_env(env);

        let name = CATALOG
            .iter()
            .flat_map(|s| s.checks)
            .find(|c| c.name == "Git user.name")
            .unwrap();
        let result = checker.run_check(name);
        assert!(result.passed);
        assert_eq!(result.detail.as_deref(), Some("Jane Doe"));

        let email = CATALOG
            .iter()
            .flat_map(|s| s.checks)
            .find(|c| c.name == "Git user.email")
            .unwrap();
        assert!(!checker.run_check(email).passed);
    }

    #[test]
    fn ssh_key_check_accepts_any_candidate() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".ssh")).unwrap();
        fs::write(temp.path().join(".ssh/id_rsa"), "key").unwrap();

        let checker = HealthChecker::with_env(empty_env(&temp));
        let ssh = CATALOG
            .iter()
            .flat_map(|s| s.checks)
            .find(|c| c.name == "SSH key")
            .unwrap();
        assert!(checker.run_check(ssh).passed);
    }

    #[test]
    fn home_file_check_sees_created_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".zshrc"), "# shell config").unwrap();

        let checker = HealthChecker::with_env(empty_env(&temp));
        let zshrc = CATALOG
            .iter()
            .flat_map(|s| s.checks)
            .find(|c| c.name == ".zshrc")
            .unwrap();
        assert!(checker.run_check(zshrc).passed);
    }

    #[test]
    fn run_prints_sections_in_catalog_order() {
        let temp = TempDir::new().unwrap();
        let checker = HealthChecker::with_env(empty_env(&temp));
        let mut ui = MockUI::new();

        checker.run(&mut ui);

        let expected: Vec<String> = CATALOG.iter().map(|s| s.title.to_string()).collect();
        assert_eq!(ui.sections(), expected.as_slice());
    }

    #[test]
    fn run_emits_one_line_per_check() {
        let temp = TempDir::new().unwrap();
        let checker = HealthChecker::with_env(empty_env(&temp));
        let mut ui = MockUI::new();

        checker.run(&mut ui);

        let lines = ui.successes().len() + ui.warnings().len() + ui.errors().len();
        assert_eq!(lines, check_count());
    }

    #[test]
    fn quiet_mode_suppresses_progress_lines() {
        use crate::ui::OutputMode;

        let temp = TempDir::new().unwrap();
        let checker = HealthChecker::with_env(empty_env(&temp));
        let mut ui = MockUI::with_mode(OutputMode::Quiet);

        let report = checker.run(&mut ui);

        assert!(ui.sections().is_empty());
        assert!(ui.errors().is_empty());
        // The report itself is unaffected by output mode
        assert_eq!(report.results().len(), check_count());
    }

    #[test]
    fn collect_and_run_agree() {
        let temp = TempDir::new().unwrap();
        let checker = HealthChecker::with_env(empty_env(&temp));
        let mut ui = MockUI::new();

        let collected = checker.collect();
        let ran = checker.run(&mut ui);

        assert_eq!(collected.missing_tools(), ran.missing_tools());
        assert_eq!(collected.warnings(), ran.warnings());
        assert_eq!(collected.exit_code(), ran.exit_code());
    }

    #[test]
    fn repeated_runs_are_idempotent() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        create_fake_binary(&bin.join("git"));
        create_fake_binary(&bin.join("docker"));

        let env = HostEnv::with_lookups(vec![bin], temp.path().to_path_buf(), |_| None);
        let checker = HealthChecker::with_env(env);

        let first = checker.collect();
        let second = checker.collect();

        assert_eq!(first.missing_tools(), second.missing_tools());
        assert_eq!(first.warnings(), second.warnings());
        assert_eq!(first.exit_code(), second.exit_code());
    }
}
