//! Check results and the accumulated run report.
//!
//! A [`Report`] is append-only while the catalog runs. The missing-tools
//! and warnings views are derived on demand from the recorded results;
//! there is no independently mutated list to drift out of sync.

use crate::health::catalog::CheckDef;

/// The outcome of one check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// The catalog entry this result belongs to.
    pub check: &'static CheckDef,
    /// Whether the check passed.
    pub passed: bool,
    /// Extra display detail, e.g. the resolved git identity value or the
    /// fallback binary that satisfied an alternative pair.
    pub detail: Option<String>,
}

/// The accumulated run: one result per catalog entry, in catalog order.
#[derive(Debug, Default)]
pub struct Report {
    results: Vec<CheckResult>,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one result.
    pub fn record(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// All recorded results, in the order they ran.
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Names of failed required checks, in run order.
    pub fn missing_tools(&self) -> Vec<&'static str> {
        self.results
            .iter()
            .filter(|r| !r.passed && r.check.required)
            .map(|r| r.check.name)
            .collect()
    }

    /// Warning sentences for failed optional checks, in run order.
    pub fn warnings(&self) -> Vec<String> {
        self.results
            .iter()
            .filter(|r| !r.passed && !r.check.required)
            .map(|r| r.check.warning_text())
            .collect()
    }

    /// Whether no required check failed.
    pub fn is_healthy(&self) -> bool {
        self.results.iter().all(|r| r.passed || !r.check.required)
    }

    /// Process exit code: `1` iff any required check failed.
    pub fn exit_code(&self) -> i32 {
        if self.is_healthy() {
            0
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::catalog::CheckKind;

    static REQUIRED_DEF: CheckDef = CheckDef {
        name: "terraform",
        kind: CheckKind::Command {
            binary: "terraform",
        },
        required: true,
    };

    static OPTIONAL_DEF: CheckDef = CheckDef {
        name: "k9s",
        kind: CheckKind::Command { binary: "k9s" },
        required: false,
    };

    fn result(check: &'static CheckDef, passed: bool) -> CheckResult {
        CheckResult {
            check,
            passed,
            detail: None,
        }
    }

    #[test]
    fn empty_report_is_healthy() {
        let report = Report::new();
        assert!(report.is_healthy());
        assert_eq!(report.exit_code(), 0);
        assert!(report.missing_tools().is_empty());
        assert!(report.warnings().is_empty());
    }

    #[test]
    fn failed_required_check_enters_missing_tools() {
        let mut report = Report::new();
        report.record(result(&REQUIRED_DEF, false));

        assert_eq!(report.missing_tools(), vec!["terraform"]);
        assert!(!report.is_healthy());
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn failed_optional_check_enters_warnings_only() {
        let mut report = Report::new();
        report.record(result(&OPTIONAL_DEF, false));

        assert!(report.missing_tools().is_empty());
        assert_eq!(report.warnings().len(), 1);
        assert!(report.warnings()[0].contains("k9s"));
        assert!(report.is_healthy());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn passed_checks_produce_neither_view() {
        let mut report = Report::new();
        report.record(result(&REQUIRED_DEF, true));
        report.record(result(&OPTIONAL_DEF, true));

        assert!(report.missing_tools().is_empty());
        assert!(report.warnings().is_empty());
        assert_eq!(report.results().len(), 2);
    }

    #[test]
    fn views_preserve_run_order() {
        static SECOND_DEF: CheckDef = CheckDef {
            name: "packer",
            kind: CheckKind::Command { binary: "packer" },
            required: true,
        };

        let mut report = Report::new();
        report.record(result(&REQUIRED_DEF, false));
        report.record(result(&SECOND_DEF, false));

        assert_eq!(report.missing_tools(), vec!["terraform", "packer"]);
    }

    #[test]
    fn detail_is_carried_through() {
        let mut report = Report::new();
        report.record(CheckResult {
            check: &OPTIONAL_DEF,
            passed: true,
            detail: Some("via fallback".to_string()),
        });

        assert_eq!(report.results()[0].detail.as_deref(), Some("via fallback"));
    }
}
