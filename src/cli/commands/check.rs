//! Check command implementation.
//!
//! The `rigcheck check` command (also the default when no subcommand is
//! given) runs the full catalog, prints the summary, and sets the process
//! exit code: `1` when a required tool is missing, `0` otherwise.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::health::{HealthChecker, Report};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Remediation shown under the missing-tools list. The playbook referenced
/// here is the provisioning side of the workflow; rigcheck itself never
/// installs anything.
const REMEDIATION_HINT: &str = "Run `ansible-playbook setup.yml` to install the missing tools";

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
    checker: HealthChecker,
}

impl CheckCommand {
    /// Create a check command that probes the real host.
    pub fn new(args: CheckArgs) -> Self {
        Self {
            args,
            checker: HealthChecker::new(),
        }
    }

    /// Create a check command with an explicit checker (tests).
    pub fn with_checker(args: CheckArgs, checker: HealthChecker) -> Self {
        Self { args, checker }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = if self.args.json {
            // Checks run silently so stdout stays parseable.
            let report = self.checker.collect();
            ui.message(&render_json(&report)?);
            report
        } else {
            ui.show_header("Workstation Health Check");
            let report = self.checker.run(ui);
            print_summary(ui, &report);
            report
        };

        if report.is_healthy() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(report.exit_code()))
        }
    }
}

/// Print the summary section: the success line or the missing-tools list
/// with the remediation hint, then any warnings.
fn print_summary(ui: &mut dyn UserInterface, report: &Report) {
    ui.show_section("Summary");

    if report.is_healthy() {
        ui.success("All required tools are installed");
    } else {
        for name in report.missing_tools() {
            ui.error(&format!("{} is missing", name));
        }
        ui.show_hint(REMEDIATION_HINT);
    }

    for warning in report.warnings() {
        ui.warning(&warning);
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    healthy: bool,
    checks: Vec<JsonCheck<'a>>,
    missing_tools: Vec<&'static str>,
    warnings: Vec<String>,
}

#[derive(Serialize)]
struct JsonCheck<'a> {
    name: &'static str,
    passed: bool,
    required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<&'a str>,
}

fn render_json(report: &Report) -> Result<String> {
    let doc = JsonReport {
        generated_at: Utc::now(),
        healthy: report.is_healthy(),
        checks: report
            .results()
            .iter()
            .map(|r| JsonCheck {
                name: r.check.name,
                passed: r.passed,
                required: r.check.required,
                detail: r.detail.as_deref(),
            })
            .collect(),
        missing_tools: report.missing_tools(),
        warnings: report.warnings(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}
