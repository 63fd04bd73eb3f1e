//! Rigcheck - Developer workstation health checks.
//!
//! Rigcheck probes the current machine for a fixed catalog of command-line
//! tools, configuration files, application bundles, git identity settings,
//! and SSH keys. It prints a status line per check as it runs, then a
//! summary, and exits non-zero when a required tool is missing. It never
//! installs or mutates anything; remediation is left to the provisioning
//! playbook referenced in the summary hint.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`health`] - The check catalog, the checker, and the report
//! - [`ui`] - Terminal output: themes, status icons, plain/CI rendering
//!
//! # Example
//!
//! ```no_run
//! use rigcheck::health::HealthChecker;
//! use rigcheck::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Normal);
//! let report = HealthChecker::new().run(ui.as_mut());
//! std::process::exit(report.exit_code());
//! ```

pub mod cli;
pub mod error;
pub mod health;
pub mod ui;

pub use error::{Result, RigcheckError};
