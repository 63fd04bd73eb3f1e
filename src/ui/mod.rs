//! Terminal output components.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for styled TTY output
//! - [`PlainUI`] for CI/non-TTY environments (bracketed status labels)
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use rigcheck::ui::{create_ui, OutputMode};
//!
//! // Non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Workstation Health Check");
//! ui.success("git");
//! ```

pub mod icons;
pub mod mock;
pub mod output;
pub mod plain;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::MockUI;
pub use output::OutputMode;
pub use plain::PlainUI;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, Theme};

/// Trait for terminal output.
///
/// This trait allows capturing output in tests and swapping the styled
/// renderer for a plain one in CI.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a success line.
    fn success(&mut self, msg: &str);

    /// Display a warning line.
    fn warning(&mut self, msg: &str);

    /// Display an error line.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a section heading.
    fn show_section(&mut self, title: &str);

    /// Show a contextual hint.
    fn show_hint(&mut self, hint: &str);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}
