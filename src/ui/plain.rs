//! Plain UI for CI/non-TTY environments.
//!
//! Status lines use bracketed labels (`[ok]`, `[FAIL]`, `[warn]`) instead
//! of unicode icons so log-based environments stay readable and grep-able.
//! Everything goes to stdout since the report is the program's output, not a
//! diagnostic stream.

use super::{OutputMode, StatusKind, UserInterface};

/// UI implementation for non-interactive output.
pub struct PlainUI {
    mode: OutputMode,
}

impl PlainUI {
    /// Create a new plain UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for PlainUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("  {}", StatusKind::Success.format_plain(msg));
    }

    fn warning(&mut self, msg: &str) {
        println!("  {}", StatusKind::Warning.format_plain(msg));
    }

    fn error(&mut self, msg: &str) {
        println!("  {}", StatusKind::Failed.format_plain(msg));
    }

    fn show_header(&mut self, title: &str) {
        println!("\n{}\n", title);
    }

    fn show_section(&mut self, title: &str) {
        println!("\n{}", title);
    }

    fn show_hint(&mut self, hint: &str) {
        println!("  {}", hint);
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
