//! Styled terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OutputMode, PlainUI, StatusKind, Theme, UserInterface};

/// Styled terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: Theme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "  {}", StatusKind::Success.format(&self.theme, msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "  {}", StatusKind::Warning.format(&self.theme, msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "  {}", StatusKind::Failed.format(&self.theme, msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
    }

    fn show_section(&mut self, title: &str) {
        writeln!(self.term, "\n{}", self.theme.section.apply_to(title)).ok();
    }

    fn show_hint(&mut self, hint: &str) {
        writeln!(self.term, "  {}", self.theme.hint.apply_to(hint)).ok();
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(PlainUI::new(mode))
    }
}
