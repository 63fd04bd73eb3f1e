//! List command implementation.
//!
//! The `rigcheck list` command prints the check catalog without probing
//! anything, so users can see what a run would cover.

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::health::{check_count, CATALOG};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            ui.message(&render_json()?);
            return Ok(CommandResult::success());
        }

        ui.show_header("Check Catalog");

        for section in CATALOG {
            ui.show_section(section.title);
            for check in section.checks {
                let suffix = if check.required { "" } else { " (optional)" };
                ui.message(&format!("  {}{}", check.name, suffix));
            }
        }

        ui.message("");
        ui.message(&format!(
            "{} checks in {} sections",
            check_count(),
            CATALOG.len()
        ));

        Ok(CommandResult::success())
    }
}

#[derive(Serialize)]
struct JsonCatalog {
    sections: Vec<JsonSection>,
}

#[derive(Serialize)]
struct JsonSection {
    title: &'static str,
    checks: Vec<JsonCheck>,
}

#[derive(Serialize)]
struct JsonCheck {
    name: &'static str,
    required: bool,
}

fn render_json() -> Result<String> {
    let doc = JsonCatalog {
        sections: CATALOG
            .iter()
            .map(|s| JsonSection {
                title: s.title,
                checks: s
                    .checks
                    .iter()
                    .map(|c| JsonCheck {
                        name: c.name,
                        required: c.required,
                    })
                    .collect(),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}
