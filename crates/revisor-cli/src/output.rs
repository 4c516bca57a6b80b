//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use revisor_parser::SkippedCorrection;
use revisor_reconciler::{Reconciliation, Resolution};
use revisor_review::SelectableCorrection;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a review list.
    pub fn format_selectable(&self, list: &[SelectableCorrection]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(list)?),
            OutputFormat::Table => Ok(self.format_selectable_table(list)),
            OutputFormat::Quiet => Ok(list
                .iter()
                .map(SelectableCorrection::id)
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a review list as a table.
    fn format_selectable_table(&self, list: &[SelectableCorrection]) -> String {
        if list.is_empty() {
            return self.colorize("No corrections found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["", "ID", "Description", "Reason", "Selected"]);

        for item in list {
            let selected = if item.selected { "✓" } else { "✗" };
            builder.push_record([
                item.icon().to_string(),
                item.id().to_string(),
                item.description().to_string(),
                item.correction().reason.clone(),
                selected.to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format the outcome of a reconciliation.
    ///
    /// Table and quiet formats print the artifact alone so it can be piped.
    pub fn format_reconciliation(&self, reconciliation: &Reconciliation) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(reconciliation)?),
            OutputFormat::Table | OutputFormat::Quiet => Ok(reconciliation.artifact.clone()),
        }
    }

    /// Describe how the artifact was chosen.
    pub fn resolution(&self, resolution: &Resolution, total: usize) -> String {
        match resolution {
            Resolution::Original => self.info("No corrections accepted; kept the original"),
            Resolution::Verified => self.success(&format!(
                "All {} correction(s) accepted; using the verified result",
                total
            )),
            Resolution::Patched { applied } => {
                self.success(&format!("Applied {} of {} correction(s)", applied, total))
            }
            Resolution::VerifiedFallback => self.warning(
                "Partial selection is not supported for this kind; using the verified result",
            ),
        }
    }

    /// Warning for an upstream entry the parser dropped, named by its upstream position.
    pub fn skipped(&self, skipped: &SkippedCorrection) -> String {
        self.warning(&format!(
            "Ignored upstream entry #{}: {}",
            skipped.index, skipped.reason
        ))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Whether status lines should be printed alongside the output.
    pub fn is_quiet(&self) -> bool {
        self.format == OutputFormat::Quiet
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
