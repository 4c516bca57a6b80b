//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use revisor_domain::OperationKind;

/// Revisor CLI - Review and reconcile double-check corrections.
#[derive(Debug, Parser)]
#[command(name = "revisor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "REVISOR_CONFIG")]
    pub config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Default log filter for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs or artifact only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the corrections of a double-check response for review
    Review(ReviewArgs),

    /// Produce the final artifact from the accepted corrections
    Reconcile(ReconcileArgs),
}

/// Arguments for the review command.
#[derive(Debug, Parser)]
pub struct ReviewArgs {
    /// Operation kind (e.g. topicExtraction, factsComparison)
    #[arg(short, long, value_parser = parse_kind)]
    pub kind: OperationKind,

    /// JSON file with the corrections or the full double-check response
    #[arg(long)]
    pub corrections: String,

    /// Start with every correction rejected
    #[arg(long)]
    pub unselected: bool,
}

/// Arguments for the reconcile command.
#[derive(Debug, Parser)]
pub struct ReconcileArgs {
    /// Operation kind (e.g. topicExtraction, factsComparison)
    #[arg(short, long, value_parser = parse_kind)]
    pub kind: OperationKind,

    /// File with the original artifact
    #[arg(short, long)]
    pub original: String,

    /// File with the verified artifact (defaults to the response's verifiedResult)
    #[arg(long)]
    pub verified: Option<String>,

    /// JSON file with the corrections or the full double-check response
    #[arg(long)]
    pub corrections: String,

    /// Correction ids to accept (all others are rejected)
    #[arg(short, long, num_args = 1..)]
    pub accept: Vec<String>,

    /// Correction ids to reject
    #[arg(short, long, num_args = 1..)]
    pub reject: Vec<String>,
}

fn parse_kind(s: &str) -> Result<OperationKind, String> {
    s.parse()
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
