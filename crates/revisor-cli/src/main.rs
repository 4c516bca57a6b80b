//! Revisor CLI - Command-line interface for double-check reconciliation.

use clap::Parser;
use revisor_cli::commands;
use revisor_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> revisor_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (log to stderr); REVISOR_LOG overrides -v
    let filter = EnvFilter::try_from_env("REVISOR_LOG")
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let config = Config::load(cli.config.as_deref())?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Review(args) => commands::execute_review(args, &formatter)?,
        Command::Reconcile(args) => {
            commands::execute_reconcile(args, &config.reconcile, &formatter)?
        }
    }

    Ok(())
}
