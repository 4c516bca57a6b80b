//! Reconcile command implementation.

use super::load_response;
use crate::cli::ReconcileArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use revisor_reconciler::{ReconcileConfig, Reconciler, Reconciliation};
use revisor_review::{get_selected, set_all, to_selectable, SelectableCorrection};
use std::fs;
use tracing::debug;

/// Execute the reconcile command.
pub fn execute_reconcile(
    args: ReconcileArgs,
    config: &ReconcileConfig,
    formatter: &Formatter,
) -> Result<()> {
    let (reconciliation, total) = run_reconcile(&args, config, formatter)?;

    if !formatter.is_quiet() {
        eprintln!("{}", formatter.resolution(&reconciliation.resolution, total));
    }
    println!("{}", formatter.format_reconciliation(&reconciliation)?);
    Ok(())
}

fn run_reconcile(
    args: &ReconcileArgs,
    config: &ReconcileConfig,
    formatter: &Formatter,
) -> Result<(Reconciliation, usize)> {
    let response = load_response(args.kind, &args.corrections, formatter)?;
    let original = fs::read_to_string(&args.original)?;
    let verified = match (&args.verified, response.verified) {
        (Some(path), _) => fs::read_to_string(path)?,
        (None, Some(verified)) => verified,
        (None, None) => {
            return Err(CliError::InvalidInput(
                "No verified artifact: pass --verified or a response with verifiedResult"
                    .to_string(),
            ))
        }
    };

    let mut list = to_selectable(args.kind, &response.corrections, true);
    apply_decisions(&mut list, &args.accept, &args.reject)?;
    let selected = get_selected(&list);
    debug!(
        "Accepted {} of {} corrections",
        selected.len(),
        response.corrections.len()
    );

    let reconciliation = Reconciler::new(config.clone()).reconcile(
        args.kind,
        &original,
        &verified,
        &selected,
        &response.corrections,
    )?;
    Ok((reconciliation, response.corrections.len()))
}

/// Apply `--accept`/`--reject` to a fully selected list
///
/// Any accepted id narrows the selection to the accepted ids; rejections are
/// applied afterwards.
fn apply_decisions(
    list: &mut [SelectableCorrection],
    accept: &[String],
    reject: &[String],
) -> Result<()> {
    if !accept.is_empty() {
        set_all(list, false);
    }
    for (ids, selected) in [(accept, true), (reject, false)] {
        for id in ids {
            let item = list
                .iter_mut()
                .find(|item| item.id() == id.as_str())
                .ok_or_else(|| CliError::InvalidInput(format!("Unknown correction id '{}'", id)))?;
            item.selected = selected;
        }
    }
    Ok(())
}
