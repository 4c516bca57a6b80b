//! Review command implementation.

use super::load_response;
use crate::cli::ReviewArgs;
use crate::error::Result;
use crate::output::Formatter;
use revisor_review::{to_selectable, SelectableCorrection};

/// Execute the review command.
pub fn execute_review(args: ReviewArgs, formatter: &Formatter) -> Result<()> {
    let list = build_review(&args, formatter)?;
    println!("{}", formatter.format_selectable(&list)?);
    Ok(())
}

fn build_review(args: &ReviewArgs, formatter: &Formatter) -> Result<Vec<SelectableCorrection>> {
    let response = load_response(args.kind, &args.corrections, formatter)?;

    if let Some(summary) = response.summary.as_deref().filter(|_| !formatter.is_quiet()) {
        eprintln!("{}", formatter.info(summary));
    }

    Ok(to_selectable(args.kind, &response.corrections, !args.unselected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use revisor_domain::OperationKind;
    use std::fs;
    use tempfile::TempDir;

    fn write_response(dir: &TempDir) -> String {
        let path = dir.path().join("response.json");
        fs::write(
            &path,
            r#"{
                "verifiedResult": "Texto revisado",
                "corrections": [
                    {"type": "missed", "item": "Honorários", "reason": "Omissão"},
                    "not an object",
                    {"type": "improve", "item": "Juros", "suggestion": "Juros de mora", "reason": "Clareza"}
                ],
                "summary": "Dois ajustes"
            }"#,
        )
        .unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_review_lists_valid_corrections() {
        let dir = TempDir::new().unwrap();
        let args = ReviewArgs {
            kind: OperationKind::SentenceReview,
            corrections: write_response(&dir),
            unselected: false,
        };
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let list = build_review(&args, &formatter).unwrap();
        let ids: Vec<_> = list.iter().map(|i| i.id()).collect();
        assert_eq!(ids, vec!["sentenceReview-0-missed", "sentenceReview-1-improve"]);
        assert!(list.iter().all(|i| i.selected));
    }

    #[test]
    fn test_review_unselected() {
        let dir = TempDir::new().unwrap();
        let args = ReviewArgs {
            kind: OperationKind::SentenceReview,
            corrections: write_response(&dir),
            unselected: true,
        };
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let list = build_review(&args, &formatter).unwrap();
        assert!(list.iter().all(|i| !i.selected));
    }

    #[test]
    fn test_review_missing_file() {
        let args = ReviewArgs {
            kind: OperationKind::QuickPrompt,
            corrections: "/nonexistent/response.json".to_string(),
            unselected: false,
        };
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert!(build_review(&args, &formatter).is_err());
    }
}
