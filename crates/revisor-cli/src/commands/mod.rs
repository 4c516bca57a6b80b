//! Command implementations.

pub mod reconcile;
pub mod review;

pub use self::reconcile::execute_reconcile;
pub use self::review::execute_review;

use crate::error::Result;
use crate::output::Formatter;
use revisor_domain::OperationKind;
use revisor_parser::{parse_double_check_response, DoubleCheckResponse};
use std::fs;

/// Read and parse a corrections file (bare array or full response).
///
/// Skipped entries are reported on stderr unless the output is quiet.
pub(crate) fn load_response(
    kind: OperationKind,
    path: &str,
    formatter: &Formatter,
) -> Result<DoubleCheckResponse> {
    let contents = fs::read_to_string(path)?;
    let response = parse_double_check_response(kind, &contents)?;

    if !formatter.is_quiet() {
        for skipped in &response.skipped {
            eprintln!("{}", formatter.skipped(skipped));
        }
    }

    Ok(response)
}
