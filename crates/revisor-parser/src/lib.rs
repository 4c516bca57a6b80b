//! Revisor Parser
//!
//! Turns the raw text of a double-check LLM pass into typed corrections.
//!
//! # Overview
//!
//! The double-check collaborator asks a second model to review an artifact
//! and answer with the verified version plus a list of discrete corrections.
//! This crate is the single place where that loosely-shaped output becomes a
//! [`revisor_domain::Correction`]; every other crate relies on the typed model.
//!
//! ```text
//! LLM text → extract_json → JSON → parse_correction (per entry) → DoubleCheckResponse
//! ```
//!
//! Entries that are not objects or have no `type` are skipped with a warning
//! and reported in [`DoubleCheckResponse::skipped`]. Payloads that are not JSON
//! fail the whole parse.
//!
//! # Example Usage
//!
//! ```
//! use revisor_domain::OperationKind;
//! use revisor_parser::parse_double_check_response;
//!
//! let response = r#"{
//!     "verifiedResult": "JULGO PROCEDENTE o pedido...",
//!     "corrections": [
//!         {"type": "missed", "item": "Honorários", "reason": "Omissão"}
//!     ]
//! }"#;
//!
//! let parsed = parse_double_check_response(OperationKind::SentenceReview, response).unwrap();
//! assert_eq!(parsed.corrections.len(), 1);
//! assert_eq!(parsed.corrections[0].type_name(), "missed");
//! ```

#![warn(missing_docs)]

mod error;
mod parser;
mod types;

#[cfg(test)]
mod tests;

pub use error::ParseError;
pub use parser::{parse_correction, parse_corrections, parse_double_check_response};
pub use types::{DoubleCheckResponse, SkippedCorrection};
