//! Revisor Domain Layer
//!
//! Core model for reconciling an LLM-drafted legal artifact with the
//! corrections proposed by an independent double-check pass.
//!
//! ## Key Concepts
//!
//! - **Operation kind**: which part of the decision is under review
//! - **Correction**: one proposed edit, tagged by `type`, typed per family
//! - **Artifact**: the topic list, the facts comparison, or opaque prose
//!
//! ## Architecture
//!
//! This crate holds pure data types and the `PatchApplier` seam. Parsing
//! upstream output, describing corrections to reviewers and reconciling live
//! in other crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod correction;
pub mod facts;
pub mod kind;
pub mod topic;
pub mod traits;

// Re-exports for convenience
pub use correction::{
    Correction, CorrectionAction, DispositivoAction, FactsAction, ReviewAction, TopicAction,
};
pub use facts::FactsComparison;
pub use kind::OperationKind;
pub use topic::{topic_title, Topic, TopicRef, DEFAULT_CATEGORY};
