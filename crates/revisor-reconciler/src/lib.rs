//! Revisor Reconciler
//!
//! Produces the final artifact of a double-checked operation from the
//! reviewer's accept/reject decisions.
//!
//! The Reconciler provides:
//! - The selection rules (nothing accepted, everything accepted, a subset)
//! - Structural appliers for topic lists and facts comparisons
//! - A verified-result fallback for prose kinds
//!
//! # Examples
//!
//! ```
//! use revisor_domain::{Correction, OperationKind, TopicAction, TopicRef};
//! use revisor_reconciler::{Reconciler, Resolution};
//!
//! let original = r#"[{"title":"A","category":"MÉRITO"},{"title":"B","category":"MÉRITO"}]"#;
//! let all = vec![
//!     Correction::new(TopicAction::Remove { topic: Some(TopicRef::Name("A".into())) }),
//!     Correction::new(TopicAction::Remove { topic: Some(TopicRef::Name("B".into())) }),
//! ];
//!
//! let reconciler = Reconciler::default_config();
//! let result = reconciler
//!     .reconcile(OperationKind::TopicExtraction, original, "[]", &all[..1], &all)
//!     .unwrap();
//!
//! assert_eq!(result.artifact, r#"[{"title":"B","category":"MÉRITO"}]"#);
//! assert_eq!(result.resolution, Resolution::Patched { applied: 1 });
//! ```

#![warn(missing_docs)]

pub mod appliers;
mod config;
mod error;
mod reconciler;

pub use appliers::{applier_for, FactsApplier, TopicApplier};
pub use config::ReconcileConfig;
pub use error::ReconcileError;
pub use reconciler::{reconcile, Reconciler, Reconciliation, Resolution};
