//! Trait definitions for the seams around the engine
//!
//! The structural appliers for topic lists and facts comparisons implement
//! this trait in the reconciler crate.

use crate::{Correction, OperationKind};

/// Trait for folding corrections over a serialized artifact
///
/// Implemented by the application layer (revisor-reconciler)
pub trait PatchApplier {
    /// Error type for apply operations
    type Error;

    /// The operation kind whose artifacts this applier understands
    fn kind(&self) -> OperationKind;

    /// Apply `corrections` in order to `artifact`, returning the new artifact
    ///
    /// Each correction sees the result of the previous one. Corrections that
    /// cannot be applied are skipped, never reported as errors.
    fn apply(&self, artifact: &str, corrections: &[Correction]) -> Result<String, Self::Error>;
}
