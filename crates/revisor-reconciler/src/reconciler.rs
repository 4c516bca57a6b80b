//! Reconciliation of an original artifact with a reviewer's selection

use crate::appliers::applier_for;
use crate::{ReconcileConfig, ReconcileError};
use revisor_domain::{Correction, OperationKind};
use serde::Serialize;
use tracing::{info, warn};

/// How the final artifact was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "resolution", rename_all = "snake_case")]
pub enum Resolution {
    /// Nothing was accepted; the original artifact stands
    Original,

    /// Everything was accepted; the verified artifact stands
    Verified,

    /// The accepted corrections were folded over the original artifact
    Patched {
        /// Number of corrections handed to the applier
        applied: usize,
    },

    /// Partial selection on a kind that cannot be patched; the verified
    /// artifact stands
    VerifiedFallback,
}

/// Result of a reconciliation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    /// The final artifact text
    pub artifact: String,

    /// How it was obtained
    #[serde(flatten)]
    pub resolution: Resolution,
}

/// The Reconciler decides the final artifact from the reviewer's selection
#[derive(Debug, Clone)]
pub struct Reconciler {
    config: ReconcileConfig,
}

impl Reconciler {
    /// Create a new Reconciler with the given configuration
    pub fn new(config: ReconcileConfig) -> Self {
        Self { config }
    }

    /// Create a Reconciler with default configuration
    pub fn default_config() -> Self {
        Self::new(ReconcileConfig::default())
    }

    /// The active configuration
    pub fn config(&self) -> &ReconcileConfig {
        &self.config
    }

    /// Produce the final artifact
    ///
    /// # Arguments
    ///
    /// * `kind` - Operation whose artifact is being reconciled
    /// * `original` - Artifact as the first pass produced it
    /// * `verified` - Artifact as the double-check pass rewrote it
    /// * `selected` - Corrections the reviewer accepted, in order
    /// * `all` - Every correction that was offered
    ///
    /// # Returns
    ///
    /// The final artifact and how it was chosen. Only a malformed `original`
    /// on the patch path is an error; bad corrections are skipped.
    pub fn reconcile(
        &self,
        kind: OperationKind,
        original: &str,
        verified: &str,
        selected: &[Correction],
        all: &[Correction],
    ) -> Result<Reconciliation, ReconcileError> {
        let applier = applier_for(kind, &self.config);

        let reconciliation = if selected.is_empty() {
            Reconciliation {
                artifact: original.to_string(),
                resolution: Resolution::Original,
            }
        } else if selected.len() == all.len()
            && !(self.config.replay_when_all_selected && applier.is_some())
        {
            Reconciliation {
                artifact: verified.to_string(),
                resolution: Resolution::Verified,
            }
        } else if let Some(applier) = applier {
            Reconciliation {
                artifact: applier.apply(original, selected)?,
                resolution: Resolution::Patched {
                    applied: selected.len(),
                },
            }
        } else {
            warn!(
                kind = %kind,
                selected = selected.len(),
                total = all.len(),
                "Partial selection is not supported for this kind; using the verified result"
            );
            Reconciliation {
                artifact: verified.to_string(),
                resolution: Resolution::VerifiedFallback,
            }
        };

        info!(
            kind = %kind,
            selected = selected.len(),
            total = all.len(),
            resolution = ?reconciliation.resolution,
            "Reconciled artifact"
        );
        Ok(reconciliation)
    }
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::default_config()
    }
}

/// Reconcile with the default configuration, returning only the artifact
pub fn reconcile(
    kind: OperationKind,
    original: &str,
    verified: &str,
    selected: &[Correction],
    all: &[Correction],
) -> Result<String, ReconcileError> {
    Reconciler::default()
        .reconcile(kind, original, verified, selected, all)
        .map(|r| r.artifact)
}
