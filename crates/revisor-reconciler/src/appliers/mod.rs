//! Structural patch appliers
//!
//! Only the topic list and the facts comparison have a structure the engine
//! can patch. Every other kind is opaque prose.

mod facts;
mod topics;

pub use facts::FactsApplier;
pub use topics::TopicApplier;

use crate::{ReconcileConfig, ReconcileError};
use revisor_domain::traits::PatchApplier;
use revisor_domain::OperationKind;
use serde::Serialize;

/// Boxed applier as handed out by [`applier_for`]
pub type BoxedApplier = Box<dyn PatchApplier<Error = ReconcileError> + Send + Sync>;

/// The applier for `kind`, if the kind has a patchable structure
pub fn applier_for(kind: OperationKind, config: &ReconcileConfig) -> Option<BoxedApplier> {
    match kind {
        OperationKind::TopicExtraction => Some(Box::new(TopicApplier::new(
            config.default_category.clone(),
            config.pretty_output,
        ))),
        OperationKind::FactsComparison => Some(Box::new(FactsApplier::new(config.pretty_output))),
        _ => None,
    }
}

pub(crate) fn write_artifact<T: Serialize>(
    artifact: &T,
    pretty: bool,
) -> Result<String, ReconcileError> {
    let text = if pretty {
        serde_json::to_string_pretty(artifact)?
    } else {
        serde_json::to_string(artifact)?
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_structured_kinds_have_appliers() {
        let config = ReconcileConfig::default();
        for kind in OperationKind::ALL {
            let applier = applier_for(kind, &config);
            assert_eq!(applier.is_some(), kind.has_structural_applier(), "{}", kind);
            if let Some(applier) = applier {
                assert_eq!(applier.kind(), kind);
            }
        }
    }
}
