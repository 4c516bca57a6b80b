//! Topic list applier

use super::write_artifact;
use crate::ReconcileError;
use revisor_domain::traits::PatchApplier;
use revisor_domain::{
    topic_title, Correction, CorrectionAction, OperationKind, Topic, TopicAction, TopicRef,
};
use serde_json::Value;
use tracing::debug;

/// Applies topic corrections to a topic extraction artifact (a JSON array of
/// topics)
#[derive(Debug, Clone)]
pub struct TopicApplier {
    default_category: String,
    pretty: bool,
}

impl TopicApplier {
    /// Create an applier using `default_category` for merged topics whose
    /// sources are all gone
    pub fn new(default_category: impl Into<String>, pretty: bool) -> Self {
        Self {
            default_category: default_category.into(),
            pretty,
        }
    }

    fn apply_one(&self, topics: &mut Vec<Value>, correction: &Correction) {
        let CorrectionAction::Topic(action) = &correction.action else {
            debug!(
                correction_type = correction.type_name(),
                "Skipping correction from another family"
            );
            return;
        };

        match action {
            TopicAction::Remove { topic } => {
                let Some(name) = topic.as_ref().and_then(TopicRef::name) else {
                    debug!("Skipping remove without a topic name");
                    return;
                };
                let before = topics.len();
                topics.retain(|t| topic_title(t) != Some(name));
                debug!(topic = name, removed = before - topics.len(), "Removed topic");
            }
            TopicAction::Add { topic } => match topic.as_ref().and_then(TopicRef::entry) {
                Some(entry) => {
                    debug!(topic = entry.title(), "Added topic");
                    topics.push(entry.to_value());
                }
                None => debug!("Skipping add without a titled topic object"),
            },
            TopicAction::Merge {
                topics: sources,
                into,
            } => {
                let (Some(sources), Some(into)) =
                    (sources, into.as_deref().filter(|s| !s.is_empty()))
                else {
                    debug!("Skipping merge without topics or target");
                    return;
                };
                let names: Vec<&str> = sources.iter().filter_map(TopicRef::name).collect();
                let is_source =
                    |t: &Value| topic_title(t).is_some_and(|title| names.contains(&title));
                let category = topics
                    .iter()
                    .find(|t| is_source(*t))
                    .and_then(|t| t.get("category"))
                    .and_then(Value::as_str)
                    .unwrap_or(self.default_category.as_str())
                    .to_string();
                topics.retain(|t| !is_source(t));
                debug!(into, category = %category, "Merged topics");
                topics.push(Topic::new(into, category).to_value());
            }
            TopicAction::Reclassify { topic, to, .. } => {
                let (Some(name), Some(to)) = (
                    topic.as_ref().and_then(TopicRef::name),
                    to.as_deref().filter(|s| !s.is_empty()),
                ) else {
                    debug!("Skipping reclassify without topic or target category");
                    return;
                };
                let entry = topics
                    .iter_mut()
                    .filter(|t| topic_title(t) == Some(name))
                    .find_map(Value::as_object_mut);
                match entry {
                    Some(entry) => {
                        entry.insert("category".to_string(), Value::String(to.to_string()));
                        debug!(topic = name, to, "Reclassified topic");
                    }
                    None => debug!(topic = name, "Skipping reclassify of unknown topic"),
                }
            }
            TopicAction::Unrecognized(name) => {
                debug!(correction_type = %name, "Skipping unrecognized topic correction");
            }
        }
    }
}

impl PatchApplier for TopicApplier {
    type Error = ReconcileError;

    fn kind(&self) -> OperationKind {
        OperationKind::TopicExtraction
    }

    fn apply(&self, artifact: &str, corrections: &[Correction]) -> Result<String, ReconcileError> {
        let mut topics: Vec<Value> = serde_json::from_str(artifact)?;
        for correction in corrections {
            self.apply_one(&mut topics, correction);
        }
        write_artifact(&topics, self.pretty)
    }
}
