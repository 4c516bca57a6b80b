//! Correction module - the typed model of proposed edits
//!
//! A double-check pass proposes discrete corrections to an artifact. On the
//! wire each correction is a JSON object tagged by `type`; the same `type`
//! string means different things for different operation kinds (`add` adds a
//! topic for a topic extraction, but a paragraph for a dispositivo). The
//! model is therefore split per correction family, each with an
//! `Unrecognized` arm that keeps unknown `type` strings visible to reviewers.
//!
//! Every field except `type` and `reason` is optional. Absence is a normal
//! state and appliers treat it as a no-op.

use crate::topic::TopicRef;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// A proposed correction
#[derive(Debug, Clone, PartialEq)]
pub struct Correction {
    /// What the correction does
    pub action: CorrectionAction,

    /// Why the reviewer model proposed it
    pub reason: String,

    /// Wire fields this model does not interpret, kept verbatim
    pub extra: Map<String, Value>,
}

/// Tagged union of correction families
#[derive(Debug, Clone, PartialEq)]
pub enum CorrectionAction {
    /// Corrections to a topic list
    Topic(TopicAction),

    /// Corrections to an operative part
    Dispositivo(DispositivoAction),

    /// Corrections from a prose review (sentence, proof analysis, quick prompt)
    Review(ReviewAction),

    /// Corrections to a facts comparison
    Facts(FactsAction),
}

/// Corrections to a topic extraction
#[derive(Debug, Clone, PartialEq)]
pub enum TopicAction {
    /// Drop a topic
    Remove {
        /// Topic to drop
        topic: Option<TopicRef>,
    },

    /// Add a topic
    Add {
        /// Topic to add
        topic: Option<TopicRef>,
    },

    /// Fold several topics into one
    Merge {
        /// Topics being merged
        topics: Option<Vec<TopicRef>>,
        /// Title of the merged topic
        into: Option<String>,
    },

    /// Move a topic to another category
    Reclassify {
        /// Topic to move
        topic: Option<TopicRef>,
        /// Current category
        from: Option<String>,
        /// Target category
        to: Option<String>,
    },

    /// Unknown `type`
    Unrecognized(String),
}

/// Corrections to a dispositivo
#[derive(Debug, Clone, PartialEq)]
pub enum DispositivoAction {
    /// Add a provision
    Add {
        /// Provision text
        item: Option<String>,
    },

    /// Rewrite a provision
    Modify {
        /// Provision text
        item: Option<String>,
        /// Proposed wording
        suggestion: Option<String>,
    },

    /// Drop a provision
    Remove {
        /// Provision text
        item: Option<String>,
    },

    /// Unknown `type`
    Unrecognized(String),
}

/// Corrections from a prose review
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewAction {
    /// A flagged issue that is not real
    FalsePositive {
        /// The flagged issue
        item: Option<String>,
    },

    /// An issue the first pass did not flag
    Missed {
        /// The missed issue
        item: Option<String>,
    },

    /// A flagged issue whose wording can be better
    Improve {
        /// The flagged issue
        item: Option<String>,
        /// Proposed wording
        suggestion: Option<String>,
    },

    /// Unknown `type`
    Unrecognized(String),
}

/// Corrections to a facts comparison
#[derive(Debug, Clone, PartialEq)]
pub enum FactsAction {
    /// Append a row to the table
    AddRow {
        /// Row object
        row: Option<Value>,
    },

    /// Set one field of a row
    FixRow {
        /// Row key
        tema: Option<String>,
        /// Column to set
        field: Option<String>,
        /// Value to set
        new_value: Option<Value>,
    },

    /// Drop a row
    RemoveRow {
        /// Row key
        tema: Option<String>,
    },

    /// Append a fact to a bucket
    AddFato {
        /// Bucket name (e.g. `fatosIncontroversos`)
        list: Option<String>,
        /// Fact to append
        fato: Option<Value>,
    },

    /// Unknown `type`
    Unrecognized(String),
}

impl Correction {
    /// Create a correction with an empty reason
    pub fn new(action: impl Into<CorrectionAction>) -> Self {
        Self {
            action: action.into(),
            reason: String::new(),
            extra: Map::new(),
        }
    }

    /// Set the reason
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    /// The wire `type` string
    pub fn type_name(&self) -> &str {
        self.action.type_name()
    }

    /// Serialize back to the wire shape: `type`, the typed fields, `reason`,
    /// then every field that was carried verbatim
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("type".to_string(), Value::String(self.type_name().to_string()));
        self.action.write_fields(&mut obj);
        obj.insert("reason".to_string(), Value::String(self.reason.clone()));
        for (key, value) in &self.extra {
            obj.entry(key.clone()).or_insert_with(|| value.clone());
        }
        Value::Object(obj)
    }
}

impl Serialize for Correction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl CorrectionAction {
    /// The wire `type` string
    pub fn type_name(&self) -> &str {
        match self {
            CorrectionAction::Topic(action) => match action {
                TopicAction::Remove { .. } => "remove",
                TopicAction::Add { .. } => "add",
                TopicAction::Merge { .. } => "merge",
                TopicAction::Reclassify { .. } => "reclassify",
                TopicAction::Unrecognized(name) => name.as_str(),
            },
            CorrectionAction::Dispositivo(action) => match action {
                DispositivoAction::Add { .. } => "add",
                DispositivoAction::Modify { .. } => "modify",
                DispositivoAction::Remove { .. } => "remove",
                DispositivoAction::Unrecognized(name) => name.as_str(),
            },
            CorrectionAction::Review(action) => match action {
                ReviewAction::FalsePositive { .. } => "false_positive",
                ReviewAction::Missed { .. } => "missed",
                ReviewAction::Improve { .. } => "improve",
                ReviewAction::Unrecognized(name) => name.as_str(),
            },
            CorrectionAction::Facts(action) => match action {
                FactsAction::AddRow { .. } => "add_row",
                FactsAction::FixRow { .. } => "fix_row",
                FactsAction::RemoveRow { .. } => "remove_row",
                FactsAction::AddFato { .. } => "add_fato",
                FactsAction::Unrecognized(name) => name.as_str(),
            },
        }
    }

    /// Whether the `type` was not recognized for its family
    pub fn is_unrecognized(&self) -> bool {
        matches!(
            self,
            CorrectionAction::Topic(TopicAction::Unrecognized(_))
                | CorrectionAction::Dispositivo(DispositivoAction::Unrecognized(_))
                | CorrectionAction::Review(ReviewAction::Unrecognized(_))
                | CorrectionAction::Facts(FactsAction::Unrecognized(_))
        )
    }

    fn write_fields(&self, obj: &mut Map<String, Value>) {
        match self {
            CorrectionAction::Topic(action) => match action {
                TopicAction::Remove { topic } | TopicAction::Add { topic } => {
                    put(obj, "topic", topic.as_ref().map(TopicRef::to_value));
                }
                TopicAction::Merge { topics, into } => {
                    put(
                        obj,
                        "topics",
                        topics
                            .as_ref()
                            .map(|t| Value::Array(t.iter().map(TopicRef::to_value).collect())),
                    );
                    put_str(obj, "into", into);
                }
                TopicAction::Reclassify { topic, from, to } => {
                    put(obj, "topic", topic.as_ref().map(TopicRef::to_value));
                    put_str(obj, "from", from);
                    put_str(obj, "to", to);
                }
                TopicAction::Unrecognized(_) => {}
            },
            CorrectionAction::Dispositivo(action) => match action {
                DispositivoAction::Add { item } | DispositivoAction::Remove { item } => {
                    put_str(obj, "item", item);
                }
                DispositivoAction::Modify { item, suggestion } => {
                    put_str(obj, "item", item);
                    put_str(obj, "suggestion", suggestion);
                }
                DispositivoAction::Unrecognized(_) => {}
            },
            CorrectionAction::Review(action) => match action {
                ReviewAction::FalsePositive { item } | ReviewAction::Missed { item } => {
                    put_str(obj, "item", item);
                }
                ReviewAction::Improve { item, suggestion } => {
                    put_str(obj, "item", item);
                    put_str(obj, "suggestion", suggestion);
                }
                ReviewAction::Unrecognized(_) => {}
            },
            CorrectionAction::Facts(action) => match action {
                FactsAction::AddRow { row } => put(obj, "row", row.clone()),
                FactsAction::FixRow {
                    tema,
                    field,
                    new_value,
                } => {
                    put_str(obj, "tema", tema);
                    put_str(obj, "field", field);
                    put(obj, "newValue", new_value.clone());
                }
                FactsAction::RemoveRow { tema } => put_str(obj, "tema", tema),
                FactsAction::AddFato { list, fato } => {
                    put_str(obj, "list", list);
                    put(obj, "fato", fato.clone());
                }
                FactsAction::Unrecognized(_) => {}
            },
        }
    }
}

fn put(obj: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        obj.insert(key.to_string(), value);
    }
}

fn put_str(obj: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    put(obj, key, value.clone().map(Value::String));
}

impl From<TopicAction> for CorrectionAction {
    fn from(action: TopicAction) -> Self {
        CorrectionAction::Topic(action)
    }
}

impl From<DispositivoAction> for CorrectionAction {
    fn from(action: DispositivoAction) -> Self {
        CorrectionAction::Dispositivo(action)
    }
}

impl From<ReviewAction> for CorrectionAction {
    fn from(action: ReviewAction) -> Self {
        CorrectionAction::Review(action)
    }
}

impl From<FactsAction> for CorrectionAction {
    fn from(action: FactsAction) -> Self {
        CorrectionAction::Facts(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_same_type_string_across_families() {
        let topic = Correction::new(TopicAction::Add { topic: None });
        let dispositivo = Correction::new(DispositivoAction::Add { item: None });
        assert_eq!(topic.type_name(), "add");
        assert_eq!(dispositivo.type_name(), "add");
        assert_ne!(topic, dispositivo);
    }

    #[test]
    fn test_to_json_field_names() {
        let correction = Correction::new(FactsAction::FixRow {
            tema: Some("Vínculo".to_string()),
            field: Some("status".to_string()),
            new_value: Some(json!("incontroverso")),
        })
        .with_reason("Réu confessa o vínculo");

        assert_eq!(
            correction.to_json(),
            json!({
                "type": "fix_row",
                "tema": "Vínculo",
                "field": "status",
                "newValue": "incontroverso",
                "reason": "Réu confessa o vínculo"
            })
        );
    }

    #[test]
    fn test_to_json_omits_missing_fields() {
        let correction = Correction::new(TopicAction::Merge {
            topics: None,
            into: Some("AB".to_string()),
        });
        assert_eq!(
            correction.to_json(),
            json!({"type": "merge", "into": "AB", "reason": ""})
        );
    }

    #[test]
    fn test_to_json_keeps_extra_fields() {
        let mut correction = Correction::new(ReviewAction::Missed {
            item: Some("Ausência de fundamentação".to_string()),
        });
        correction.extra.insert("severity".to_string(), json!("high"));
        let value = correction.to_json();
        assert_eq!(value["severity"], json!("high"));
        assert_eq!(value["item"], json!("Ausência de fundamentação"));
    }

    #[test]
    fn test_unrecognized_keeps_type() {
        let correction = Correction::new(TopicAction::Unrecognized("split".to_string()));
        assert_eq!(correction.type_name(), "split");
        assert!(correction.action.is_unrecognized());
        assert_eq!(correction.to_json()["type"], json!("split"));
    }

    #[test]
    fn test_serialize_matches_to_json() {
        let correction = Correction::new(DispositivoAction::Modify {
            item: Some("a".to_string()),
            suggestion: Some("b".to_string()),
        });
        assert_eq!(serde_json::to_value(&correction).unwrap(), correction.to_json());
    }
}
