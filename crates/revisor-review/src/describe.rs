//! Human-readable descriptions of corrections
//!
//! Descriptions never fail: missing fields render as empty quotes or a
//! placeholder, and a correction whose family does not belong to the kind
//! under review falls back to `Correction: <type>`.

use revisor_domain::facts::{FATOS_INCONTROVERSOS, is_truthy};
use revisor_domain::{
    Correction, CorrectionAction, DispositivoAction, FactsAction, OperationKind, ReviewAction,
    TopicAction, TopicRef, DEFAULT_CATEGORY,
};
use serde_json::Value;

/// Display labels of the facts table columns a `fix_row` may target
const FACT_FIELD_LABELS: &[(&str, &str)] = &[
    ("status", "status"),
    ("alegacaoAutor", "plaintiff's allegation"),
    ("alegacaoReu", "defendant's allegation"),
    ("relevancia", "relevance"),
    ("provas", "evidence"),
    ("observacao", "note"),
];

const TOPIC_PLACEHOLDER: &str = "topic";
const NEW_ROW_PLACEHOLDER: &str = "New row";
const ROW_PLACEHOLDER: &str = "row";

/// Describe a correction for the reviewer
pub fn describe(kind: OperationKind, correction: &Correction) -> String {
    match (&correction.action, kind) {
        (CorrectionAction::Topic(action), OperationKind::TopicExtraction) => describe_topic(action),
        (CorrectionAction::Dispositivo(action), OperationKind::Dispositivo) => {
            describe_dispositivo(action)
        }
        (CorrectionAction::Review(action), kind) if kind.is_prose_review() => {
            describe_review(action)
        }
        (CorrectionAction::Facts(action), OperationKind::FactsComparison) => describe_facts(action),
        _ => fallback(correction.type_name()),
    }
}

/// Display label for a facts table column
pub fn field_label(field: &str) -> Option<&'static str> {
    FACT_FIELD_LABELS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, label)| *label)
}

fn fallback(type_name: &str) -> String {
    format!("Correction: {}", type_name)
}

fn topic_name(topic: Option<&TopicRef>) -> &str {
    topic.and_then(TopicRef::name).unwrap_or(TOPIC_PLACEHOLDER)
}

fn describe_topic(action: &TopicAction) -> String {
    match action {
        TopicAction::Remove { topic } => {
            format!("Remove topic \"{}\"", topic_name(topic.as_ref()))
        }
        TopicAction::Add { topic } => match topic.as_ref().and_then(TopicRef::entry) {
            Some(entry) => format!(
                "Add topic \"{}\" in {}",
                entry.title().unwrap_or_default(),
                entry
                    .category()
                    .filter(|c| !c.is_empty())
                    .unwrap_or(DEFAULT_CATEGORY)
            ),
            None => "Add new topic".to_string(),
        },
        TopicAction::Merge { topics, into } => {
            let names: Vec<String> = topics
                .iter()
                .flatten()
                .map(|t| format!("\"{}\"", topic_name(Some(t))))
                .collect();
            format!(
                "Merge {} → \"{}\"",
                names.join(" + "),
                into.as_deref().unwrap_or_default()
            )
        }
        TopicAction::Reclassify { topic, from, to } => format!(
            "Reclassify \"{}\" from {} to {}",
            topic_name(topic.as_ref()),
            from.as_deref().unwrap_or("?"),
            to.as_deref().unwrap_or("?")
        ),
        TopicAction::Unrecognized(type_name) => fallback(type_name),
    }
}

fn describe_dispositivo(action: &DispositivoAction) -> String {
    match action {
        DispositivoAction::Add { item } => format!("Add: \"{}\"", text(item)),
        DispositivoAction::Modify { item, suggestion } => {
            format!("Modify: \"{}\" → \"{}\"", text(item), text(suggestion))
        }
        DispositivoAction::Remove { item } => format!("Remove: \"{}\"", text(item)),
        DispositivoAction::Unrecognized(type_name) => fallback(type_name),
    }
}

fn describe_review(action: &ReviewAction) -> String {
    match action {
        ReviewAction::FalsePositive { item } => {
            format!("False positive: \"{}\" is not a real issue", text(item))
        }
        ReviewAction::Missed { item } => format!("Missed issue: \"{}\"", text(item)),
        ReviewAction::Improve { item, suggestion } => {
            format!("Improve: \"{}\" → \"{}\"", text(item), text(suggestion))
        }
        ReviewAction::Unrecognized(type_name) => fallback(type_name),
    }
}

fn describe_facts(action: &FactsAction) -> String {
    match action {
        FactsAction::AddRow { row } => {
            let tema = row
                .as_ref()
                .and_then(|r| r.get("tema"))
                .and_then(Value::as_str)
                .filter(|t| !t.is_empty())
                .unwrap_or(NEW_ROW_PLACEHOLDER);
            format!("Add row: \"{}\"", tema)
        }
        FactsAction::FixRow {
            tema,
            field,
            new_value,
        } => {
            let tema = tema
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or(ROW_PLACEHOLDER);
            let label = field.as_deref().and_then(field_label);
            match (label, new_value.as_ref().filter(|v| is_truthy(v))) {
                (Some(label), Some(value)) => {
                    format!("Alter {} in \"{}\": \"{}\"", label, tema, value_text(value))
                }
                _ => format!("Fix \"{}\" - see reason for details", tema),
            }
        }
        FactsAction::RemoveRow { tema } => format!("Remove row: \"{}\"", text(tema)),
        FactsAction::AddFato { list, fato } => {
            let bucket = if list.as_deref() == Some(FATOS_INCONTROVERSOS) {
                "incontroverso"
            } else {
                "controverso"
            };
            let fato = fato.as_ref().map(value_text).unwrap_or_default();
            format!("Add {} fact: \"{}\"", bucket, fato)
        }
        FactsAction::Unrecognized(type_name) => fallback(type_name),
    }
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
