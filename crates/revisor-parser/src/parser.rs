//! Parse double-check LLM output into typed corrections

use crate::error::ParseError;
use crate::types::{DoubleCheckResponse, SkippedCorrection};
use revisor_domain::{
    Correction, CorrectionAction, DispositivoAction, FactsAction, OperationKind, ReviewAction,
    TopicAction, TopicRef,
};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Parse a full double-check response
///
/// Accepts either an object (`verifiedResult`, `corrections`, `summary`) or a
/// bare array of corrections. `verifiedResult` may be a string or inline JSON;
/// inline JSON is serialized back to compact text.
pub fn parse_double_check_response(
    kind: OperationKind,
    response: &str,
) -> Result<DoubleCheckResponse, ParseError> {
    let json_str = extract_json(response)?;
    let json: Value = serde_json::from_str(&json_str)?;

    let (verified, summary, entries) = match &json {
        Value::Array(entries) => (None, None, entries.as_slice()),
        Value::Object(obj) => {
            let verified = match obj.get("verifiedResult") {
                None | Some(Value::Null) => None,
                Some(Value::String(text)) => Some(text.clone()),
                Some(inline) => Some(serde_json::to_string(inline)?),
            };
            let summary = obj.get("summary").and_then(Value::as_str).map(str::to_string);
            let entries = match obj.get("corrections") {
                Some(Value::Array(entries)) => entries.as_slice(),
                Some(_) => {
                    return Err(ParseError::InvalidFormat(
                        "'corrections' is not an array".to_string(),
                    ))
                }
                None => return Err(ParseError::MissingField("corrections".to_string())),
            };
            (verified, summary, entries)
        }
        _ => {
            return Err(ParseError::InvalidFormat(
                "Expected a JSON object or array".to_string(),
            ))
        }
    };

    let (corrections, skipped) = parse_entries(kind, entries);

    debug!(
        "Parsed {} {} corrections ({} skipped)",
        corrections.len(),
        kind,
        skipped.len()
    );

    Ok(DoubleCheckResponse {
        verified,
        corrections,
        summary,
        skipped,
    })
}

/// Parse only the correction list of a double-check response
pub fn parse_corrections(
    kind: OperationKind,
    response: &str,
) -> Result<Vec<Correction>, ParseError> {
    parse_double_check_response(kind, response).map(|r| r.corrections)
}

fn parse_entries(
    kind: OperationKind,
    entries: &[Value],
) -> (Vec<Correction>, Vec<SkippedCorrection>) {
    let mut corrections = Vec::new();
    let mut skipped = Vec::new();
    for (idx, entry) in entries.iter().enumerate() {
        match parse_correction(kind, entry) {
            Ok(correction) => corrections.push(correction),
            Err(reason) => {
                warn!("Skipping correction {}: {}", idx, reason);
                skipped.push(SkippedCorrection { index: idx, reason });
            }
        }
    }
    (corrections, skipped)
}

/// Extract JSON from a response, handling markdown code fences
fn extract_json(response: &str) -> Result<String, ParseError> {
    let trimmed = response.trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return Ok(trimmed.to_string());
    }

    let Some(start) = trimmed.find("```") else {
        // Already raw JSON
        return Ok(trimmed.to_string());
    };

    // Skip the fence line (```json or ```), stop at the closing fence
    let after_fence = &trimmed[start + 3..];
    let body_start = after_fence.find('\n').map(|i| i + 1).ok_or_else(|| {
        ParseError::InvalidFormat("Empty code block".to_string())
    })?;
    let body = &after_fence[body_start..];
    let body = match body.find("```") {
        Some(end) => &body[..end],
        None => body,
    };
    Ok(body.trim().to_string())
}

/// Build a correction from one JSON entry
///
/// The entry must be an object with a string `type`. Named fields whose value
/// has an unexpected shape are not interpreted; they stay in
/// `Correction::extra` together with any field the model does not name.
pub fn parse_correction(kind: OperationKind, json: &Value) -> Result<Correction, String> {
    let obj = json
        .as_object()
        .ok_or_else(|| "Correction is not a JSON object".to_string())?;

    let type_name = obj
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| "Missing or invalid 'type'".to_string())?
        .to_string();

    let reason = obj
        .get("reason")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let mut rest = obj.clone();
    rest.shift_remove("type");
    rest.shift_remove("reason");

    let action = match kind {
        OperationKind::TopicExtraction => topic_action(type_name, &mut rest),
        OperationKind::Dispositivo => dispositivo_action(type_name, &mut rest),
        OperationKind::FactsComparison => facts_action(type_name, &mut rest),
        OperationKind::SentenceReview
        | OperationKind::ProofAnalysis
        | OperationKind::QuickPrompt => review_action(type_name, &mut rest),
    };

    Ok(Correction {
        action,
        reason,
        extra: rest,
    })
}

fn topic_action(type_name: String, rest: &mut Map<String, Value>) -> CorrectionAction {
    let action = match type_name.as_str() {
        "remove" => TopicAction::Remove {
            topic: take_topic(rest, "topic"),
        },
        "add" => TopicAction::Add {
            topic: take_topic(rest, "topic"),
        },
        "merge" => TopicAction::Merge {
            topics: take_topics(rest, "topics"),
            into: take_str(rest, "into"),
        },
        "reclassify" => TopicAction::Reclassify {
            topic: take_topic(rest, "topic"),
            from: take_str(rest, "from"),
            to: take_str(rest, "to"),
        },
        _ => TopicAction::Unrecognized(type_name),
    };
    action.into()
}

fn dispositivo_action(type_name: String, rest: &mut Map<String, Value>) -> CorrectionAction {
    let action = match type_name.as_str() {
        "add" => DispositivoAction::Add {
            item: take_str(rest, "item"),
        },
        "modify" => DispositivoAction::Modify {
            item: take_str(rest, "item"),
            suggestion: take_str(rest, "suggestion"),
        },
        "remove" => DispositivoAction::Remove {
            item: take_str(rest, "item"),
        },
        _ => DispositivoAction::Unrecognized(type_name),
    };
    action.into()
}

fn review_action(type_name: String, rest: &mut Map<String, Value>) -> CorrectionAction {
    let action = match type_name.as_str() {
        "false_positive" => ReviewAction::FalsePositive {
            item: take_str(rest, "item"),
        },
        "missed" => ReviewAction::Missed {
            item: take_str(rest, "item"),
        },
        "improve" => ReviewAction::Improve {
            item: take_str(rest, "item"),
            suggestion: take_str(rest, "suggestion"),
        },
        _ => ReviewAction::Unrecognized(type_name),
    };
    action.into()
}

fn facts_action(type_name: String, rest: &mut Map<String, Value>) -> CorrectionAction {
    let action = match type_name.as_str() {
        "add_row" => FactsAction::AddRow {
            row: take_value(rest, "row"),
        },
        "fix_row" => FactsAction::FixRow {
            tema: take_str(rest, "tema"),
            field: take_str(rest, "field"),
            new_value: take_value(rest, "newValue"),
        },
        "remove_row" => FactsAction::RemoveRow {
            tema: take_str(rest, "tema"),
        },
        "add_fato" => FactsAction::AddFato {
            list: take_str(rest, "list"),
            fato: take_value(rest, "fato"),
        },
        _ => FactsAction::Unrecognized(type_name),
    };
    action.into()
}

fn take_str(rest: &mut Map<String, Value>, key: &str) -> Option<String> {
    match rest.get(key) {
        Some(Value::String(_)) => rest.shift_remove(key).and_then(|v| match v {
            Value::String(s) => Some(s),
            _ => None,
        }),
        _ => None,
    }
}

fn take_value(rest: &mut Map<String, Value>, key: &str) -> Option<Value> {
    match rest.get(key) {
        None | Some(Value::Null) => None,
        Some(_) => rest.shift_remove(key),
    }
}

fn take_topic(rest: &mut Map<String, Value>, key: &str) -> Option<TopicRef> {
    let topic = rest.get(key).and_then(TopicRef::from_value)?;
    rest.shift_remove(key);
    Some(topic)
}

fn take_topics(rest: &mut Map<String, Value>, key: &str) -> Option<Vec<TopicRef>> {
    let topics = rest
        .get(key)?
        .as_array()?
        .iter()
        .map(TopicRef::from_value)
        .collect::<Option<Vec<_>>>()?;
    rest.shift_remove(key);
    Some(topics)
}
