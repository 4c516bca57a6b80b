//! Topic module - entries of a topic extraction artifact

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Category given to topics when none can be inferred
pub const DEFAULT_CATEGORY: &str = "MÉRITO";

/// One topic of a decision, as written by the topic extraction step
///
/// A topic is kept as the object the drafting UI wrote. Only `title` and
/// `category` are read, and only when they are strings; every other field,
/// explicit nulls included, is written back untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Topic(Map<String, Value>);

impl Topic {
    /// Create a topic with a title and category
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("title".to_string(), Value::String(title.into()));
        fields.insert("category".to_string(), Value::String(category.into()));
        Self(fields)
    }

    /// Wrap an existing topic object
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Topic title, the identity used by corrections
    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }

    /// Category (e.g. PRELIMINAR, MÉRITO)
    pub fn category(&self) -> Option<&str> {
        self.0.get("category").and_then(Value::as_str)
    }

    /// Whether this topic's title is exactly `name`
    pub fn has_title(&self, name: &str) -> bool {
        self.title() == Some(name)
    }

    /// Every field of the topic object
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// The topic as a JSON object
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

/// Title of a topic list entry, if it is an object with a string `title`
pub fn topic_title(entry: &Value) -> Option<&str> {
    entry.get("title").and_then(Value::as_str)
}

/// Reference to a topic inside a correction
///
/// Upstream reviews name topics either by bare title or by a full
/// `{title, category}` object.
#[derive(Debug, Clone, PartialEq)]
pub enum TopicRef {
    /// Bare topic title
    Name(String),

    /// Full topic object
    Entry(Topic),
}

impl TopicRef {
    /// Build a reference from a JSON value; `None` for any other shape
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(name) => Some(TopicRef::Name(name.clone())),
            Value::Object(fields) => Some(TopicRef::Entry(Topic::from_fields(fields.clone()))),
            _ => None,
        }
    }

    /// Serialize back to the wire shape
    pub fn to_value(&self) -> Value {
        match self {
            TopicRef::Name(name) => Value::String(name.clone()),
            TopicRef::Entry(topic) => topic.to_value(),
        }
    }

    /// Resolve the topic title this reference points at
    ///
    /// Empty titles do not resolve.
    pub fn name(&self) -> Option<&str> {
        let name = match self {
            TopicRef::Name(name) => Some(name.as_str()),
            TopicRef::Entry(topic) => topic.title(),
        };
        name.filter(|n| !n.is_empty())
    }

    /// The full topic object, when the reference carries one with a title
    pub fn entry(&self) -> Option<&Topic> {
        match self {
            TopicRef::Entry(topic) if topic.title().is_some_and(|t| !t.is_empty()) => Some(topic),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_topic_keeps_every_field() {
        let raw = json!({"category": null, "title": "Danos morais", "relatorio": "..."});
        let topic: Topic = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(topic.title(), Some("Danos morais"));
        assert_eq!(topic.category(), None);
        assert_eq!(topic.fields().get("relatorio"), Some(&json!("...")));
        assert_eq!(serde_json::to_value(&topic).unwrap(), raw);
        assert_eq!(
            serde_json::to_string(&topic).unwrap(),
            r#"{"category":null,"title":"Danos morais","relatorio":"..."}"#
        );
    }

    #[test]
    fn test_non_string_title_is_not_a_title() {
        let topic: Topic = serde_json::from_value(json!({"title": 2, "category": "M"})).unwrap();
        assert_eq!(topic.title(), None);
        assert!(!topic.has_title("2"));
        assert_eq!(topic_title(&json!({"title": 2})), None);
        assert_eq!(topic_title(&json!("Juros")), None);
        assert_eq!(topic_title(&json!({"title": "Juros"})), Some("Juros"));
    }

    #[test]
    fn test_ref_from_string() {
        let r = TopicRef::from_value(&json!("Prescrição")).unwrap();
        assert_eq!(r.name(), Some("Prescrição"));
        assert!(r.entry().is_none());
    }

    #[test]
    fn test_ref_from_object() {
        let r = TopicRef::from_value(&json!({"title": "Juros", "category": "MÉRITO"})).unwrap();
        assert_eq!(r.name(), Some("Juros"));
        assert_eq!(r.entry().and_then(Topic::category), Some("MÉRITO"));
    }

    #[test]
    fn test_ref_empty_name_does_not_resolve() {
        assert_eq!(TopicRef::Name(String::new()).name(), None);
        let r = TopicRef::from_value(&json!({"category": "MÉRITO"})).unwrap();
        assert_eq!(r.name(), None);
        assert!(r.entry().is_none());
    }

    #[test]
    fn test_ref_rejects_other_shapes() {
        assert!(TopicRef::from_value(&json!(42)).is_none());
        assert!(TopicRef::from_value(&json!(null)).is_none());
        assert!(TopicRef::from_value(&json!(["a"])).is_none());
    }
}
