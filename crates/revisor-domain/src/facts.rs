//! Facts comparison module - the table of alleged facts and its fact buckets

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key of the comparison table
pub const TABELA: &str = "tabela";

/// Bucket holding facts both parties agree on
pub const FATOS_INCONTROVERSOS: &str = "fatosIncontroversos";

/// Bucket holding facts the parties dispute
pub const FATOS_CONTROVERSOS: &str = "fatosControversos";

/// Artifact of a facts comparison
///
/// `tabela` is the comparison table, one row per alleged fact keyed by its
/// `tema`. Every other top-level key is a named bucket (usually a list of
/// facts). The artifact is held as the object the drafting UI wrote, so keys
/// keep their order and untouched values are written back as they came.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactsComparison(Map<String, Value>);

impl FactsComparison {
    /// Wrap an existing artifact object
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Every top-level field
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Comparison rows, if `tabela` is a list
    pub fn tabela(&self) -> Option<&Vec<Value>> {
        self.0.get(TABELA).and_then(Value::as_array)
    }

    fn tabela_mut(&mut self) -> Option<&mut Vec<Value>> {
        self.0.get_mut(TABELA).and_then(Value::as_array_mut)
    }

    /// First row whose `tema` equals `tema`
    pub fn row_mut(&mut self, tema: &str) -> Option<&mut Map<String, Value>> {
        self.tabela_mut()?
            .iter_mut()
            .filter_map(Value::as_object_mut)
            .find(|row| row_tema(row) == Some(tema))
    }

    /// Append a row; returns `false` when there is no table to append to
    pub fn push_row(&mut self, row: Value) -> bool {
        match self.tabela_mut() {
            Some(rows) => {
                rows.push(row);
                true
            }
            None => false,
        }
    }

    /// Remove every row whose `tema` equals `tema`, returning how many went
    pub fn remove_rows(&mut self, tema: &str) -> usize {
        let Some(rows) = self.tabela_mut() else {
            return 0;
        };
        let before = rows.len();
        rows.retain(|row| row.as_object().and_then(row_tema) != Some(tema));
        before - rows.len()
    }

    /// Append a fact to the named bucket, creating the bucket when absent
    ///
    /// Returns `false` when the key exists but does not hold a list.
    pub fn push_fact(&mut self, list: &str, fato: Value) -> bool {
        let bucket = self
            .0
            .entry(list.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        match bucket.as_array_mut() {
            Some(facts) => {
                facts.push(fato);
                true
            }
            None => false,
        }
    }

    /// Facts stored in a bucket, if it exists and is a list
    pub fn bucket(&self, list: &str) -> Option<&Vec<Value>> {
        self.0.get(list).and_then(Value::as_array)
    }
}

/// The `tema` of a table row, if it is a string
pub fn row_tema(row: &Map<String, Value>) -> Option<&str> {
    row.get("tema").and_then(Value::as_str)
}

/// Truthiness as the drafting UI understands it
///
/// `null`, `false`, `0` and `""` are falsy; everything else, including empty
/// arrays and objects, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
