//! Document: the ordered field/value record definitions are written in.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Value;

/// An ordered collection of named field values.
///
/// Field order is significant and preserved: a key pattern `{a: 1, b: -1}`
/// is a different index than `{b: -1, a: 1}`. Lookups are linear; index
/// definitions carry a handful of fields, never thousands.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    entries: SmallVec<[(String, Value); 8]>,
}

impl Document {
    pub fn new() -> Self {
        Self { entries: SmallVec::new() }
    }

    /// Builder-style insert, for literal construction:
    /// `Document::new().with("key", pattern).with("name", "idx1")`
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.push((name.into(), value.into()));
        self
    }

    /// Append a field. Does not replace an earlier field of the same name;
    /// lookups return the first occurrence.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.entries.push((name.into(), value.into()));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First occurrence of `name`, if present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// String field, or `""` when absent or not a string.
    pub fn get_str_or_empty(&self, name: &str) -> &str {
        self.get(name).and_then(Value::as_str).unwrap_or("")
    }

    /// Embedded document field, or an empty document when absent or
    /// not a document.
    pub fn get_document_or_empty(&self, name: &str) -> Document {
        self.get(name)
            .and_then(Value::as_document)
            .cloned()
            .unwrap_or_default()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// The leading entry, if any.
    pub fn first(&self) -> Option<(&str, &Value)> {
        self.entries.first().map(|(n, v)| (n.as_str(), v))
    }

    /// Entry-wise equality with numeric tie-break (`1` == `1.0`),
    /// order-sensitive. See [`Value::same_value`].
    pub fn same_document(&self, other: &Document) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|((an, av), (bn, bv))| an == bn && av.same_value(bv))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        Self {
            entries: pairs
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }
}

// ============================================================================
// Display
// ============================================================================

/// Deterministic `{name: value, ...}` rendering. Total: every value
/// renders, so diagnostics can always print a definition.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 { write!(f, ", ")?; }
            write!(f, "{name}: {value}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let doc = Document::new().with("b", -1).with("a", 1);
        let names: Vec<&str> = doc.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let doc = Document::new().with("v", 1).with("v", 2);
        assert_eq!(doc.get("v"), Some(&Value::Int(1)));
    }

    #[test]
    fn test_missing_fields_degrade() {
        let doc = Document::new();
        assert_eq!(doc.get_str_or_empty("name"), "");
        assert!(doc.get_document_or_empty("key").is_empty());
    }

    #[test]
    fn test_display_is_deterministic() {
        let doc = Document::new()
            .with("key", Document::new().with("_id", 1))
            .with("name", "_id_");
        assert_eq!(doc.to_string(), r#"{key: {_id: 1}, name: "_id_"}"#);
        assert_eq!(doc.to_string(), doc.to_string());
    }

    #[test]
    fn test_same_document_numeric() {
        let a = Document::new().with("_id", 1);
        let b = Document::new().with("_id", 1.0);
        assert!(a.same_document(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_same_document_is_order_sensitive() {
        let a = Document::new().with("a", 1).with("b", 1);
        let b = Document::new().with("b", 1).with("a", 1);
        assert!(!a.same_document(&b));
    }
}
