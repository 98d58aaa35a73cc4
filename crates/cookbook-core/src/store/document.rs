//! Document model shared by every store backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field set of a single document, kept in insertion order.
pub type Fields = serde_json::Map<String, Value>;

/// A stored document: its key within a collection plus its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Key of the document within its collection.
    pub id: String,
    /// Stored fields.
    pub fields: Fields,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Fields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Reads a field as text.
    ///
    /// Missing fields and fields holding a non-string value both read as `None`.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// Owned variant of [`Document::get_str`].
    pub fn get_string(&self, field: &str) -> Option<String> {
        self.get_str(field).map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            _ => Fields::new(),
        }
    }

    #[test]
    fn test_get_str_reads_text_fields() {
        let doc = Document::new("u1", fields(json!({ "name": "Ada" })));
        assert_eq!(doc.get_str("name"), Some("Ada"));
    }

    #[test]
    fn test_get_str_missing_or_non_text_is_none() {
        let doc = Document::new("u1", fields(json!({ "age": 36, "tags": ["a"] })));
        assert_eq!(doc.get_str("name"), None);
        assert_eq!(doc.get_str("age"), None);
        assert_eq!(doc.get_string("tags"), None);
    }
}
