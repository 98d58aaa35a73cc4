use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::{Document, Fields};

/// One entry of the recipe list.
///
/// No identifier is retained. Missing fields map to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
}

impl Recipe {
    pub fn new(
        title: impl Into<String>,
        ingredients: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            ingredients: Some(ingredients.into()),
            instructions: Some(instructions.into()),
        }
    }

    pub fn from_document(document: &Document) -> Self {
        Self {
            title: document.get_string("title"),
            ingredients: document.get_string("ingredients"),
            instructions: document.get_string("instructions"),
        }
    }

    /// Field set for seeding a store. Absent fields are left out.
    pub fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        for (key, value) in [
            ("title", &self.title),
            ("ingredients", &self.ingredients),
            ("instructions", &self.instructions),
        ] {
            if let Some(value) = value {
                fields.insert(key.to_string(), Value::String(value.clone()));
            }
        }
        fields
    }
}
