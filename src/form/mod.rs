mod collect;
mod field_entry;
mod field_value;
mod to_json;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use collect::FormCollector;
pub use field_entry::FieldEntry;

/// Value recorded for one field entry.
///
/// Serialized untagged: a plain JSON string, or `{"value": .., "approved": ..}`
/// when the entry carries an approval input next to the value input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Reviewed { value: String, approved: String },
    Text(String),
}

/// One form section as a flat map keyed by input name, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Section(pub IndexMap<String, FieldValue>);

/// The document POSTed to the save endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormPayload {
    pub content: Vec<Section>,
}

/// Ids and marker classes that locate the form inside the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSelectors {
    pub form_id: String,
    pub submit_button_id: String,
    pub section_class: String,
    pub field_class: String,
}

impl Default for FormSelectors {
    fn default() -> Self {
        Self {
            form_id: "spec_form".to_string(),
            submit_button_id: "submit_spec".to_string(),
            section_class: "spec_section".to_string(),
            field_class: "key".to_string(),
        }
    }
}

/// What to do with a field entry that has neither one nor two inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedEntryPolicy {
    /// Leave the key out and log a warning.
    #[default]
    Skip,
    /// Fail the whole collection.
    Reject,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` under `name`. A repeated name replaces the earlier
    /// value but keeps its original position.
    pub fn insert(&mut self, name: String, value: FieldValue) {
        self.0.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}
