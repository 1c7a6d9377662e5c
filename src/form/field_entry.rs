use crate::document::Element;

use super::FieldValue;

/// A field-entry group as read from the document.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEntry {
    Field { name: String, value: FieldValue },
    /// Input count other than 1 or 2.
    Malformed { inputs: usize },
}

impl FieldEntry {
    pub fn read(entry: &Element) -> Self {
        let inputs = entry.elements_by_tag("input");
        match inputs.as_slice() {
            [only] => FieldEntry::Field {
                name: only.name().to_string(),
                value: FieldValue::text(only.value()),
            },
            [first, second] => FieldEntry::Field {
                name: first.name().to_string(),
                value: FieldValue::reviewed(first.value(), second.value()),
            },
            other => FieldEntry::Malformed { inputs: other.len() },
        }
    }
}
