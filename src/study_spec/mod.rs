//! Study specification snippets (`studyspec.json`) and the edit form built
//! from them.

mod edit_page;
mod load;
mod to_form;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const STUDYSPEC_FILE: &str = "studyspec.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    Reviewed {
        value: Value,
        #[serde(default)]
        approved: Option<bool>,
    },
    Plain(Value),
}

/// One record of a study spec; becomes one form section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecEntry(pub IndexMap<String, SpecValue>);

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudySpec {
    pub entries: Vec<SpecEntry>,
}

impl SpecValue {
    /// Text shown in the value input. Strings are used verbatim, anything
    /// else as its JSON text.
    pub fn display_value(&self) -> String {
        let raw = match self {
            Self::Reviewed { value, .. } => value,
            Self::Plain(value) => value,
        };
        match raw {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    pub fn approved(&self) -> Option<bool> {
        match self {
            Self::Reviewed { approved, .. } => *approved,
            Self::Plain(_) => None,
        }
    }
}
