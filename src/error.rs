use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Element not found: #{0}")]
    MissingElement(String),

    #[error("Malformed field entry {entry} in section {section}: expected 1 or 2 inputs, found {inputs}")]
    MalformedEntry {
        section: usize,
        entry: usize,
        inputs: usize,
    },

    #[error("No identifier available for the save endpoint")]
    MissingIdentifier,

    #[error("Invalid config field `{field}`: {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Document lock poisoned")]
    LockPoisoned,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl EditorError {
    pub fn invalid_config(field: &str, reason: impl Into<String>) -> Self {
        EditorError::InvalidConfig {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EditorError>;
