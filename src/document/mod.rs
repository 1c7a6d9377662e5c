//! In-memory document tree standing in for the live page DOM.
//!
//! Only the parts the editor needs are modelled: element tags, ids, marker
//! classes, attributes and text. Queries always walk the tree in document
//! order, which the form collector relies on.

mod builder;
mod query;
mod render_html;
mod set_entry_input;
mod set_input_value;

use std::sync::{Arc, RwLock};

/// The live document, shared between the host (which applies edits) and
/// the submission handler (which reads it on activation).
pub type SharedDocument = Arc<RwLock<Document>>;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// Attributes other than `id` and `class`, in insertion order.
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn into_shared(self) -> SharedDocument {
        Arc::new(RwLock::new(self))
    }
}
