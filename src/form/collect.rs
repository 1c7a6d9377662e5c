use tracing::{debug, warn};

use crate::document::Document;
use crate::error::{EditorError, Result};

use super::{FieldEntry, FormPayload, FormSelectors, MalformedEntryPolicy, Section};

/// Walks the form in document order and builds the submission payload.
#[derive(Debug, Clone, Default)]
pub struct FormCollector {
    pub selectors: FormSelectors,
    pub policy: MalformedEntryPolicy,
}

impl FormCollector {
    pub fn new(selectors: FormSelectors, policy: MalformedEntryPolicy) -> Self {
        Self { selectors, policy }
    }

    pub fn collect(&self, document: &Document) -> Result<FormPayload> {
        let form = document
            .get_element_by_id(&self.selectors.form_id)
            .ok_or_else(|| EditorError::MissingElement(self.selectors.form_id.clone()))?;

        let mut content = Vec::new();
        for (section_index, section_el) in form
            .elements_by_class(&self.selectors.section_class)
            .into_iter()
            .enumerate()
        {
            let mut section = Section::new();

            for (entry_index, entry_el) in section_el
                .elements_by_class(&self.selectors.field_class)
                .into_iter()
                .enumerate()
            {
                match FieldEntry::read(entry_el) {
                    FieldEntry::Field { name, value } => section.insert(name, value),
                    FieldEntry::Malformed { inputs } => match self.policy {
                        MalformedEntryPolicy::Skip => {
                            warn!(
                                section = section_index,
                                entry = entry_index,
                                inputs,
                                "skipping field entry without one or two inputs"
                            );
                        }
                        MalformedEntryPolicy::Reject => {
                            return Err(EditorError::MalformedEntry {
                                section: section_index,
                                entry: entry_index,
                                inputs,
                            });
                        }
                    },
                }
            }

            content.push(section);
        }

        debug!(sections = content.len(), "collected form payload");
        Ok(FormPayload { content })
    }
}
