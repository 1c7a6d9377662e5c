use std::cell::Cell;

use crate::error::{EditorError, Result};

use super::{Document, Element, Node};

impl Document {
    /// Simulates a user typing into the form: sets the `value` of the first
    /// input named `input_name` inside the `section_index`-th element
    /// carrying `section_class` under the element `#form_id`.
    pub fn set_input_value(
        &mut self,
        form_id: &str,
        section_class: &str,
        section_index: usize,
        input_name: &str,
        value: &str,
    ) -> Result<()> {
        let section = self.section_mut(form_id, section_class, section_index)?;

        let input = section
            .find_first_mut(&|e: &Element| e.tag == "input" && e.name() == input_name)
            .ok_or_else(|| EditorError::MissingElement(format!("input[name={}]", input_name)))?;

        input.set_attr("value", value);
        Ok(())
    }

    /// The `section_index`-th element carrying `section_class` under `#form_id`.
    pub(super) fn section_mut(
        &mut self,
        form_id: &str,
        section_class: &str,
        section_index: usize,
    ) -> Result<&mut Element> {
        let form = self
            .get_element_by_id_mut(form_id)
            .ok_or_else(|| EditorError::MissingElement(form_id.to_string()))?;

        let seen = Cell::new(0usize);
        let is_target_section = |e: &Element| {
            if !e.has_class(section_class) {
                return false;
            }
            let index = seen.get();
            seen.set(index + 1);
            index == section_index
        };

        // The form itself never counts as one of its own sections.
        form.children
            .iter_mut()
            .find_map(|child| match child {
                Node::Element(e) => e.find_first_mut(&is_target_section),
                Node::Text(_) => None,
            })
            .ok_or_else(|| {
                EditorError::MissingElement(format!("{} .{}[{}]", form_id, section_class, section_index))
            })
    }
}
