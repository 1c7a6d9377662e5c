use std::cell::Cell;

use crate::error::{EditorError, Result};
use crate::form::FormSelectors;

use super::{Document, Element};

impl Document {
    /// Sets the `value` of the `input_index`-th input of the field entry
    /// keyed `field_key` in the `section_index`-th section.
    ///
    /// An entry is keyed by the name of its first input, the same name the
    /// collector uses for the payload. Index 1 of a reviewed entry is its
    /// approval checkbox, which every entry names `approved`.
    pub fn set_entry_input(
        &mut self,
        selectors: &FormSelectors,
        section_index: usize,
        field_key: &str,
        input_index: usize,
        value: &str,
    ) -> Result<()> {
        let section = self.section_mut(&selectors.form_id, &selectors.section_class, section_index)?;

        let field_class = selectors.field_class.as_str();
        let entry = section
            .find_first_mut(&|e: &Element| {
                e.has_class(field_class)
                    && e.elements_by_tag("input").first().map(|i| i.name()) == Some(field_key)
            })
            .ok_or_else(|| {
                EditorError::MissingElement(format!(".{}[{}] {}", selectors.section_class, section_index, field_key))
            })?;

        let seen = Cell::new(0usize);
        let input = entry
            .find_first_mut(&|e: &Element| {
                if !e.tag.eq_ignore_ascii_case("input") {
                    return false;
                }
                let index = seen.get();
                seen.set(index + 1);
                index == input_index
            })
            .ok_or_else(|| EditorError::MissingElement(format!("{} input[{}]", field_key, input_index)))?;

        input.set_attr("value", value);
        Ok(())
    }
}
