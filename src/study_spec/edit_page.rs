use crate::document::{Document, Element};
use crate::form::FormSelectors;

use super::StudySpec;

impl StudySpec {
    /// Full edit page: the study spec form followed by the save button.
    pub fn edit_page(&self, selectors: &FormSelectors) -> Document {
        let head = Element::new("head")
            .with_child(Element::new("meta").with_attr("charset", "utf-8"))
            .with_child(
                Element::new("link")
                    .with_attr("href", "/style.css")
                    .with_attr("rel", "stylesheet"),
            );

        let body = Element::new("body")
            .with_child(self.to_form(selectors))
            .with_child(
                Element::new("button")
                    .with_id(&selectors.submit_button_id)
                    .with_text("Save"),
            );

        Document::new(Element::new("html").with_child(head).with_child(body))
    }
}
