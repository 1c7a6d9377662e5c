use crate::document::Element;
use crate::form::FormSelectors;

use super::StudySpec;

impl StudySpec {
    /// Builds the form container: one section per entry and one field entry
    /// per key. Keys with an approval flag get a checkbox after the value
    /// input, whose `value` mirrors the flag.
    pub fn to_form(&self, selectors: &FormSelectors) -> Element {
        let sections = self.entries.iter().map(|entry| {
            let fields = entry.0.iter().map(|(key, spec_value)| {
                let mut field = Element::new("div")
                    .with_class(&selectors.field_class)
                    .with_text(&format!("{}: ", key))
                    .with_child(Element::input("text", key, &spec_value.display_value()));

                if let Some(approved) = spec_value.approved() {
                    let mut checkbox =
                        Element::input("checkbox", "approved", if approved { "true" } else { "false" });
                    if approved {
                        checkbox.set_attr("checked", "");
                    }
                    field = field.with_child(checkbox);
                }

                field.with_child(Element::new("br"))
            });

            Element::new("div")
                .with_class(&selectors.section_class)
                .with_children(fields)
        });

        Element::new("div")
            .with_id(&selectors.form_id)
            .with_children(sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::form::{FieldValue, FormCollector};

    #[test]
    fn test_rendered_form_collects_back() {
        let spec: StudySpec = serde_json::from_str(
            r#"[
                {"subject": "01", "session": {"value": "baseline", "approved": false}},
                {"run": {"value": 2, "approved": true}}
            ]"#,
        )
        .unwrap();

        let form = spec.to_form(&FormSelectors::default());
        let payload = FormCollector::default()
            .collect(&Document::new(Element::new("body").with_child(form)))
            .unwrap();

        assert_eq!(payload.content.len(), 2);
        assert_eq!(payload.content[0].get("subject"), Some(&FieldValue::text("01")));
        assert_eq!(
            payload.content[0].get("session"),
            Some(&FieldValue::reviewed("baseline", "false"))
        );
        assert_eq!(payload.content[1].get("run"), Some(&FieldValue::reviewed("2", "true")));
    }

    #[test]
    fn test_checked_attribute_follows_approval() {
        let spec: StudySpec =
            serde_json::from_str(r#"[{"a": {"value": "x", "approved": true}, "b": {"value": "y", "approved": false}}]"#)
                .unwrap();
        let form = spec.to_form(&FormSelectors::default());
        let boxes: Vec<_> = form
            .elements_by_tag("input")
            .into_iter()
            .filter(|i| i.attr("type") == Some("checkbox"))
            .map(|i| i.attr("checked").is_some())
            .collect();
        assert_eq!(boxes, vec![true, false]);
    }
}
