use super::FormPayload;

impl FormPayload {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::form::{FieldValue, FormPayload, Section};

    #[test]
    fn test_wire_shape() {
        let mut section = Section::new();
        section.insert("subject".to_string(), FieldValue::text("01"));
        section.insert("run".to_string(), FieldValue::reviewed("2", "true"));
        let payload = FormPayload { content: vec![section, Section::new()] };

        assert_eq!(
            payload.to_json().unwrap(),
            r#"{"content":[{"subject":"01","run":{"value":"2","approved":"true"}},{}]}"#
        );
    }

    #[test]
    fn test_repeated_name_keeps_first_position() {
        let mut section = Section::new();
        section.insert("a".to_string(), FieldValue::text("1"));
        section.insert("b".to_string(), FieldValue::text("2"));
        section.insert("a".to_string(), FieldValue::text("3"));

        let payload = FormPayload { content: vec![section] };
        assert_eq!(payload.to_json().unwrap(), r#"{"content":[{"a":"3","b":"2"}]}"#);
    }
}
