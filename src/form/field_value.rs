use super::FieldValue;

impl FieldValue {
    pub fn text(value: &str) -> Self {
        Self::Text(value.to_string())
    }

    pub fn reviewed(value: &str, approved: &str) -> Self {
        Self::Reviewed {
            value: value.to_string(),
            approved: approved.to_string(),
        }
    }
}
