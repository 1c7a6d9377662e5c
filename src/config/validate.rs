use reqwest::Url;

use crate::error::EditorError;

use super::EditorConfig;

impl EditorConfig {
    pub fn validate(&self) -> Result<(), EditorError> {
        let url = Url::parse(&self.server_url)
            .map_err(|e| EditorError::invalid_config("server_url", e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(EditorError::invalid_config(
                "server_url",
                format!("unsupported scheme `{}`", url.scheme()),
            ));
        }

        if !self.save_path_prefix.starts_with('/') || !self.save_path_prefix.ends_with('/') {
            return Err(EditorError::invalid_config(
                "save_path_prefix",
                "must start and end with `/`",
            ));
        }

        let selectors = [
            ("selectors.form_id", &self.selectors.form_id),
            ("selectors.submit_button_id", &self.selectors.submit_button_id),
            ("selectors.section_class", &self.selectors.section_class),
            ("selectors.field_class", &self.selectors.field_class),
        ];
        for (field, value) in selectors {
            if value.trim().is_empty() {
                return Err(EditorError::invalid_config(field, "must not be empty"));
            }
        }

        Ok(())
    }
}
