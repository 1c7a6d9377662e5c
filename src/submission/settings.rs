use crate::config::EditorConfig;
use crate::error::EditorError;

#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionSettings {
    pub submit_button_id: String,
    pub save_path_prefix: String,
    pub require_identifier: bool,
    pub prevent_overlapping_submissions: bool,
}

impl Default for SubmissionSettings {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

impl SubmissionSettings {
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            submit_button_id: config.selectors.submit_button_id.clone(),
            save_path_prefix: config.save_path_prefix.clone(),
            require_identifier: config.require_identifier,
            prevent_overlapping_submissions: config.prevent_overlapping_submissions,
        }
    }

    /// Request path for `identifier`. An absent identifier is sent as the
    /// empty string unless one is required.
    pub fn save_target(&self, identifier: Option<&str>) -> Result<String, EditorError> {
        match identifier {
            Some(id) if !id.is_empty() => Ok(format!("{}{}", self.save_path_prefix, id)),
            _ if self.require_identifier => Err(EditorError::MissingIdentifier),
            _ => Ok(self.save_path_prefix.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_target_with_identifier() {
        let settings = SubmissionSettings::default();
        assert_eq!(settings.save_target(Some("abc")).unwrap(), "/save/abc");
    }

    #[test]
    fn test_save_target_without_identifier() {
        let settings = SubmissionSettings::default();
        assert_eq!(settings.save_target(None).unwrap(), "/save/");
        assert_eq!(settings.save_target(Some("")).unwrap(), "/save/");
    }

    #[test]
    fn test_save_target_required_identifier() {
        let settings = SubmissionSettings {
            require_identifier: true,
            ..Default::default()
        };
        assert!(matches!(settings.save_target(None), Err(EditorError::MissingIdentifier)));
        assert!(matches!(settings.save_target(Some("")), Err(EditorError::MissingIdentifier)));
        assert_eq!(settings.save_target(Some("ses-01")).unwrap(), "/save/ses-01");
    }
}
