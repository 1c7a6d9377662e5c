use std::path::PathBuf;

use super::EditorConfig;

pub const ENV_SERVER_URL: &str = "STUDYSPEC_SERVER_URL";
pub const ENV_DATASET: &str = "STUDYSPEC_DATASET";
pub const ENV_SESSION: &str = "STUDYSPEC_SESSION";

impl EditorConfig {
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    pub(super) fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_SERVER_URL) {
            self.server_url = url;
        }
        if let Some(dataset) = lookup(ENV_DATASET) {
            self.dataset_path = PathBuf::from(dataset);
        }
        if let Some(session) = lookup(ENV_SESSION) {
            self.session = Some(session);
        }
    }
}
