mod apply_env_overrides;
mod load_from_path;
mod validate;

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::form::{FormSelectors, MalformedEntryPolicy};

pub use apply_env_overrides::{ENV_DATASET, ENV_SERVER_URL, ENV_SESSION};

/// Editor settings, read from `editor.yml`. Every field has a default so an
/// empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub server_url: String,
    pub dataset_path: PathBuf,
    pub session: Option<String>,
    pub save_path_prefix: String,
    pub selectors: FormSelectors,
    pub malformed_entries: MalformedEntryPolicy,
    pub require_identifier: bool,
    pub prevent_overlapping_submissions: bool,
    pub request_timeout_secs: Option<u64>,
    pub diagnostics_dir: PathBuf,
    pub edit_page_output: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8080".to_string(),
            dataset_path: PathBuf::from("."),
            session: None,
            save_path_prefix: "/save/".to_string(),
            selectors: FormSelectors::default(),
            malformed_entries: MalformedEntryPolicy::Skip,
            require_identifier: false,
            prevent_overlapping_submissions: false,
            request_timeout_secs: None,
            diagnostics_dir: PathBuf::from("./logs"),
            edit_page_output: None,
        }
    }
}

impl EditorConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
