use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use super::{StudySpec, STUDYSPEC_FILE};

impl StudySpec {
    /// Loads the study spec of a dataset.
    ///
    /// Without a session, the top-level snippet is joined with the snippet
    /// of every non-hidden subdirectory (in name order). With a session, only
    /// that session's snippet is read. Missing snippets are skipped.
    pub fn load(dataset: &Path, session: Option<&str>) -> color_eyre::Result<Self> {
        let mut spec = StudySpec::default();
        for file in Self::snippet_paths(dataset, session)? {
            if !file.exists() {
                debug!(path = %file.display(), "no study spec snippet");
                continue;
            }
            let content = fs::read_to_string(&file)?;
            let snippet: StudySpec = serde_json::from_str(&content)
                .map_err(|e| color_eyre::eyre::eyre!("Invalid study spec {}: {}", file.display(), e))?;
            debug!(path = %file.display(), entries = snippet.entries.len(), "loaded study spec snippet");
            spec.entries.extend(snippet.entries);
        }
        Ok(spec)
    }

    fn snippet_paths(dataset: &Path, session: Option<&str>) -> color_eyre::Result<Vec<PathBuf>> {
        if let Some(session) = session.filter(|s| !s.is_empty()) {
            return Ok(vec![dataset.join(session).join(STUDYSPEC_FILE)]);
        }

        let mut subdirs = Vec::new();
        for entry in fs::read_dir(dataset)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') || !entry.file_type()?.is_dir() {
                continue;
            }
            subdirs.push(name);
        }
        subdirs.sort();

        let mut paths = vec![dataset.join(STUDYSPEC_FILE)];
        paths.extend(subdirs.iter().map(|d| dataset.join(d).join(STUDYSPEC_FILE)));
        Ok(paths)
    }
}
