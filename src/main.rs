use std::{fs, path::PathBuf, sync::Arc};

use color_eyre::eyre::{eyre, OptionExt};
use tracing::info;

use studyspec_editor::{
    config::EditorConfig,
    event_bus::{EventBus, UiEvent},
    study_spec::StudySpec,
    submission::{ConsolePage, HttpTransport, SubmissionHandler, SubmissionOutcome},
    util::log::DiagnosticLog,
};

const DEFAULT_CONFIG: &str = "editor.yml";

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    tracing_subscriber::fmt::init();
    color_eyre::install()?;

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let config = EditorConfig::load_from_path(&config_path)?;

    let spec = StudySpec::load(&config.dataset_path, config.session.as_deref())?;
    info!(entries = spec.entries.len(), dataset = %config.dataset_path.display(), "study spec loaded");

    let page_document = spec.edit_page(&config.selectors);
    if let Some(output) = &config.edit_page_output {
        fs::write(output, page_document.render_html()?)?;
        info!(path = %output.display(), "edit page written");
    }

    let diagnostics = Arc::new(DiagnosticLog::open(&config.diagnostics_dir)?);
    let transport = Arc::new(HttpTransport::new(&config.server_url, config.request_timeout())?);
    let page = Arc::new(ConsolePage);

    let (handler, mut outcomes) =
        SubmissionHandler::from_config(&config, page_document.into_shared(), transport, page);
    let handler = handler.with_diagnostics(diagnostics);

    let bus = EventBus::new();
    let subscription = handler.mount(&bus);
    bus.publish(&UiEvent::click(&config.selectors.submit_button_id, "studyspec-submit"));

    let outcome = outcomes
        .recv()
        .await
        .ok_or_eyre("Submission handler stopped without reporting an outcome")?;
    subscription.unsubscribe();

    match outcome {
        SubmissionOutcome::Navigated { .. } => Ok(()),
        SubmissionOutcome::Rejected { status, .. } => {
            Err(eyre!("Submission rejected with HTTP status {}", status))
        }
        SubmissionOutcome::Failed { reason, .. } => Err(eyre!("Submission failed: {}", reason)),
        SubmissionOutcome::Suppressed => Err(eyre!("Submission suppressed")),
    }
}
