use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::EditorConfig;
use crate::document::SharedDocument;
use crate::form::FormCollector;
use crate::util::log::DiagnosticLog;

use super::{OutcomeReceiver, PageSurface, SubmissionHandler, SubmissionSettings, SubmissionTransport};

impl SubmissionHandler {
    pub fn new(
        identifier: Option<String>,
        settings: SubmissionSettings,
        collector: FormCollector,
        document: SharedDocument,
        transport: Arc<dyn SubmissionTransport>,
        page: Arc<dyn PageSurface>,
    ) -> (Self, OutcomeReceiver) {
        let (outcomes, receiver) = mpsc::unbounded_channel();

        (
            Self {
                identifier,
                settings,
                collector,
                document,
                transport,
                page,
                diagnostics: None,
                outcomes,
                in_flight: Arc::new(AtomicBool::new(false)),
            },
            receiver,
        )
    }

    /// Handler wired from an [`EditorConfig`]: identifier from `session`,
    /// collector from the selectors and malformed-entry policy.
    pub fn from_config(
        config: &EditorConfig,
        document: SharedDocument,
        transport: Arc<dyn SubmissionTransport>,
        page: Arc<dyn PageSurface>,
    ) -> (Self, OutcomeReceiver) {
        Self::new(
            config.session.clone(),
            SubmissionSettings::from_config(config),
            FormCollector::new(config.selectors.clone(), config.malformed_entries),
            document,
            transport,
            page,
        )
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<DiagnosticLog>) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }
}
