//! The submission handler: turns an activation of the save control into one
//! POST of the form content, then navigates or alerts depending on the
//! answer.

mod activate;
mod handle_response;
mod mount;
mod new;
mod page;
mod settings;
mod transport;

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::document::SharedDocument;
use crate::form::FormCollector;
use crate::util::log::DiagnosticLog;

pub use page::{ConsolePage, PageSurface};
pub use settings::SubmissionSettings;
pub use transport::{HttpTransport, SubmissionTransport, TransportResponse, JSON_CONTENT_TYPE};

/// Result of one activation. Exactly one is reported per activation.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// HTTP 200; the page was sent to `url`.
    Navigated { url: String },
    /// Any other HTTP status.
    Rejected { status: u16, payload: String },
    /// No status was obtained. `payload` is absent when the form could not
    /// be serialized in the first place.
    Failed {
        reason: String,
        payload: Option<String>,
    },
    /// Ignored because another submission was still in flight.
    Suppressed,
}

pub type OutcomeReceiver = mpsc::UnboundedReceiver<SubmissionOutcome>;
type OutcomeSender = mpsc::UnboundedSender<SubmissionOutcome>;

/// A serialized form ready to be sent.
#[derive(Debug, Clone)]
struct PreparedSubmission {
    submission_id: String,
    target: String,
    body: String,
}

#[derive(Clone)]
pub struct SubmissionHandler {
    identifier: Option<String>,
    settings: SubmissionSettings,
    collector: FormCollector,
    document: SharedDocument,
    transport: Arc<dyn SubmissionTransport>,
    page: Arc<dyn PageSurface>,
    diagnostics: Option<Arc<DiagnosticLog>>,
    outcomes: OutcomeSender,
    in_flight: Arc<AtomicBool>,
}

impl std::fmt::Debug for SubmissionHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionHandler")
            .field("identifier", &self.identifier)
            .field("settings", &self.settings)
            .field("collector", &self.collector)
            .field("transport", &"<SubmissionTransport>")
            .field("page", &"<PageSurface>")
            .finish()
    }
}
