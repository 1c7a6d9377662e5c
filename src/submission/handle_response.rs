use tracing::{error, info};

use crate::util::log::DiagnosticKind;

use super::{PreparedSubmission, SubmissionHandler, SubmissionOutcome, TransportResponse};

impl SubmissionHandler {
    pub(super) async fn send(&self, prepared: PreparedSubmission) -> SubmissionOutcome {
        match self
            .transport
            .post_json(&prepared.target, prepared.body.clone())
            .await
        {
            Ok(response) => self.handle_response(&prepared, response),
            Err(e) => self.handle_transport_error(&prepared, &e.to_string()),
        }
    }

    fn handle_response(&self, prepared: &PreparedSubmission, response: TransportResponse) -> SubmissionOutcome {
        if response.status == 200 {
            info!(submission_id = %prepared.submission_id, url = %response.body, "submission accepted");
            self.page.navigate(&response.body);
            return SubmissionOutcome::Navigated { url: response.body };
        }

        error!(
            submission_id = %prepared.submission_id,
            status = response.status,
            payload = %prepared.body,
            "submission rejected"
        );
        self.page.alert(&format!(
            "The server did not accept the study spec.\nHTTP status {}",
            response.status
        ));
        self.record_diagnostic(prepared, DiagnosticKind::Rejected { status: response.status });

        SubmissionOutcome::Rejected {
            status: response.status,
            payload: prepared.body.clone(),
        }
    }

    fn handle_transport_error(&self, prepared: &PreparedSubmission, reason: &str) -> SubmissionOutcome {
        error!(
            submission_id = %prepared.submission_id,
            error = reason,
            payload = %prepared.body,
            "submission failed"
        );
        self.page.alert(&format!(
            "The study spec could not be sent to the server.\n{}",
            reason
        ));
        self.record_diagnostic(prepared, DiagnosticKind::Failed { reason: reason.to_string() });

        SubmissionOutcome::Failed {
            reason: reason.to_string(),
            payload: Some(prepared.body.clone()),
        }
    }

    fn record_diagnostic(&self, prepared: &PreparedSubmission, kind: DiagnosticKind) {
        if let Some(diagnostics) = &self.diagnostics {
            diagnostics.record(&prepared.submission_id, &prepared.target, &kind, &prepared.body);
        }
    }
}
