use std::sync::atomic::Ordering;

use tokio::task::JoinHandle;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EditorError;

use super::{PreparedSubmission, SubmissionHandler, SubmissionOutcome};

impl SubmissionHandler {
    /// One activation of the save control.
    ///
    /// The form is read and serialized immediately; the request runs on a
    /// spawned task. The returned handle resolves to the same outcome that is
    /// pushed to the outcome channel. Must be called within a tokio runtime.
    pub fn activate(&self) -> JoinHandle<SubmissionOutcome> {
        let submission_id = Uuid::new_v4().to_string();
        let guard_overlap = self.settings.prevent_overlapping_submissions;

        if guard_overlap && self.in_flight.swap(true, Ordering::SeqCst) {
            info!(%submission_id, "submission already in flight, ignoring activation");
            return self.finish_now(SubmissionOutcome::Suppressed);
        }

        let prepared = match self.prepare(submission_id.clone()) {
            Ok(prepared) => prepared,
            Err(e) => {
                warn!(%submission_id, error = %e, "could not prepare submission");
                self.page.alert(&format!("Could not save the study spec.\n{}", e));
                if guard_overlap {
                    self.in_flight.store(false, Ordering::SeqCst);
                }
                return self.finish_now(SubmissionOutcome::Failed {
                    reason: e.to_string(),
                    payload: None,
                });
            }
        };

        info!(%submission_id, target = %prepared.target, "submitting study spec");

        let handler = self.clone();
        tokio::spawn(async move {
            let outcome = handler.send(prepared).await;
            if guard_overlap {
                handler.in_flight.store(false, Ordering::SeqCst);
            }
            handler.report(outcome.clone());
            outcome
        })
    }

    fn prepare(&self, submission_id: String) -> Result<PreparedSubmission, EditorError> {
        let target = self.settings.save_target(self.identifier.as_deref())?;

        let payload = {
            let document = self.document.read().map_err(|_| EditorError::LockPoisoned)?;
            self.collector.collect(&document)?
        };

        Ok(PreparedSubmission {
            submission_id,
            target,
            body: payload.to_json()?,
        })
    }

    fn finish_now(&self, outcome: SubmissionOutcome) -> JoinHandle<SubmissionOutcome> {
        self.report(outcome.clone());
        tokio::spawn(async move { outcome })
    }

    fn report(&self, outcome: SubmissionOutcome) {
        // Nobody listening is fine.
        let _ = self.outcomes.send(outcome);
    }
}
