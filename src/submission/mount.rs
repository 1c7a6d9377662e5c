use crate::event_bus::{EventBus, Subscription, UiEventType};

use super::SubmissionHandler;

impl SubmissionHandler {
    /// Binds the handler to clicks on the submit control. The binding lasts
    /// as long as the returned subscription; drop it on teardown.
    ///
    /// Clicks must be published from within a tokio runtime.
    pub fn mount(&self, bus: &EventBus) -> Subscription {
        let handler = self.clone();
        tracing::debug!(target_id = %self.settings.submit_button_id, "mounting submission handler");

        bus.subscribe(UiEventType::Click, &self.settings.submit_button_id, move |event| {
            tracing::debug!(source = %event.metadata.source, "submit control activated");
            // The outcome is reported through the outcome channel.
            drop(handler.activate());
        })
    }
}
