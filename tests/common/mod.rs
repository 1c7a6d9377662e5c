#![allow(dead_code)]

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use color_eyre::eyre::eyre;
use studyspec_editor::document::{Document, Element};
use studyspec_editor::submission::{PageSurface, SubmissionTransport, TransportResponse};

/// Transport answering every request with a fixed status and body.
#[derive(Debug, Default)]
pub struct FakeTransport {
    pub status: u16,
    pub body: String,
    pub failure: Option<String>,
    pub delay: Option<Duration>,
    pub requests: Mutex<Vec<(String, String)>>,
}

impl FakeTransport {
    pub fn responding(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            ..Default::default()
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Default::default()
        }
    }

    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionTransport for FakeTransport {
    async fn post_json(&self, path: &str, body: String) -> color_eyre::Result<TransportResponse> {
        self.requests.lock().unwrap().push((path.to_string(), body));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(reason) = &self.failure {
            return Err(eyre!("{}", reason));
        }
        Ok(TransportResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

#[derive(Debug, Default)]
pub struct RecordingPage {
    pub navigations: Mutex<Vec<String>>,
    pub alerts: Mutex<Vec<String>>,
}

impl RecordingPage {
    pub fn navigations(&self) -> Vec<String> {
        self.navigations.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl PageSurface for RecordingPage {
    fn navigate(&self, url: &str) {
        self.navigations.lock().unwrap().push(url.to_string());
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

/// Edit page with one section holding a plain field and a reviewed field.
pub fn sample_page() -> Document {
    let section = Element::new("div")
        .with_class("spec_section")
        .with_child(
            Element::new("div")
                .with_class("key")
                .with_text("subject: ")
                .with_child(Element::input("text", "subject", "01")),
        )
        .with_child(
            Element::new("div")
                .with_class("key")
                .with_text("session: ")
                .with_child(Element::input("text", "session", "baseline"))
                .with_child(Element::input("checkbox", "approved", "true")),
        );

    Document::new(
        Element::new("body")
            .with_child(Element::new("div").with_id("spec_form").with_child(section))
            .with_child(Element::new("button").with_id("submit_spec").with_text("Save")),
    )
}

pub const SAMPLE_PAYLOAD: &str =
    r#"{"content":[{"subject":"01","session":{"value":"baseline","approved":"true"}}]}"#;
