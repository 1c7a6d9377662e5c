use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// Sends a serialized form to the server.
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// POST `body` to `path` with a JSON content type. Any HTTP status is a
    /// successful return, even when a non-200 body cannot be read; `Err`
    /// means no usable status was obtained.
    async fn post_json(&self, path: &str, body: String) -> color_eyre::Result<TransportResponse>;
}

/// reqwest-backed transport resolving paths against a base URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    /// `timeout` of `None` means the request may take as long as it takes.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> color_eyre::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Self::with_client(base_url, builder.build()?)
    }

    pub fn with_client(base_url: &str, client: reqwest::Client) -> color_eyre::Result<Self> {
        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
        })
    }

    pub fn resolve(&self, path: &str) -> color_eyre::Result<Url> {
        Ok(self.base_url.join(path)?)
    }
}

#[async_trait]
impl SubmissionTransport for HttpTransport {
    async fn post_json(&self, path: &str, body: String) -> color_eyre::Result<TransportResponse> {
        let url = self.resolve(path)?;
        tracing::debug!(%url, bytes = body.len(), "posting form");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        // Only a 200 body is used; any other status stands on its own.
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if status != 200 => {
                tracing::warn!(status, error = %e, "could not read error response body");
                String::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(TransportResponse { status, body })
    }
}
