mod common;

use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use common::{sample_page, RecordingPage, SAMPLE_PAYLOAD};
use studyspec_editor::config::EditorConfig;
use studyspec_editor::submission::{
    HttpTransport, SubmissionHandler, SubmissionOutcome, SubmissionTransport, JSON_CONTENT_TYPE,
};

/// Local listener only; ignore any proxy configured in the environment.
fn local_transport(base_url: &str) -> HttpTransport {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpTransport::with_client(base_url, client).unwrap()
}

#[derive(Debug)]
struct CapturedRequest {
    request_line: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl CapturedRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Accepts one connection, captures the request and answers with
/// `status` and a plain-text `body`.
async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<CapturedRequest>) {
    serve_raw(format!(
        "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    ))
    .await
}

/// Accepts one connection, captures the request and writes `response`
/// verbatim before closing.
async fn serve_raw(response: String) -> (String, oneshot::Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];

        let (head_end, content_length) = loop {
            let n = stream.read(&mut buf).await.unwrap();
            assert!(n > 0, "connection closed before headers were complete");
            raw.extend_from_slice(&buf[..n]);
            if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&raw[..pos]).to_string();
                let length = head
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.trim()
                            .eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                break (pos + 4, length);
            }
        };

        while raw.len() < head_end + content_length {
            let n = stream.read(&mut buf).await.unwrap();
            assert!(n > 0, "connection closed before body was complete");
            raw.extend_from_slice(&buf[..n]);
        }

        let head = String::from_utf8_lossy(&raw[..head_end - 4]).to_string();
        let mut lines = head.lines();
        let request_line = lines.next().unwrap_or_default().to_string();
        let headers = lines
            .filter_map(|line| line.split_once(':'))
            .map(|(n, v)| (n.trim().to_string(), v.trim().to_string()))
            .collect();
        let request_body =
            String::from_utf8_lossy(&raw[head_end..head_end + content_length]).to_string();

        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();

        let _ = tx.send(CapturedRequest {
            request_line,
            headers,
            body: request_body,
        });
    });

    (base_url, rx)
}

#[tokio::test]
async fn test_post_json_wire_format() {
    let (base_url, captured) = serve_once("200 OK", "https://example.test/result/1").await;
    let transport = local_transport(&base_url);

    let response = transport
        .post_json("/save/abc", SAMPLE_PAYLOAD.to_string())
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, "https://example.test/result/1");

    let request = captured.await.unwrap();
    assert_eq!(request.request_line, "POST /save/abc HTTP/1.1");
    assert_eq!(request.header("content-type"), Some(JSON_CONTENT_TYPE));
    assert_eq!(request.body, SAMPLE_PAYLOAD);
}

#[tokio::test]
async fn test_handler_end_to_end_over_http() {
    let (base_url, captured) = serve_once("200 OK", "/index").await;
    let config = EditorConfig {
        server_url: base_url.clone(),
        session: Some("ses-01".to_string()),
        ..Default::default()
    };
    let transport = Arc::new(local_transport(&config.server_url));
    let page = Arc::new(RecordingPage::default());

    let (handler, _outcomes) =
        SubmissionHandler::from_config(&config, sample_page().into_shared(), transport, page.clone());
    let outcome = handler.activate().await.unwrap();

    assert_eq!(outcome, SubmissionOutcome::Navigated { url: "/index".to_string() });
    assert_eq!(page.navigations(), vec!["/index"]);
    assert_eq!(captured.await.unwrap().request_line, "POST /save/ses-01 HTTP/1.1");
}

#[tokio::test]
async fn test_server_error_is_reported_as_rejection() {
    let (base_url, _captured) = serve_once("500 Internal Server Error", "oops").await;
    let transport = Arc::new(local_transport(&base_url));
    let page = Arc::new(RecordingPage::default());
    let config = EditorConfig {
        server_url: base_url,
        session: Some("abc".to_string()),
        ..Default::default()
    };

    let (handler, _outcomes) =
        SubmissionHandler::from_config(&config, sample_page().into_shared(), transport, page.clone());
    let outcome = handler.activate().await.unwrap();

    assert!(matches!(outcome, SubmissionOutcome::Rejected { status: 500, .. }));
    assert!(page.navigations().is_empty());
    assert!(page.alerts()[0].contains("500"));
}

#[tokio::test]
async fn test_truncated_error_body_keeps_status() {
    // Announces 100 body bytes, sends 4, then closes the connection.
    let (base_url, _captured) = serve_raw(
        "HTTP/1.1 500 Internal Server Error\r\nContent-Type: text/plain\r\nContent-Length: 100\r\nConnection: close\r\n\r\noops"
            .to_string(),
    )
    .await;
    let transport = Arc::new(local_transport(&base_url));
    let page = Arc::new(RecordingPage::default());
    let config = EditorConfig {
        server_url: base_url,
        session: Some("abc".to_string()),
        ..Default::default()
    };

    let (handler, _outcomes) =
        SubmissionHandler::from_config(&config, sample_page().into_shared(), transport, page.clone());
    let outcome = handler.activate().await.unwrap();

    assert_eq!(
        outcome,
        SubmissionOutcome::Rejected {
            status: 500,
            payload: SAMPLE_PAYLOAD.to_string()
        }
    );
    assert!(page.navigations().is_empty());
    let alerts = page.alerts();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].contains("500"));
}
