// Log output tests for POST /validate.
//
// Installs a thread-local fmt subscriber writing into a shared buffer,
// drives the Router with oneshot on the same (current-thread) runtime,
// and checks the correlation ID and request trace lines in the output.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use censor::censor::CommentValidator;
use censor::web::request_id::RequestIdSource;
use censor::web::{build_router, AppState};

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log buffer")).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[derive(Default)]
struct SequentialIds {
    next: AtomicUsize,
}

impl RequestIdSource for SequentialIds {
    fn next_id(&self) -> String {
        format!("req-{}", self.next.fetch_add(1, Ordering::SeqCst))
    }
}

fn app() -> Router {
    let state = AppState::new(CommentValidator::default(), 1024)
        .with_request_ids(Arc::new(SequentialIds::default()));
    build_router(state)
}

fn capture() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_writer(buffer.clone())
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buffer, guard)
}

fn post(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/validate")
        .body(Body::from(body.to_string()))
        .expect("request")
}

#[tokio::test]
async fn generated_request_id_is_logged() {
    let (logs, _guard) = capture();

    let response = app()
        .oneshot(post(r#"{"comment":"hello world"}"#))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let output = logs.contents();
    assert!(output.contains("Received request"), "{output}");
    assert!(output.contains("request_id=req-0"), "{output}");
    assert!(output.contains("Validation succeeded"), "{output}");
    assert!(output.contains("elapsed_ms="), "{output}");
}

#[tokio::test]
async fn supplied_request_id_is_logged() {
    let (logs, _guard) = capture();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/validate")
        .header("X-Request-ID", "caller-42")
        .body(Body::from(r#"{"comment":"this is spam"}"#))
        .expect("request");
    let response = app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let output = logs.contents();
    assert!(output.contains("request_id=caller-42"), "{output}");
    assert!(output.contains("Validation failed"), "{output}");
    assert!(output.contains("trigger="), "{output}");
    assert!(!output.contains("req-0"), "{output}");
}

#[tokio::test]
async fn error_paths_log_request_id() {
    let (logs, _guard) = capture();

    let get = Request::builder()
        .method(Method::GET)
        .uri("/validate")
        .body(Body::empty())
        .expect("request");
    let app = app();
    app.clone().oneshot(get).await.expect("response");
    app.clone()
        .oneshot(post(r#"{"comment":"#))
        .await
        .expect("response");
    app.oneshot(post(r#"{"comment":""}"#))
        .await
        .expect("response");

    let output = logs.contents();
    assert!(output.contains("Method not allowed"), "{output}");
    assert!(output.contains("Invalid request payload"), "{output}");
    assert!(output.contains("Comment is empty"), "{output}");
    for id in ["req-0", "req-1", "req-2"] {
        assert!(output.contains(&format!("request_id={id}")), "{output}");
    }
}

#[tokio::test]
async fn trace_layer_logs_responses_at_info() {
    let (logs, _guard) = capture();

    app()
        .oneshot(post(r#"{"comment":"hello"}"#))
        .await
        .expect("response");

    let output = logs.contents();
    assert!(output.contains("finished processing request"), "{output}");
    assert!(output.contains("status=200"), "{output}");
}
