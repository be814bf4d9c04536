use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;

/// One request as seen by the stub endpoint.
#[derive(Debug, Clone)]
pub struct Received {
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct StubState {
    received: Arc<Mutex<Vec<Received>>>,
    status: StatusCode,
    reply: String,
}

/// A local stand-in for the dishes endpoint.
pub struct Stub {
    pub url: String,
    received: Arc<Mutex<Vec<Received>>>,
}

impl Stub {
    /// Every request received so far, in arrival order.
    pub async fn received(&self) -> Vec<Received> {
        self.received.lock().await.clone()
    }
}

/// Serve `POST /dishes/` on an ephemeral port, answering every request
/// with `status` and `reply` as the body.
pub async fn spawn_stub(status: StatusCode, reply: &str) -> Stub {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        received: received.clone(),
        status,
        reply: reply.to_string(),
    };

    let router = Router::new()
        .route("/dishes/", post(record))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("Stub listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Stub server failed");
    });

    Stub {
        url: format!("http://{addr}/dishes/"),
        received,
    }
}

/// A URL nothing is listening on.
pub async fn dead_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Probe listener has no address");
    drop(listener);
    format!("http://{addr}/dishes/")
}

async fn record(
    State(state): State<StubState>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
    state.received.lock().await.push(Received { content_type, body });

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.reply.clone(),
    )
}
