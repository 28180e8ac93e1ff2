//! Stand-in for the remote checker: answers every `POST /api/check-url` with a
//! canned status and body, and records what it received.

use std::sync::{Arc, Mutex};
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Router,
};
use tokio::net::TcpListener;
use url::Url;

#[derive(Debug, Clone)]
pub struct Received {
    pub content_type: Option<String>,
    pub accept: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct FakeState {
    status: StatusCode,
    body: String,
    received: Arc<Mutex<Vec<Received>>>,
}

pub struct FakeApi {
    pub base: Url,
    received: Arc<Mutex<Vec<Received>>>,
}

impl FakeApi {
    pub fn received(&self) -> Vec<Received> {
        self.received.lock().unwrap().clone()
    }
}

/// Starts the fake on an ephemeral port. It lives as long as the test runtime.
pub async fn start(status: u16, body: &str) -> FakeApi {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = FakeState {
        status: StatusCode::from_u16(status).expect("valid status"),
        body: body.to_string(),
        received: Arc::clone(&received),
    };

    let app = Router::new()
        .route("/api/check-url", post(check_url_handler))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    FakeApi {
        base: Url::parse(&format!("http://{}", addr)).unwrap(),
        received,
    }
}

async fn check_url_handler(
    State(state): State<FakeState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    state.received.lock().unwrap().push(Received {
        content_type: header_value(header::CONTENT_TYPE),
        accept: header_value(header::ACCEPT),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}
