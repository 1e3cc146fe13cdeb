// src/test_utils/mock_api_server.rs
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// A canned answer for one request path.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: StatusCode,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl MockResponse {
    pub fn json(status: StatusCode, value: serde_json::Value) -> Self {
        Self {
            status,
            content_type: "application/json".to_string(),
            body: value.to_string().into_bytes(),
        }
    }

    pub fn raw(status: StatusCode, content_type: &str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type: content_type.to_string(),
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub params: HashMap<String, String>,
    pub api_key: Option<String>,
    pub accept: Option<String>,
}

#[derive(Clone)]
struct MockServerState {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

async fn respond(
    State(state): State<MockServerState>,
    uri: Uri,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let path = uri.path().to_string();
    log::debug!("Mock API server received {} {:?}", path, params);

    state.requests.lock().unwrap().push(RecordedRequest {
        path: path.clone(),
        params,
        api_key: header_value("x-api-key"),
        accept: header_value("accept"),
    });

    match state.responses.lock().unwrap().get(&path) {
        Some(canned) => (
            canned.status,
            [(header::CONTENT_TYPE, canned.content_type.clone())],
            canned.body.clone(),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json".to_string())],
            serde_json::json!({
                "message": format!("No mock response for {}", path),
                "error": "Not Found",
                "statusCode": 404
            })
            .to_string()
            .into_bytes(),
        )
            .into_response(),
    }
}

pub struct MockApiServer {
    addr: SocketAddr,
    shutdown_tx: tokio::sync::oneshot::Sender<()>,
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    recorded_requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockApiServer {
    pub async fn start() -> Self {
        let state = MockServerState {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        };
        let responses = state.responses.clone();
        let recorded_requests = state.requests.clone();

        let app = Router::new().fallback(respond).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap_or_else(|e| {
            panic!("Failed to bind mock server to 127.0.0.1:0. Error: {}", e);
        });
        let addr = listener.local_addr().unwrap();
        log::info!("Mock API server listening on {}", addr);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .unwrap_or_else(|e| {
                    log::error!("Mock API server error: {}", e);
                });
        });

        MockApiServer {
            addr,
            shutdown_tx,
            responses,
            recorded_requests,
        }
    }

    pub fn address(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn respond_with(&self, path: &str, response: MockResponse) {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), response);
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.recorded_requests.lock().unwrap().clone()
    }

    pub async fn shutdown(self) {
        if self.shutdown_tx.send(()).is_err() {
            log::warn!("Mock API server shutdown signal already sent or receiver dropped.");
        }
    }
}
