//! In-process stand-in for the election API, used by client and view tests

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method as HttpMethod, StatusCode, Uri},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{ApiClient, ReqwestTransport};

/// A request the mock received
#[derive(Debug, Clone)]
pub(crate) struct Hit {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: String,
}

impl Hit {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }
}

struct Canned {
    method: &'static str,
    path: String,
    status: u16,
    body: Value,
}

#[derive(Default)]
struct MockState {
    routes: Vec<Canned>,
    hits: Mutex<Vec<Hit>>,
}

/// Builder for the canned routes
#[derive(Default)]
pub(crate) struct MockApi {
    routes: Vec<Canned>,
}

/// A running mock server
pub(crate) struct RunningMock {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method path` (path relative to `/api`) with `status` and `body`
    pub fn route(mut self, method: &'static str, path: &str, status: u16, body: Value) -> Self {
        self.routes.push(Canned {
            method,
            path: path.to_string(),
            status,
            body,
        });
        self
    }

    pub async fn start(self) -> RunningMock {
        let state = Arc::new(MockState {
            routes: self.routes,
            hits: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(handle).with_state(Arc::clone(&state));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        RunningMock {
            base_url: format!("http://{}/api", addr),
            state,
        }
    }
}

impl RunningMock {
    pub fn client(&self) -> ApiClient<ReqwestTransport> {
        ApiClient::new(
            ReqwestTransport::new(Duration::from_secs(5)).unwrap(),
            &self.base_url,
        )
    }

    pub fn hits(&self) -> Vec<Hit> {
        self.state.hits.lock().unwrap().clone()
    }

    pub fn hits_for(&self, method: &str, path: &str) -> Vec<Hit> {
        self.hits()
            .into_iter()
            .filter(|h| h.method == method && h.path == path)
            .collect()
    }
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: HttpMethod,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    let path = uri.path().strip_prefix("/api").unwrap_or(uri.path()).to_string();
    state.hits.lock().unwrap().push(Hit {
        method: method.as_str().to_string(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    match state
        .routes
        .iter()
        .find(|r| r.method == method.as_str() && r.path == path)
    {
        Some(canned) => (
            StatusCode::from_u16(canned.status).unwrap(),
            Json(canned.body.clone()),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"success": false, "message": "Route not found"})),
        ),
    }
}

#[tokio::test]
async fn test_reqwest_transport_against_mock() {
    let mock = MockApi::new()
        .route(
            "GET",
            "/voters",
            200,
            json!({"success": true, "voters": [{"voter_id": 7, "full_name": "Anu"}]}),
        )
        .start()
        .await;

    let client = mock.client().with_token("tok-1");
    let voters = client.voters().await.unwrap();
    assert_eq!(voters[0].voter_id.as_deref(), Some("7"));

    let hits = mock.hits_for("GET", "/voters");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].authorization.as_deref(), Some("Bearer tok-1"));
}

#[tokio::test]
async fn test_unreachable_server_is_unavailable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(
        ReqwestTransport::new(Duration::from_secs(2)).unwrap(),
        &format!("http://{}/api", addr),
    );
    let err = client.voters().await.unwrap_err();
    assert_eq!(err, super::ApiError::Unavailable);
}
