use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

pub const MOCK_USER_ID: &str = "1780000000000000000";

/// How `/users/by/username/{handle}` answers.
#[derive(Clone)]
pub enum Lookup {
    Found,
    /// 200 with an `errors` array and no `data`.
    NotFound,
    Status(u16),
}

/// How `/users/{id}/tweets` answers.
#[derive(Clone)]
pub enum Timeline {
    Posts(serde_json::Value),
    /// 200 with only `meta`.
    NoData,
    Status(u16),
    Garbage,
}

#[derive(Default)]
pub struct Recorded {
    pub lookup_hits: AtomicUsize,
    pub tweets_hits: AtomicUsize,
    pub handles: Mutex<Vec<String>>,
    pub authorization: Mutex<Vec<String>>,
    pub tweets_query: Mutex<Option<HashMap<String, String>>>,
}

#[derive(Clone)]
struct MockState {
    lookup: Lookup,
    timeline: Timeline,
    recorded: Arc<Recorded>,
}

pub struct MockServer {
    pub port: u16,
    pub recorded: Arc<Recorded>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockServer {
    pub async fn start(lookup: Lookup, timeline: Timeline) -> Self {
        let recorded = Arc::new(Recorded::default());
        let state = MockState {
            lookup,
            timeline,
            recorded: recorded.clone(),
        };

        let app = Router::new()
            .route("/2/users/by/username/:handle", get(handle_lookup))
            .route("/2/users/:id/tweets", get(handle_tweets))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    rx.await.ok();
                })
                .await
                .unwrap();
        });

        MockServer {
            port,
            recorded,
            shutdown_tx: Some(tx),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}/2", self.port)
    }

    pub fn lookup_hits(&self) -> usize {
        self.recorded.lookup_hits.load(Ordering::SeqCst)
    }

    pub fn tweets_hits(&self) -> usize {
        self.recorded.tweets_hits.load(Ordering::SeqCst)
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// A base URL nobody listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/2", port)
}

fn record_auth(recorded: &Recorded, headers: &HeaderMap) {
    let value = headers
        .get("authorization")
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default()
        .to_string();
    recorded.authorization.lock().unwrap().push(value);
}

fn problem(status: u16) -> Response {
    let status = StatusCode::from_u16(status).unwrap();
    let body = serde_json::json!({
        "title": status.canonical_reason().unwrap_or("Error"),
        "type": "about:blank",
        "status": status.as_u16(),
        "detail": status.canonical_reason().unwrap_or("Error"),
    });
    (status, Json(body)).into_response()
}

async fn handle_lookup(
    State(state): State<MockState>,
    Path(handle): Path<String>,
    headers: HeaderMap,
) -> Response {
    state.recorded.lookup_hits.fetch_add(1, Ordering::SeqCst);
    state.recorded.handles.lock().unwrap().push(handle.clone());
    record_auth(&state.recorded, &headers);

    match state.lookup {
        Lookup::Found => Json(serde_json::json!({
            "data": {
                "id": MOCK_USER_ID,
                "name": "Sir Donny Lizard",
                "username": handle,
            }
        }))
        .into_response(),
        Lookup::NotFound => Json(serde_json::json!({
            "errors": [{
                "value": handle,
                "detail": format!("Could not find user with username: [{}].", handle),
                "title": "Not Found Error",
                "resource_type": "user",
                "parameter": "username",
                "type": "https://api.twitter.com/2/problems/resource-not-found"
            }]
        }))
        .into_response(),
        Lookup::Status(status) => problem(status),
    }
}

async fn handle_tweets(
    State(state): State<MockState>,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    state.recorded.tweets_hits.fetch_add(1, Ordering::SeqCst);
    *state.recorded.tweets_query.lock().unwrap() = Some(params);
    record_auth(&state.recorded, &headers);

    if id != MOCK_USER_ID {
        return problem(404);
    }

    match state.timeline {
        Timeline::Posts(data) => {
            let count = data.as_array().map(|a| a.len()).unwrap_or(0);
            Json(serde_json::json!({
                "data": data,
                "meta": { "result_count": count }
            }))
            .into_response()
        }
        Timeline::NoData => Json(serde_json::json!({
            "meta": { "result_count": 0 }
        }))
        .into_response(),
        Timeline::Status(status) => problem(status),
        Timeline::Garbage => (
            StatusCode::OK,
            [("content-type", "application/json")],
            "{\"data\": [",
        )
            .into_response(),
    }
}
