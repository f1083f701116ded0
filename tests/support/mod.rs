// Shared helpers: loopback listeners and fake upstream services.
#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use courtside_core::model::{ModelError, ModelProvider, ModelRequest, ModelResponse};
use serde_json::{Value, json};
use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const OPENAI_TEST_KEY: &str = "sk-test";
pub const WEATHER_TEST_KEY: &str = "weather-test";

/// Serve `app` on an ephemeral loopback port for the rest of the test.
pub async fn spawn(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    addr
}

/// OpenAI chat-completions stand-in. Replies are served in order; request
/// bodies are recorded.
#[derive(Clone, Default)]
pub struct FakeOpenAi {
    replies: Arc<Mutex<VecDeque<(StatusCode, Value)>>>,
    pub requests: Arc<Mutex<Vec<Value>>>,
}

impl FakeOpenAi {
    pub fn new(replies: Vec<(StatusCode, Value)>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into())),
            requests: Arc::default(),
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/v1/chat/completions", post(fake_completion))
            .with_state(self.clone())
    }

    pub fn recorded(&self) -> Vec<Value> {
        self.requests.lock().expect("lock").clone()
    }
}

async fn fake_completion(
    State(fake): State<FakeOpenAi>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let expected = format!("Bearer {OPENAI_TEST_KEY}");
    let authorized = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == expected);
    if !authorized {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    fake.requests.lock().expect("lock").push(body);
    let next = fake.replies.lock().expect("lock").pop_front();
    match next {
        Some((status, reply)) => (status, Json(reply)).into_response(),
        None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

pub fn text_completion(content: &str) -> (StatusCode, Value) {
    (
        StatusCode::OK,
        json!({
            "choices": [{ "message": { "role": "assistant", "content": content } }]
        }),
    )
}

/// `calls` are `(name, arguments)` pairs; arguments are sent JSON-encoded.
pub fn tool_completion(calls: &[(&str, Value)]) -> (StatusCode, Value) {
    let tool_calls: Vec<Value> = calls
        .iter()
        .enumerate()
        .map(|(idx, (name, args))| {
            json!({
                "id": format!("call_{}", idx + 1),
                "type": "function",
                "function": { "name": name, "arguments": args.to_string() }
            })
        })
        .collect();
    (
        StatusCode::OK,
        json!({
            "choices": [{
                "message": { "role": "assistant", "content": null, "tool_calls": tool_calls }
            }]
        }),
    )
}

/// OpenWeatherMap current-weather stand-in. Knows London only.
pub fn fake_weather() -> Router {
    Router::new().route("/data/2.5/weather", get(fake_weather_lookup))
}

async fn fake_weather_lookup(Query(query): Query<HashMap<String, String>>) -> Response {
    if query.get("appid").map(String::as_str) != Some(WEATHER_TEST_KEY) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "cod": 401, "message": "Invalid API key" })),
        )
            .into_response();
    }
    match query.get("q").map(String::as_str) {
        Some("London") => Json(json!({
            "weather": [{ "id": 500, "main": "Rain", "description": "light rain" }],
            "main": { "temp": 18.5, "humidity": 81 },
            "name": "London"
        }))
        .into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "cod": "404", "message": "city not found" })),
        )
            .into_response(),
    }
}

/// In-process provider returning canned responses, for tests that do not
/// need the wire format.
#[derive(Clone)]
pub struct CannedProvider {
    replies: Arc<Mutex<VecDeque<Option<ModelResponse>>>>,
}

impl CannedProvider {
    /// `None` entries fail the call with an invalid-response error.
    pub fn new(replies: Vec<Option<ModelResponse>>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into())),
        }
    }
}

#[async_trait]
impl ModelProvider for CannedProvider {
    fn id(&self) -> &str {
        "canned"
    }

    async fn complete(&self, _request: ModelRequest) -> Result<ModelResponse, ModelError> {
        let next = self.replies.lock().expect("lock").pop_front().flatten();
        next.ok_or_else(|| ModelError::invalid_response("canned", "no scripted reply"))
    }
}
