// REST route tests - router served on a loopback listener, driven with reqwest

#[path = "../support/mod.rs"]
mod support;

use courtside_core::agent::TurnOrchestrator;
use courtside_core::config::AppConfig;
use courtside_core::model::ModelResponse;
use courtside_core::server::router;
use courtside_core::tools::builtin_registry;
use courtside_core::types::ToolCallRequest;
use reqwest::StatusCode;
use reqwest::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE, ORIGIN};
use serde_json::{Value, json};
use std::sync::Arc;
use support::{CannedProvider, spawn};

async fn serve_with(replies: Vec<Option<ModelResponse>>) -> String {
    let config = AppConfig::default();
    let registry = Arc::new(builtin_registry(&config.tools).expect("registry builds"));
    let orchestrator = Arc::new(TurnOrchestrator::from_config(
        CannedProvider::new(replies),
        registry,
        &config,
    ));
    let addr = spawn(router(orchestrator, &config.server.cors_origins)).await;
    format!("http://{addr}")
}

#[tokio::test]
async fn chat_returns_text_reply() {
    let base = serve_with(vec![Some(ModelResponse::text(
        "Paris is the capital of France.",
    ))])
    .await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/chat"))
        .json(&json!({
            "messages": [{ "role": "user", "content": "What's the capital of France?" }]
        }))
        .send()
        .await
        .expect("request sent");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("json body");
    assert_eq!(
        body,
        json!({ "reply": { "kind": "text", "text": "Paris is the capital of France." } })
    );
}

#[tokio::test]
async fn chat_returns_tool_results_in_request_order() {
    let base = serve_with(vec![Some(ModelResponse::tool_calls(vec![
        ToolCallRequest::new("1", "checkFriendsAvailability", r#"{"names":["Tom","Sarah"]}"#),
        ToolCallRequest::new("2", "findTennisCourts", r#"{"location":"London"}"#),
        ToolCallRequest::new("3", "bookCourt", "{}"),
    ]))])
    .await;

    let body: Value = reqwest::Client::new()
        .post(format!("{base}/api/chat"))
        .json(&json!({
            "messages": [{ "role": "user", "content": "Tennis with Tom and Sarah in London?" }]
        }))
        .send()
        .await
        .expect("request sent")
        .json()
        .await
        .expect("json body");

    let reply = &body["reply"];
    assert_eq!(reply["kind"], "tool");
    assert_eq!(reply["reasoning"], json!(["Agent used tools"]));
    let results = reply["toolResults"].as_array().expect("results array");
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["tool"], "checkFriendsAvailability");
    assert_eq!(results[0]["result"], json!(["Sarah"]));
    assert_eq!(results[1]["tool"], "findTennisCourts");
    assert_eq!(results[1]["result"][0]["name"], "Victoria Park Courts");
    assert_eq!(results[2]["success"], false);
    assert_eq!(
        results[2]["result"],
        json!({ "kind": "UnknownTool", "name": "bookCourt" })
    );
}

#[tokio::test]
async fn empty_history_is_a_bad_request() {
    let base = serve_with(Vec::new()).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/chat"))
        .json(&json!({ "messages": [] }))
        .send()
        .await
        .expect("request sent");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("json body");
    assert_eq!(body["error"]["kind"], "InvalidRequest");
}

#[tokio::test]
async fn unreadable_body_is_a_bad_request() {
    let base = serve_with(Vec::new()).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/chat"))
        .header(CONTENT_TYPE, "application/json")
        .body("{\"messages\": [")
        .send()
        .await
        .expect("request sent");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("json body");
    assert_eq!(body["error"]["kind"], "InvalidRequest");
}

#[tokio::test]
async fn provider_failure_is_a_server_error() {
    let base = serve_with(vec![None]).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/chat"))
        .json(&json!({ "messages": [{ "role": "user", "content": "hi" }] }))
        .send()
        .await
        .expect("request sent");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.expect("json body");
    assert_eq!(body["error"]["kind"], "UpstreamError");
    assert_eq!(
        body["error"]["message"],
        "Model provider 'canned' returned a response that could not be processed."
    );
}

#[tokio::test]
async fn tools_endpoint_lists_builtin_schemas() {
    let base = serve_with(Vec::new()).await;

    let body: Value = reqwest::get(format!("{base}/api/tools"))
        .await
        .expect("request sent")
        .json()
        .await
        .expect("json body");

    let names: Vec<_> = body["tools"]
        .as_array()
        .expect("tools array")
        .iter()
        .map(|tool| tool["name"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(
        names,
        vec!["getWeather", "findTennisCourts", "checkFriendsAvailability"]
    );
    assert_eq!(body["tools"][0]["parameters"]["required"], json!(["location"]));
}

#[tokio::test]
async fn openapi_document_describes_chat_route() {
    let base = serve_with(Vec::new()).await;

    let body: Value = reqwest::get(format!("{base}/api-doc/openapi.json"))
        .await
        .expect("request sent")
        .json()
        .await
        .expect("json body");

    assert!(body["paths"]["/api/chat"]["post"].is_object());
    assert!(body["paths"]["/api/tools"]["get"].is_object());
}

#[tokio::test]
async fn cors_allows_configured_origin() {
    let base = serve_with(vec![Some(ModelResponse::text("hi"))]).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/chat"))
        .header(ORIGIN, "http://localhost:3000")
        .json(&json!({ "messages": [{ "role": "user", "content": "hi" }] }))
        .send()
        .await
        .expect("request sent");

    assert_eq!(
        response
            .headers()
            .get(ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("http://localhost:3000")
    );
}
