// Agent turn tests - OpenAI client and weather tool talking HTTP to loopback fakes

#[path = "../support/mod.rs"]
mod support;

use courtside_core::agent::{AgentError, AgentReply, TurnOrchestrator};
use courtside_core::config::{AppConfig, CourtConfig};
use courtside_core::constants::DEFAULT_SYSTEM_PROMPT;
use courtside_core::model::{ModelError, OpenAIClient};
use courtside_core::tooling::ToolRegistry;
use courtside_core::tools::{FriendsAvailabilityTool, TennisCourtsTool, WeatherTool};
use courtside_core::types::ChatMessage;
use reqwest::StatusCode;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use support::{
    FakeOpenAi, OPENAI_TEST_KEY, WEATHER_TEST_KEY, fake_weather, spawn, text_completion,
    tool_completion,
};

async fn registry(weather_key: &str) -> Arc<ToolRegistry> {
    let weather_addr = spawn(fake_weather()).await;
    let registry = ToolRegistry::builder()
        .register(WeatherTool::new(
            format!("http://{weather_addr}/data/2.5/weather"),
            Some(weather_key.to_string()),
            "metric".into(),
        ))
        .register(TennisCourtsTool::new(vec![
            CourtConfig {
                name: "Victoria Park Courts".into(),
                available: true,
            },
            CourtConfig {
                name: "Riverside Tennis Club".into(),
                available: false,
            },
        ]))
        .register(FriendsAvailabilityTool::new(["Sarah"]))
        .build()
        .expect("registry builds");
    Arc::new(registry)
}

fn orchestrator(
    openai_addr: SocketAddr,
    registry: Arc<ToolRegistry>,
) -> TurnOrchestrator<OpenAIClient> {
    let client = OpenAIClient::new(
        format!("http://{openai_addr}"),
        "/v1/chat/completions".into(),
        Some(OPENAI_TEST_KEY.into()),
    );
    TurnOrchestrator::from_config(client, registry, &AppConfig::default())
}

fn london_calls() -> Vec<(&'static str, serde_json::Value)> {
    vec![
        ("getWeather", json!({ "location": "London" })),
        ("findTennisCourts", json!({ "location": "London" })),
        ("checkFriendsAvailability", json!({ "names": ["Sarah"] })),
    ]
}

#[tokio::test]
async fn london_tennis_question_runs_every_tool() {
    let fake = FakeOpenAi::new(vec![tool_completion(&london_calls())]);
    let openai_addr = spawn(fake.router()).await;
    let agent = orchestrator(openai_addr, registry(WEATHER_TEST_KEY).await);

    let reply = agent
        .run_turn(&[ChatMessage::user(
            "Can I play tennis in London tomorrow with Sarah?",
        )])
        .await
        .expect("turn succeeds");

    assert_eq!(
        serde_json::to_value(&reply).expect("serializes"),
        json!({
            "kind": "tool",
            "reasoning": ["Agent used tools"],
            "toolResults": [
                {
                    "tool": "getWeather",
                    "args": { "location": "London" },
                    "success": true,
                    "result": { "forecast": "light rain", "temp": "18.5°C" }
                },
                {
                    "tool": "findTennisCourts",
                    "args": { "location": "London" },
                    "success": true,
                    "result": [
                        { "name": "Victoria Park Courts", "available": true },
                        { "name": "Riverside Tennis Club", "available": false }
                    ]
                },
                {
                    "tool": "checkFriendsAvailability",
                    "args": { "names": ["Sarah"] },
                    "success": true,
                    "result": ["Sarah"]
                }
            ]
        })
    );

    let recorded = fake.recorded();
    assert_eq!(recorded.len(), 1, "the model is consulted exactly once");
    let body = &recorded[0];
    assert_eq!(body["model"], "gpt-4o-mini");
    assert_eq!(
        body["messages"][0],
        json!({ "role": "system", "content": DEFAULT_SYSTEM_PROMPT })
    );
    assert_eq!(body["messages"][1]["role"], "user");
    let declared: Vec<_> = body["tools"]
        .as_array()
        .expect("tools declared")
        .iter()
        .map(|tool| tool["function"]["name"].as_str().unwrap_or_default())
        .collect();
    assert_eq!(
        declared,
        vec!["getWeather", "findTennisCourts", "checkFriendsAvailability"]
    );
}

#[tokio::test]
async fn unrelated_question_gets_a_text_reply() {
    let fake = FakeOpenAi::new(vec![text_completion("Paris is the capital of France.")]);
    let openai_addr = spawn(fake.router()).await;
    let agent = orchestrator(openai_addr, registry(WEATHER_TEST_KEY).await);

    let reply = agent
        .run_turn(&[ChatMessage::user("What's the capital of France?")])
        .await
        .expect("turn succeeds");

    assert_eq!(
        reply,
        AgentReply::Text {
            text: "Paris is the capital of France.".into()
        }
    );
}

#[tokio::test]
async fn null_content_without_tools_falls_back() {
    let fake = FakeOpenAi::new(vec![(
        StatusCode::OK,
        json!({ "choices": [{ "message": { "role": "assistant", "content": null } }] }),
    )]);
    let openai_addr = spawn(fake.router()).await;
    let agent = orchestrator(openai_addr, registry(WEATHER_TEST_KEY).await);

    let reply = agent
        .run_turn(&[ChatMessage::user("...")])
        .await
        .expect("turn succeeds");
    assert_eq!(reply.text(), Some("I'm not sure, but I'll do my best to help!"));
}

#[tokio::test]
async fn weather_outage_only_fails_its_own_entry() {
    let fake = FakeOpenAi::new(vec![tool_completion(&london_calls())]);
    let openai_addr = spawn(fake.router()).await;
    let agent = orchestrator(openai_addr, registry("revoked-key").await);

    let reply = agent
        .run_turn(&[ChatMessage::user("Tennis in London?")])
        .await
        .expect("tool failures do not fail the turn");

    let results = reply.tool_results();
    assert_eq!(results.len(), 3);
    assert!(!results[0].success);
    assert_eq!(
        results[0].error().map(|payload| payload.kind()),
        Some("ToolExecutionError")
    );
    assert!(results[1].success);
    assert!(results[2].success);
}

#[tokio::test]
async fn unknown_city_is_reported_as_tool_error() {
    let fake = FakeOpenAi::new(vec![tool_completion(&[(
        "getWeather",
        json!({ "location": "Atlantis" }),
    )])]);
    let openai_addr = spawn(fake.router()).await;
    let agent = orchestrator(openai_addr, registry(WEATHER_TEST_KEY).await);

    let reply = agent
        .run_turn(&[ChatMessage::user("Weather in Atlantis?")])
        .await
        .expect("turn succeeds");
    let result = &reply.tool_results()[0];
    assert_eq!(result.args, json!({ "location": "Atlantis" }));
    assert_eq!(result.error().map(|payload| payload.kind()), Some("ToolExecutionError"));
}

#[tokio::test]
async fn schema_violation_never_reaches_the_tool() {
    let fake = FakeOpenAi::new(vec![tool_completion(&[(
        "checkFriendsAvailability",
        json!({ "names": "Sarah" }),
    )])]);
    let openai_addr = spawn(fake.router()).await;
    let agent = orchestrator(openai_addr, registry(WEATHER_TEST_KEY).await);

    let reply = agent
        .run_turn(&[ChatMessage::user("Is Sarah free?")])
        .await
        .expect("turn succeeds");
    assert_eq!(
        reply.tool_results()[0].error().map(|payload| payload.kind()),
        Some("SchemaValidationError")
    );
}

#[tokio::test]
async fn provider_http_failure_is_an_upstream_error() {
    let fake = FakeOpenAi::new(vec![(
        StatusCode::SERVICE_UNAVAILABLE,
        json!({ "error": { "message": "overloaded" } }),
    )]);
    let openai_addr = spawn(fake.router()).await;
    let agent = orchestrator(openai_addr, registry(WEATHER_TEST_KEY).await);

    let error = agent
        .run_turn(&[ChatMessage::user("hi")])
        .await
        .unwrap_err();

    assert_eq!(error.kind(), "UpstreamError");
    assert!(matches!(
        error,
        AgentError::Upstream(ModelError::Network { .. })
    ));
    assert_eq!(
        error.user_message(),
        "Model provider 'openai' is currently unavailable."
    );
}

#[tokio::test]
async fn rejected_credentials_are_an_upstream_error() {
    let fake = FakeOpenAi::new(vec![text_completion("unreachable")]);
    let openai_addr = spawn(fake.router()).await;
    let client = OpenAIClient::new(
        format!("http://{openai_addr}"),
        "/v1/chat/completions".into(),
        Some("sk-wrong".into()),
    );
    let agent = TurnOrchestrator::from_config(
        client,
        registry(WEATHER_TEST_KEY).await,
        &AppConfig::default(),
    );

    let error = agent
        .run_turn(&[ChatMessage::user("hi")])
        .await
        .unwrap_err();
    assert_eq!(
        error.user_message(),
        "Model provider 'openai' rejected the credentials."
    );
    assert!(fake.recorded().is_empty());
}

#[tokio::test]
async fn undecodable_success_body_is_an_invalid_response() {
    let fake = FakeOpenAi::new(vec![(StatusCode::OK, json!(["not", "an", "object"]))]);
    let openai_addr = spawn(fake.router()).await;
    let agent = orchestrator(openai_addr, registry(WEATHER_TEST_KEY).await);

    let error = agent
        .run_turn(&[ChatMessage::user("hi")])
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        AgentError::Upstream(ModelError::InvalidResponse { .. })
    ));
    assert_eq!(
        error.user_message(),
        "Model provider 'openai' returned a response that could not be processed."
    );
}
