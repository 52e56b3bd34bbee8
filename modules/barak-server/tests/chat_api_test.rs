//! Router-level tests for the chat endpoint, with the completion service
//! stubbed out. Covers the response-shape guarantees: 200 with all three
//! fields on every pipeline outcome, 400 only for request validation.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use ai_client::CompletionAgent;
use barak_server::chat::{
    CLARIFICATION_MESSAGE, COMPLETION_FAILED_MESSAGE, EXTRACTION_DISABLED_MESSAGE,
    EXTRACTION_FAILED_MESSAGE,
};
use barak_server::search::NoopSearch;
use barak_server::{routes, AppState};

// ---------------------------------------------------------------------------
// Stub completion agent
// ---------------------------------------------------------------------------

/// Canned completion: `Some(text)` replies with the text, `None` fails.
struct StubCompletion(Option<String>);

#[async_trait]
impl CompletionAgent for StubCompletion {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        self.0
            .clone()
            .ok_or_else(|| anyhow!("stub completion failure"))
    }
}

fn app_with_completion(completion: Option<StubCompletion>) -> Router {
    let state = Arc::new(AppState {
        ai: completion.map(|c| Arc::new(c) as Arc<dyn CompletionAgent>),
        search: Arc::new(NoopSearch),
    });
    routes::router(state)
}

fn app_replying(reply: &str) -> Router {
    app_with_completion(Some(StubCompletion(Some(reply.to_string()))))
}

async fn post_chat(app: Router, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

fn tag_texts(body: &Value) -> Vec<&str> {
    body["smartTags"]
        .as_array()
        .expect("smartTags must be an array")
        .iter()
        .map(|tag| tag["text"].as_str().expect("tag text must be a string"))
        .collect()
}

// ---------------------------------------------------------------------------
// Request validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_message_is_rejected() {
    let (status, body) = post_chat(app_replying("{}"), r#"{"message": ""}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("empty message"));
}

#[tokio::test]
async fn missing_message_is_rejected() {
    let (status, _) = post_chat(app_replying("{}"), r#"{}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let (status, body) = post_chat(app_replying("{}"), "not json at all").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("invalid JSON body"));
}

// ---------------------------------------------------------------------------
// Pipeline outcomes (always 200, always the three fields)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn actionable_query_yields_tags() {
    // Fenced, the way models actually answer; exercises the sanitizer too.
    let reply = "```json\n{\"action\": \"buy\", \"location\": \"lyon\", \
                 \"property_type\": \"apartment\", \"rooms\": 3, \"budget\": 250000, \
                 \"features\": [\"balcon\"]}\n```";
    let (status, body) = post_chat(
        app_replying(reply),
        r#"{"message": "buy an apartment in Lyon, budget 250000, 3 rooms"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["aiMessage"].as_str().unwrap().starts_with("Ok, je cherche :"));
    assert_eq!(body["properties"], json!([]));

    let texts = tag_texts(&body);
    assert_eq!(texts, vec!["Lyon", "Appartement", "3 pièces", "250 000€", "Balcon"]);
    // The action itself never becomes a tag.
    assert!(!texts.iter().any(|t| t.eq_ignore_ascii_case("buy")));
}

#[tokio::test]
async fn ambiguous_action_asks_for_clarification() {
    let (status, body) = post_chat(
        app_replying(r#"{"action": "find", "location": "Paris"}"#),
        r#"{"message": "find me something in Paris"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["aiMessage"], CLARIFICATION_MESSAGE);
    // Clarification discards any tags and never reaches search.
    assert_eq!(body["smartTags"], json!([]));
    assert_eq!(body["properties"], json!([]));
}

#[tokio::test]
async fn unparseable_reply_asks_to_rephrase() {
    let (status, body) = post_chat(
        app_replying("I would be happy to help you find a property!"),
        r#"{"message": "hello"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["aiMessage"], EXTRACTION_FAILED_MESSAGE);
    assert_eq!(body["smartTags"], json!([]));
}

#[tokio::test]
async fn completion_failure_still_returns_well_formed_200() {
    let (status, body) = post_chat(
        app_with_completion(Some(StubCompletion(None))),
        r#"{"message": "buy a house"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["aiMessage"], COMPLETION_FAILED_MESSAGE);
    assert_eq!(body["properties"], json!([]));
    assert_eq!(body["smartTags"], json!([]));
}

#[tokio::test]
async fn disabled_extraction_answers_with_fixed_message() {
    let (status, body) =
        post_chat(app_with_completion(None), r#"{"message": "buy a house"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["aiMessage"], EXTRACTION_DISABLED_MESSAGE);
}

#[tokio::test]
async fn unparseable_budget_falls_back_to_raw_text() {
    let reply = r#"{"action": "rent", "budget": "not a number"}"#;
    let (status, body) = post_chat(app_replying(reply), r#"{"message": "rent"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(tag_texts(&body), vec!["not a number"]);
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_returns_ok() {
    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app_replying("{}").oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
