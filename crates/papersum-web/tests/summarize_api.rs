//! Integration tests for the summarization HTTP endpoint.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use papersum_llm::backend::LlmError;
use papersum_llm::mock::MockBackend;
use papersum_web::{router::build_router, state::AppState};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

const GOOD_REPLY: &str = "```json\n{\"summary\":\"s\",\"keywords\":[\"a\",\"b\"],\"citation\":\"c\"}\n```";

fn post_raw(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

fn post_json(body: Value) -> Request<Body> {
    post_raw("/summarize-paper", serde_json::to_string(&body).unwrap())
}

async fn send(state: AppState, req: Request<Body>) -> (StatusCode, Value) {
    let app = build_router(state);
    let resp = ServiceExt::<Request<Body>>::oneshot(app, req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), 100_000).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn state_with(mock: &Arc<MockBackend>) -> AppState {
    AppState::with_backend(mock.clone())
}

fn paper(content: &str) -> Value {
    json!({"content": content, "summaryStyle": "short", "citationFormat": "mla"})
}

// --- success ---

#[tokio::test]
async fn test_code_fenced_reply_is_returned_as_envelope() {
    let mock = Arc::new(MockBackend::new().with_reply(GOOD_REPLY));
    let (status, body) = send(state_with(&mock), post_json(paper("some paper"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"summary": "s", "keywords": ["a", "b"], "citation": "c"}));
}

#[tokio::test]
async fn test_alias_route() {
    let mock = Arc::new(MockBackend::new().with_reply(GOOD_REPLY));
    let req = post_raw("/api/summarize", serde_json::to_string(&paper("p")).unwrap());
    let (status, _) = send(state_with(&mock), req).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_body_decoded_without_content_type() {
    let mock = Arc::new(MockBackend::new().with_reply(GOOD_REPLY));
    let req = Request::builder()
        .method("POST")
        .uri("/summarize-paper")
        .body(Body::from(r#"{"content":"p"}"#))
        .unwrap();
    let (status, _) = send(state_with(&mock), req).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_prompt_carries_options() {
    let mock = Arc::new(MockBackend::new().with_reply(GOOD_REPLY));
    let body = json!({"content": "p", "summaryStyle": "nonsense", "citationFormat": "ieee"});
    send(state_with(&mock), post_json(body)).await;

    let sent = mock.last_request().unwrap();
    let prompt = &sent.messages[1].content;
    assert!(prompt.contains("a detailed 1-paragraph summary"));
    assert!(prompt.contains("in IEEE format"));
}

#[tokio::test]
async fn test_non_string_style_uses_detailed() {
    let mock = Arc::new(MockBackend::new().with_reply(GOOD_REPLY));
    let body = json!({"content": "p", "summaryStyle": 5, "citationFormat": "apa"});
    let (status, _) = send(state_with(&mock), post_json(body)).await;
    assert_eq!(status, StatusCode::OK);

    let prompt = mock.last_request().unwrap().messages[1].content.clone();
    assert!(prompt.contains("a detailed 1-paragraph summary"));
}

#[tokio::test]
async fn test_long_content_is_truncated_in_prompt() {
    let mock = Arc::new(MockBackend::new().with_reply(GOOD_REPLY));
    let content = format!("{}OVERFLOW", "x".repeat(8000));
    send(state_with(&mock), post_json(paper(&content))).await;

    let prompt = mock.last_request().unwrap().messages[1].content.clone();
    assert!(prompt.contains(&"x".repeat(8000)));
    assert!(!prompt.contains("OVERFLOW"));
}

// --- input errors ---

#[tokio::test]
async fn test_empty_content_is_400_without_upstream_call() {
    let mock = Arc::new(MockBackend::new().with_reply(GOOD_REPLY));
    let (status, body) = send(state_with(&mock), post_json(paper(""))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "No content provided"}));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_absent_content_is_400() {
    let mock = Arc::new(MockBackend::new());
    let (status, body) = send(state_with(&mock), post_json(json!({"summaryStyle": "short"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No content provided");
}

#[tokio::test]
async fn test_empty_content_wins_over_missing_key() {
    let (status, _) = send(AppState::unconfigured(), post_json(paper(""))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_body_is_500() {
    let mock = Arc::new(MockBackend::new());
    let (status, body) = send(state_with(&mock), post_raw("/summarize-paper", "{not json")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
}

// --- configuration ---

#[tokio::test]
async fn test_missing_api_key_is_500() {
    let (status, body) = send(AppState::unconfigured(), post_json(paper("p"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("API key is not configured"));
}

// --- upstream pass-through ---

#[tokio::test]
async fn test_upstream_429_passes_through() {
    let mock = Arc::new(MockBackend::new().with_status(429));
    let (status, body) = send(state_with(&mock), post_json(paper("p"))).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body, json!({"error": "Rate limit exceeded. Please try again later."}));
}

#[tokio::test]
async fn test_upstream_402_passes_through() {
    let mock = Arc::new(MockBackend::new().with_status(402));
    let (status, body) = send(state_with(&mock), post_json(paper("p"))).await;
    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
    assert_eq!(body, json!({"error": "Payment required. Please add credits to your workspace."}));
}

#[tokio::test]
async fn test_other_upstream_status_is_500_with_code() {
    let mock = Arc::new(MockBackend::new().with_status(503));
    let (status, body) = send(state_with(&mock), post_json(paper("p"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "AI API error: 503"}));
}

#[tokio::test]
async fn test_gateway_reply_without_content_is_500() {
    let err = LlmError::MalformedResponse("no choices".to_string());
    let mock = Arc::new(MockBackend::new().with_error(err));
    let (status, body) = send(state_with(&mock), post_json(paper("p"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Malformed AI response: no choices"}));
}

// --- response-shape errors ---

#[tokio::test]
async fn test_unparsable_reply_is_generic_500() {
    let raw = "Sorry, I could not read this paper (secret internal detail).";
    let mock = Arc::new(MockBackend::new().with_reply(raw));
    let (status, body) = send(state_with(&mock), post_json(paper("p"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to parse AI response as JSON"}));
    assert!(!body.to_string().contains("secret internal detail"));
}

#[tokio::test]
async fn test_missing_citation_is_invalid_structure() {
    let mock = Arc::new(MockBackend::new().with_reply(r#"{"summary":"s","keywords":["a"]}"#));
    let (status, body) = send(state_with(&mock), post_json(paper("p"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Invalid response structure from AI"}));
}

// --- CORS / health ---

#[tokio::test]
async fn test_options_preflight() {
    let req = Request::builder()
        .method("OPTIONS")
        .uri("/summarize-paper")
        .header("origin", "https://example.org")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type,apikey")
        .body(Body::empty())
        .unwrap();
    let app = build_router(AppState::unconfigured());
    let resp = ServiceExt::<Request<Body>>::oneshot(app, req).await.unwrap();

    assert!(resp.status().is_success());
    let headers = resp.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    let allowed = headers["access-control-allow-headers"].to_str().unwrap();
    for h in ["authorization", "x-client-info", "apikey", "content-type"] {
        assert!(allowed.contains(h), "{allowed} lacks {h}");
    }
    let bytes = axum::body::to_bytes(resp.into_body(), 1_000).await.unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_health_reports_configuration() {
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(AppState::unconfigured(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["upstreamConfigured"], false);

    let mock = Arc::new(MockBackend::new());
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (_, body) = send(state_with(&mock), req).await;
    assert_eq!(body["upstreamConfigured"], true);
    assert_eq!(body["model"], "mock-model");
}
