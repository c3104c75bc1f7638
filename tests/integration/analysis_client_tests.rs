/*!
 * Integration tests for the HTTP analysis client
 */

use axum::{http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use std::time::Duration;

use keylight::errors::ProviderError;
use keylight::providers::analysis::AnalysisClient;
use keylight::providers::Analyzer;

use crate::common::{init_logging, spawn_server};

#[tokio::test]
async fn test_analyze_success_shouldReturnSentencesAndWords() {
    init_logging();
    let app = Router::new().route(
        "/analyze",
        post(|Json(body): Json<Value>| async move {
            let text = body["text"].as_str().unwrap_or_default().to_string();
            let first = text.split_inclusive('.').next().unwrap_or_default().to_string();
            Json(json!({ "sentences": [first], "words": ["Revenue"] }))
        }),
    );
    let base_url = spawn_server(app).await;

    let client = AnalysisClient::new(base_url, Duration::from_secs(5));
    let result = client.analyze("Revenue grew. Costs fell.").await.unwrap();

    assert_eq!(result.sentences, vec!["Revenue grew.".to_string()]);
    assert_eq!(result.words, vec!["Revenue".to_string()]);
}

#[tokio::test]
async fn test_analyze_errorStatus_shouldCarryStatusText() {
    init_logging();
    let app = Router::new().route(
        "/analyze",
        post(|| async { (StatusCode::BAD_REQUEST, Json(json!({ "error": "No text provided" }))) }),
    );
    let base_url = spawn_server(app).await;

    let client = AnalysisClient::new(base_url, Duration::from_secs(5));
    match client.analyze("").await {
        Err(ProviderError::ApiError { status_code, message }) => {
            assert_eq!(status_code, 400);
            assert!(message.contains("Bad Request"), "message: {}", message);
            assert!(message.contains("No text provided"), "message: {}", message);
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_analyze_malformedBody_shouldReturnParseError() {
    init_logging();
    let app = Router::new().route("/analyze", post(|| async { "definitely not json" }));
    let base_url = spawn_server(app).await;

    let client = AnalysisClient::new(base_url, Duration::from_secs(5));
    let err = client.analyze("text").await.unwrap_err();
    assert!(matches!(err, ProviderError::ParseError(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_analyze_missingFields_shouldDefaultToEmpty() {
    let app = Router::new().route("/analyze", post(|| async { Json(json!({})) }));
    let base_url = spawn_server(app).await;

    let client = AnalysisClient::new(base_url, Duration::from_secs(5));
    let result = client.analyze("text").await.unwrap();
    assert!(result.sentences.is_empty());
    assert!(result.words.is_empty());
}

#[tokio::test]
async fn test_analyze_unreachableServer_shouldReturnConnectionError() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = AnalysisClient::new(format!("http://{}", addr), Duration::from_secs(5));
    let err = client.analyze("text").await.unwrap_err();
    assert!(matches!(err, ProviderError::ConnectionError(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_analyze_slowServer_shouldTimeOut() {
    let app = Router::new().route(
        "/analyze",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(json!({ "sentences": [], "words": [] }))
        }),
    );
    let base_url = spawn_server(app).await;

    let client = AnalysisClient::new(base_url, Duration::from_millis(200));
    let err = client.analyze("text").await.unwrap_err();
    assert!(matches!(err, ProviderError::ConnectionError(_)), "got {:?}", err);
}
