//! Integration tests for coach-service.
//!
//! These spawn the real server on a random port with the mock provider.

use coach_service::config::{CoachConfig, ProviderKind};
use coach_service::services::metrics::init_metrics;
use coach_service::startup::Application;
use reqwest::Client;
use std::time::Duration;

/// Spawn the application on a random port and return the port number.
async fn spawn_app(provider: ProviderKind) -> u16 {
    let mut config = CoachConfig::default();
    config.common.host = "127.0.0.1".to_string();
    config.common.port = 0; // Random port
    config.provider = provider;
    config.web.static_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_string();

    let app = Application::build(config)
        .await
        .expect("Failed to build application");

    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    port
}

#[tokio::test]
async fn health_check_returns_ok() {
    let port = spawn_app(ProviderKind::Mock).await;
    let client = Client::new();

    let response = client
        .get(format!("http://127.0.0.1:{}/health", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "coach-service");
}

#[tokio::test]
async fn readiness_reflects_credential() {
    let ready_port = spawn_app(ProviderKind::Mock).await;
    // Gemini without GOOGLE_API_KEY
    let unready_port = spawn_app(ProviderKind::Gemini).await;
    let client = Client::new();

    let ready = client
        .get(format!("http://127.0.0.1:{}/ready", ready_port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(ready.status().as_u16(), 200);

    let unready = client
        .get(format!("http://127.0.0.1:{}/ready", unready_port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(unready.status().as_u16(), 503);
}

#[tokio::test]
async fn coach_round_trip_with_mock_provider() {
    init_metrics().expect("Failed to init metrics");
    let port = spawn_app(ProviderKind::Mock).await;
    let client = Client::new();

    let response = client
        .post(format!("http://127.0.0.1:{}/api/coach", port))
        .json(&serde_json::json!({ "prompt": "Bonjour", "type": "scenario" }))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["text"].as_str().unwrap().contains("Bonjour"));

    let metrics = client
        .get(format!("http://127.0.0.1:{}/metrics", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request")
        .text()
        .await
        .expect("Failed to read metrics");
    assert!(metrics.contains("coach_requests_total"));
    assert!(metrics.contains("path=\"/api/coach\""));
}
