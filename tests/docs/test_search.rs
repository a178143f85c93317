// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// tests/docs/test_search.rs

use docs_lookup::docs::{
    ApiKeySource, SearchConfig, SearchError, SearchProvider, SearchService, SerperSearchProvider,
};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> SearchConfig {
    SearchConfig::default()
        .with_endpoint(format!("{}/search", server.uri()))
        .with_api_key("test-key")
}

#[tokio::test]
async fn test_serper_request_shape_and_mapping() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .and(header("X-API-KEY", "test-key"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "q": "site:flask.palletsprojects.com blueprints",
            "num": 3
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "searchParameters": { "q": "site:flask.palletsprojects.com blueprints" },
            "organic": [
                {
                    "title": "Modular Applications with Blueprints",
                    "link": "https://flask.palletsprojects.com/blueprints/",
                    "snippet": "Flask uses a concept of blueprints",
                    "position": 1
                },
                { "title": "No link here", "snippet": "dropped" },
                {
                    "link": "https://flask.palletsprojects.com/api/",
                    "position": 3
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = SearchService::new(&config_for(&server)).unwrap();
    let response = service
        .search("site:flask.palletsprojects.com blueprints")
        .await;

    assert!(response.failure().is_none());
    assert_eq!(response.provider, "serper");
    assert_eq!(response.result_count(), 2);

    let first = &response.results()[0];
    assert_eq!(
        first.title.as_deref(),
        Some("Modular Applications with Blueprints")
    );
    assert_eq!(first.link, "https://flask.palletsprojects.com/blueprints/");
    assert_eq!(first.position, 1);

    let second = &response.results()[1];
    assert_eq!(second.title, None);
    assert_eq!(second.snippet, None);
    assert_eq!(second.position, 2);
}

#[tokio::test]
async fn test_missing_organic_section_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "knowledgeGraph": {} })))
        .mount(&server)
        .await;

    let response = SearchService::new(&config_for(&server))
        .unwrap()
        .search("anything")
        .await;

    assert!(response.is_empty());
    assert!(response.failure().is_none());
}

#[tokio::test]
async fn test_server_error_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let response = SearchService::new(&config_for(&server))
        .unwrap()
        .search("anything")
        .await;

    assert!(response.is_empty());
    assert_eq!(
        response.failure(),
        Some(&SearchError::ApiError {
            status: 500,
            message: "upstream exploded".to_string()
        })
    );
}

#[tokio::test]
async fn test_unauthorized_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(403).set_body_string("bad key"))
        .mount(&server)
        .await;

    let provider = SerperSearchProvider::new(&config_for(&server)).unwrap();
    let err = provider.search("anything", 3).await.unwrap_err();

    assert!(matches!(err, SearchError::ApiError { status: 403, .. }));
}

#[tokio::test]
async fn test_slow_provider_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "organic": [] }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.request_timeout_secs = 1;
    let response = SearchService::new(&config).unwrap().search("slow").await;

    assert!(response.is_empty());
    assert_eq!(
        response.failure(),
        Some(&SearchError::Timeout { timeout_ms: 1_000 })
    );
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let response = SearchService::new(&config_for(&server))
        .unwrap()
        .search("anything")
        .await;

    assert!(response.is_empty());
    assert!(matches!(
        response.failure(),
        Some(SearchError::Decode { .. })
    ));
}

#[tokio::test]
async fn test_missing_key_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "organic": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.api_key = ApiKeySource::Env("DOCS_LOOKUP_TEST_UNSET_KEY".to_string());
    let service = SearchService::new(&config).unwrap();

    assert!(!service.is_available());
    let response = service.search("anything").await;

    assert!(response.is_empty());
    assert_eq!(
        response.failure(),
        Some(&SearchError::NoApiKey {
            provider: "serper".to_string(),
            env_var: "DOCS_LOOKUP_TEST_UNSET_KEY".to_string()
        })
    );
}

#[tokio::test]
async fn test_blank_static_key_counts_as_missing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = config_for(&server).with_api_key("   ");
    let response = SearchService::new(&config).unwrap().search("q").await;

    assert!(matches!(
        response.failure(),
        Some(SearchError::NoApiKey { .. })
    ));
}
