// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// tests/docs/test_pipeline.rs

use docs_lookup::docs::{ApiKeySource, FetchError, LookupStatus, SearchError};
use docs_lookup::DocsConfig;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> DocsConfig {
    let mut config = DocsConfig::default();
    config.search = config
        .search
        .with_endpoint(format!("{}/search", server.uri()))
        .with_api_key("pipeline-key");
    config.content.timeout_per_page_secs = 5;
    config
}

#[tokio::test]
async fn test_full_lookup_against_local_servers() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_json(json!({
            "q": "site:docs.djangoproject.com model forms",
            "num": 3
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "organic": [
                {
                    "title": "Creating forms from models",
                    "link": format!("{base}/topics/forms/modelforms/"),
                    "snippet": "ModelForm"
                },
                {
                    "title": "Removed page",
                    "link": format!("{base}/gone/")
                },
                {
                    "title": "Form API",
                    "link": format!("{base}/ref/forms/api/"),
                    "snippet": "Bound and unbound forms"
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/topics/forms/modelforms/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html><body><h1>ModelForm</h1>\n<script>ga()</script>\n<p>class ArticleForm</p></body></html>",
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/gone/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ref/forms/api/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>Form.is_bound</p>"))
        .mount(&server)
        .await;

    let lookup = config_for(&server).build_lookup().unwrap();
    let report = lookup.lookup("model forms", "django").await;
    let text = report.render();

    assert_eq!(
        report.status(),
        &LookupStatus::Completed {
            fetched: 2,
            failed: 1
        }
    );
    assert_eq!(text.matches("--- Result ").count(), 3);
    assert!(text.starts_with("Documentation search results for 'model forms' in django:\n\n"));

    let first = text.find("--- Result 1: Creating forms from models ---").unwrap();
    let second = text.find("--- Result 2: Removed page ---").unwrap();
    let third = text.find("--- Result 3: Form API ---").unwrap();
    assert!(first < second && second < third);

    assert!(text[first..second].contains("Content:\nModelForm class ArticleForm\n"));
    assert!(!text.contains("ga()"));
    assert!(text[second..third].contains(&format!(
        "Content:\nHTTP error fetching {base}/gone/: 404\n"
    )));
    assert!(text[third..].contains("Content:\nForm.is_bound\n"));

    let failed = &report.entries()[1];
    assert!(matches!(
        failed.page.error(),
        Some(FetchError::HttpStatus { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_search_outage_yields_no_results_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let lookup = config_for(&server).build_lookup().unwrap();
    let report = lookup.lookup("middleware", "fastapi").await;

    assert_eq!(
        report.render(),
        "No results found for 'middleware' in fastapi documentation"
    );
    assert!(matches!(
        report.status(),
        LookupStatus::SearchUnavailable { .. }
    ));
}

#[tokio::test]
async fn test_unsupported_library_never_reaches_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let lookup = config_for(&server).build_lookup().unwrap();
    let text = lookup.lookup("routing", "rails").await.render();

    assert_eq!(
        text,
        "Library 'rails' not supported. Available libraries: langchain, llama-index, \
         openai, anthropic, fastapi, django, flask, pytorch, tensorflow"
    );
}

#[tokio::test]
async fn test_report_serializes_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "organic": [] })))
        .mount(&server)
        .await;

    let lookup = config_for(&server).build_lookup().unwrap();
    let report = lookup.lookup("agents", "langchain").await;
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["status"]["status"], "no_results");
    assert_eq!(value["library"], "langchain");
    assert_eq!(value["entries"], json!([]));
}

#[tokio::test]
async fn test_missing_credential_reports_unavailable_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.search.api_key = ApiKeySource::Env("DOCS_LOOKUP_PIPELINE_UNSET_KEY".to_string());
    let lookup = config.build_lookup().unwrap();
    let report = lookup.lookup("embeddings", "openai").await;

    assert_eq!(
        report.render(),
        "No results found for 'embeddings' in openai documentation"
    );
    assert!(matches!(
        report.search_failure(),
        Some(SearchError::NoApiKey { .. })
    ));
}
