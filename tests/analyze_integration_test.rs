// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

// End-to-end tests: the real router and reqwest client against a local
// mockito site. No external network access is needed.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use seo_analyzer::app::{create_router, AppState};
use seo_analyzer::models::analysis::AnalysisResult;
use seo_analyzer::models::check::{CheckName, CheckStatus};
use seo_analyzer::models::config::AnalyzerSettings;
use seo_analyzer::services::analyzer::Analyzer;
use seo_analyzer::services::fetcher::HttpPageClient;
use std::sync::Arc;
use tower::ServiceExt;

fn create_test_app() -> Router {
    let settings = AnalyzerSettings::default();
    let client = HttpPageClient::new(&settings.user_agent).expect("Failed to build client");
    create_router(AppState::new(Analyzer::new(Arc::new(client), settings)))
}

async fn analyze(app: Router, url: &str) -> (StatusCode, AnalysisResult) {
    let body = serde_json::json!({ "url": url }).to_string();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/analyze")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let result: AnalysisResult = serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("unexpected body {:?}: {e}", String::from_utf8_lossy(&bytes)));
    (status, result)
}

fn page(title: &str, description: Option<&str>, viewport: bool) -> String {
    let description = description
        .map(|d| format!(r#"<meta name="description" content="{d}">"#))
        .unwrap_or_default();
    let viewport = if viewport {
        r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#
    } else {
        ""
    };
    format!(
        "<!DOCTYPE html><html><head><title>{title}</title>{description}{viewport}</head><body><h1>Hi</h1></body></html>"
    )
}

#[tokio::test]
async fn test_well_optimized_site_scores_100() {
    let mut server = mockito::Server::new_async().await;
    let title = "A well sized page title for search engines";
    let description = "d".repeat(150);
    let _page = server
        .mock("GET", "/")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(page(title, Some(&description), true))
        .create_async()
        .await;
    let _robots = server
        .mock("HEAD", "/robots.txt")
        .with_status(200)
        .create_async()
        .await;
    let _sitemap = server
        .mock("HEAD", "/sitemap.xml")
        .with_status(200)
        .create_async()
        .await;

    let (status, result) = analyze(create_test_app(), &server.url()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result.url, server.url());
    assert_eq!(result.score, 100, "report: {:?}", result.report);
    assert!(result.recommendations.is_empty());

    let title_verdict = result.report.get(CheckName::MetaTitle).unwrap();
    assert_eq!(title_verdict.content.as_deref(), Some(title));
    assert_eq!(title_verdict.length, Some(title.chars().count()));
}

#[tokio::test]
async fn test_site_with_issues_gets_recommendations() {
    let mut server = mockito::Server::new_async().await;
    let _page = server
        .mock("GET", "/")
        .with_status(200)
        .with_body(page("Short", None, false))
        .create_async()
        .await;
    let _robots = server
        .mock("HEAD", "/robots.txt")
        .with_status(404)
        .create_async()
        .await;
    let _sitemap = server
        .mock("HEAD", "/sitemap.xml")
        .with_status(404)
        .create_async()
        .await;

    let (status, result) = analyze(create_test_app(), &server.url()).await;
    assert_eq!(status, StatusCode::OK);

    let report = &result.report;
    assert_eq!(
        report.get(CheckName::MetaTitle).unwrap().status,
        CheckStatus::Warning
    );
    assert_eq!(
        report.get(CheckName::MetaDescription).unwrap().status,
        CheckStatus::Fail
    );
    assert_eq!(
        report.get(CheckName::MobileFriendly).unwrap().status,
        CheckStatus::Warning
    );
    assert_eq!(
        report.get(CheckName::RobotsTxt).unwrap().status,
        CheckStatus::Warning
    );
    assert_eq!(
        report.get(CheckName::SitemapXml).unwrap().status,
        CheckStatus::Fail
    );

    // One recommendation per non-passing content and probe check
    let non_passing = report
        .entries()
        .filter(|(_, v)| v.status != CheckStatus::Pass)
        .count();
    assert_eq!(result.recommendations.len(), non_passing);
    assert!(result
        .recommendations
        .iter()
        .any(|r| r.contains("30-60") && r.contains("currently 5")));
}

#[tokio::test]
async fn test_error_status_page_fails_load_check_but_is_inspected() {
    let mut server = mockito::Server::new_async().await;
    let _page = server
        .mock("GET", "/gone")
        .with_status(410)
        .with_body(page("A well sized page title for search engines", None, true))
        .create_async()
        .await;
    let _robots = server
        .mock("HEAD", "/robots.txt")
        .with_status(200)
        .create_async()
        .await;
    let _sitemap = server
        .mock("HEAD", "/sitemap.xml")
        .with_status(200)
        .create_async()
        .await;

    let url = format!("{}/gone", server.url());
    let (status, result) = analyze(create_test_app(), &url).await;

    assert_eq!(status, StatusCode::OK);
    let load = result.report.get(CheckName::PageLoadTime).unwrap();
    assert_eq!(load.status, CheckStatus::Fail);
    assert!(load.details.contains("410"));
    assert_eq!(
        result.report.get(CheckName::MetaTitle).unwrap().status,
        CheckStatus::Pass
    );
}

#[tokio::test]
async fn test_unreachable_site_still_returns_report() {
    // Nothing listens on the discard port
    let (status, result) = analyze(create_test_app(), "http://127.0.0.1:9/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result.score, 0);
    assert_eq!(result.report.entries().count(), 6);
    for (name, verdict) in result.report.entries() {
        assert_eq!(verdict.status, CheckStatus::Fail, "{name} should fail");
    }
}

#[tokio::test]
async fn test_response_json_shape() {
    let mut server = mockito::Server::new_async().await;
    let _page = server
        .mock("GET", "/")
        .with_status(200)
        .with_body("<html><head></head><body></body></html>")
        .create_async()
        .await;
    let _robots = server
        .mock("HEAD", "/robots.txt")
        .with_status(200)
        .create_async()
        .await;
    let _sitemap = server
        .mock("HEAD", "/sitemap.xml")
        .with_status(200)
        .create_async()
        .await;

    let body = serde_json::json!({ "url": server.url() }).to_string();
    let response = create_test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/analyze")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    let keys: Vec<&str> = json["report"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        keys.len(),
        6,
        "report should contain exactly the six checks: {keys:?}"
    );
    for name in CheckName::ALL {
        assert!(json["report"][name.as_str()]["status"].is_string());
    }
    assert_eq!(json["report"]["metaTitle"]["status"], "fail");
    assert!(json["report"]["metaTitle"].get("length").is_none());
    assert!(json["score"].is_u64());
    assert!(json["recommendations"].is_array());
}
