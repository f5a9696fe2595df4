// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Application state, route handlers, and router construction.
//!
//! This module is `pub` so that integration tests can build a test router directly
//! without starting the full binary.

use crate::error::AnalyzeError;
use crate::models::analysis::{AnalysisRequest, AnalysisResult, ErrorResponse};
use crate::models::check::{CheckStatus, CheckVerdict, Report};
use crate::models::config::ServerConfig;
use crate::models::version::{HealthResponse, VersionResponse};
use crate::services::analyzer::Analyzer;
use anyhow::Context;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application version extracted from `Cargo.toml` at compile time.
/// The patch segment can be overridden via `SEO_PATCH_VERSION` (see `build.rs`).
pub const VERSION: &str = env!("SEO_VERSION");

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Shared application state injected into every route handler via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Analyzer,
}

impl AppState {
    pub fn new(analyzer: Analyzer) -> Self {
        Self { analyzer }
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

/// Analyze one page and return its SEO report.
#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body = AnalysisRequest,
    responses(
        (status = 200, description = "Analysis completed", body = AnalysisResult),
        (status = 400, description = "Missing or malformed URL", body = ErrorResponse)
    )
)]
pub async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, AnalyzeError> {
    let Json(payload) = payload.map_err(|e| AnalyzeError::InvalidBody(e.body_text()))?;

    state
        .analyzer
        .analyze(payload.url.as_deref())
        .await
        .map(Json)
}

#[utoipa::path(get, path = "/version", responses((status = 200, body = VersionResponse)))]
pub async fn version_handler() -> Json<VersionResponse> {
    Json(VersionResponse {
        service: "seo-analyzer".to_string(),
        version: VERSION.to_string(),
    })
}

#[utoipa::path(get, path = "/health", responses((status = 200, body = HealthResponse)))]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[derive(OpenApi)]
#[openapi(
    paths(analyze_handler, version_handler, health_handler),
    components(schemas(
        AnalysisRequest,
        AnalysisResult,
        ErrorResponse,
        Report,
        CheckVerdict,
        CheckStatus,
        VersionResponse,
        HealthResponse
    )),
    info(title = "SEO Analyzer API", description = "Single-page SEO analysis")
)]
pub struct ApiDoc;

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the Axum application router, including the Swagger UI.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze_handler))
        .route("/version", get(version_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

/// Bind `config`'s address and serve until Ctrl-C.
pub async fn serve(config: ServerConfig, state: AppState) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(%addr, version = VERSION, "seo-analyzer listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
