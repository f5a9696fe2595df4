// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Request-level errors for the analysis API.
//!
//! Only input problems are errors here. Once a URL is accepted, network
//! failures are folded into individual check verdicts and never surface as
//! an error response.

use crate::models::analysis::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("URL is required")]
    MissingUrl,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl AnalyzeError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AnalyzeError::MissingUrl
            | AnalyzeError::InvalidUrl(_)
            | AnalyzeError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::info!(%status, error = %self, "rejected analysis request");
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_errors_render_as_bad_request_json() {
        let response = AnalyzeError::InvalidUrl("URL has no host".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.error, "Invalid URL: URL has no host");
    }

    #[test]
    fn test_all_variants_are_client_errors() {
        for err in [
            AnalyzeError::MissingUrl,
            AnalyzeError::InvalidUrl("x".to_string()),
            AnalyzeError::InvalidBody("x".to_string()),
        ] {
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        }
    }
}
