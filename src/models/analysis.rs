// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::models::check::Report;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to analyze a single page
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AnalysisRequest {
    /// Absolute URL, or a bare host such as `example.com` (https is assumed)
    #[serde(default)]
    pub url: Option<String>,
}

/// Result of analyzing a single page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    /// The protocol-normalized URL that was analyzed
    pub url: String,
    /// Normalized score between 0 and 100
    pub score: u8,
    pub report: Report,
    /// Remediation hints, in check order
    pub recommendations: Vec<String>,
}

/// Body returned for rejected requests
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
