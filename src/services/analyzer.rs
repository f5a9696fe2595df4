// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Single-page analysis pipeline: validate, fetch and probe, evaluate,
//! score, assemble.

use crate::error::AnalyzeError;
use crate::models::analysis::AnalysisResult;
use crate::models::check::{CheckName, Report};
use crate::models::config::AnalyzerSettings;
use crate::models::fetch::{ExistenceOutcome, FetchOutcome};
use crate::services::evaluator::{self, ContentCheck, Evaluation};
use crate::services::fetcher::PageClient;
use crate::services::inspector::inspect;
use crate::services::logging::redact_url;
use crate::services::prober::{probe, ROBOTS_TXT_PATH, SITEMAP_XML_PATH};
use crate::services::scorer;
use std::sync::Arc;
use url::Url;

/// Turn user input into an absolute http(s) URL.
///
/// Input without a leading scheme gets `https://` prepended. Only the part
/// before the first `/`, `?` or `#` is looked at, so a URL inside the query
/// does not count as a scheme. Returns the normalized string as typed (for
/// echoing back) together with the parsed URL.
pub fn normalize_url(raw: Option<&str>) -> Result<(String, Url), AnalyzeError> {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(AnalyzeError::MissingUrl);
    }

    let has_scheme = trimmed
        .split_once("://")
        .is_some_and(|(scheme, _)| !scheme.contains(['/', '?', '#']));
    let normalized = if has_scheme {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let parsed =
        Url::parse(&normalized).map_err(|e| AnalyzeError::InvalidUrl(e.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AnalyzeError::InvalidUrl(format!(
            "unsupported scheme '{}'",
            parsed.scheme()
        )));
    }

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(AnalyzeError::InvalidUrl("URL has no host".to_string()));
    }

    Ok((normalized, parsed))
}

/// Runs analyses against a shared HTTP client.
#[derive(Clone)]
pub struct Analyzer {
    client: Arc<dyn PageClient>,
    settings: AnalyzerSettings,
}

impl Analyzer {
    pub fn new(client: Arc<dyn PageClient>, settings: AnalyzerSettings) -> Self {
        Self { client, settings }
    }

    /// Validate `raw_url` and analyze the page it points to.
    ///
    /// Only input validation can fail; network trouble is reflected in the
    /// individual verdicts.
    pub async fn analyze(&self, raw_url: Option<&str>) -> Result<AnalysisResult, AnalyzeError> {
        let (normalized, url) = normalize_url(raw_url)?;
        Ok(self.analyze_url(normalized, &url).await)
    }

    async fn analyze_url(&self, normalized: String, url: &Url) -> AnalysisResult {
        tracing::info!(url = %redact_url(url), "analyzing page");

        let client = self.client.as_ref();
        let (page, robots, sitemap) = tokio::join!(
            client.get(url, self.settings.fetch_timeout),
            probe(client, url, ROBOTS_TXT_PATH, self.settings.probe_timeout),
            probe(client, url, SITEMAP_XML_PATH, self.settings.probe_timeout),
        );

        let result = assemble(normalized, evaluate_all(&page, &robots, &sitemap));

        tracing::info!(
            url = %redact_url(url),
            score = result.score,
            recommendations = result.recommendations.len(),
            "analysis complete"
        );
        result
    }
}

/// Evaluate all six checks, in [`CheckName::ALL`] order.
///
/// The document is only inspected when the fetch produced a body; otherwise
/// every content check is forced to fail.
pub fn evaluate_all(
    page: &FetchOutcome,
    robots: &ExistenceOutcome,
    sitemap: &ExistenceOutcome,
) -> Vec<(CheckName, Evaluation)> {
    let signals = match page {
        FetchOutcome::Success { body, .. } => Some(inspect(body)),
        FetchOutcome::Failure { .. } => None,
    };

    CheckName::ALL
        .into_iter()
        .map(|name| {
            let evaluation = match (name, &signals) {
                (CheckName::PageLoadTime, _) => evaluator::evaluate_page_load(page),
                (CheckName::RobotsTxt, _) => evaluator::evaluate_robots(robots),
                (CheckName::SitemapXml, _) => evaluator::evaluate_sitemap(sitemap),
                (CheckName::MetaTitle, Some(s)) => evaluator::evaluate_title(&s.title),
                (CheckName::MetaDescription, Some(s)) => {
                    evaluator::evaluate_description(s.description.as_deref())
                }
                (CheckName::MobileFriendly, Some(s)) => {
                    evaluator::evaluate_viewport(s.has_viewport)
                }
                (CheckName::MetaTitle, None) => evaluator::unreachable_content(ContentCheck::Title),
                (CheckName::MetaDescription, None) => {
                    evaluator::unreachable_content(ContentCheck::Description)
                }
                (CheckName::MobileFriendly, None) => {
                    evaluator::unreachable_content(ContentCheck::Viewport)
                }
            };
            (name, evaluation)
        })
        .collect()
}

/// Combine evaluations into the response, keeping their order for the
/// recommendation list.
pub fn assemble(url: String, evaluations: Vec<(CheckName, Evaluation)>) -> AnalysisResult {
    let mut report = Report::default();
    let mut recommendations = Vec::new();

    for (name, evaluation) in evaluations {
        report.insert(name, evaluation.verdict);
        recommendations.extend(evaluation.recommendation);
    }

    AnalysisResult {
        url,
        score: scorer::score(&report),
        report,
        recommendations,
    }
}
