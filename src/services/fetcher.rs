// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Outbound HTTP: the bounded page fetch and the bodiless status probe.

use crate::models::fetch::FetchOutcome;
use crate::services::logging::redact_url;
use async_trait::async_trait;
use std::time::{Duration, Instant};
use url::Url;

/// HTTP capability the analyzer depends on.
///
/// Implementations must not retry and must honor `timeout` as an upper
/// bound for the whole exchange.
#[async_trait]
pub trait PageClient: Send + Sync {
    /// GET `url`, reading the full body.
    async fn get(&self, url: &Url, timeout: Duration) -> FetchOutcome;

    /// HEAD `url`, returning the status code or a transport error reason.
    async fn head(&self, url: &Url, timeout: Duration) -> Result<u16, String>;
}

/// `PageClient` backed by a shared reqwest connection pool.
#[derive(Clone)]
pub struct HttpPageClient {
    client: reqwest::Client,
}

impl HttpPageClient {
    pub fn new(user_agent: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageClient for HttpPageClient {
    async fn get(&self, url: &Url, timeout: Duration) -> FetchOutcome {
        let started = Instant::now();

        let response = match self.client.get(url.clone()).timeout(timeout).send().await {
            Ok(response) => response,
            Err(e) => return fetch_failure(url, &e, timeout),
        };

        let http_status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return fetch_failure(url, &e, timeout),
        };

        let elapsed_millis = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        tracing::debug!(
            url = %redact_url(url),
            http_status,
            elapsed_millis,
            bytes = body.len(),
            "fetched page"
        );

        FetchOutcome::Success {
            body,
            http_status,
            elapsed_millis,
        }
    }

    async fn head(&self, url: &Url, timeout: Duration) -> Result<u16, String> {
        self.client
            .head(url.clone())
            .timeout(timeout)
            .send()
            .await
            .map(|response| response.status().as_u16())
            .map_err(|e| describe_error(&e, timeout))
    }
}

fn fetch_failure(url: &Url, error: &reqwest::Error, timeout: Duration) -> FetchOutcome {
    let reason = describe_error(error, timeout);
    tracing::warn!(url = %redact_url(url), %reason, "page fetch failed");
    FetchOutcome::Failure { reason }
}

/// Human-readable reason for a transport error.
fn describe_error(error: &reqwest::Error, timeout: Duration) -> String {
    if error.is_timeout() {
        format!("Request timed out after {}s", timeout.as_secs_f32())
    } else if error.is_connect() {
        format!("Could not connect: {error}")
    } else {
        format!("Request failed: {error}")
    }
}
