// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use anyhow::Context;
use clap::Parser;
use seo_analyzer::app::{serve, AppState};
use seo_analyzer::models::config::{AnalyzerSettings, ServerConfig};
use seo_analyzer::services::analyzer::Analyzer;
use seo_analyzer::services::fetcher::HttpPageClient;
use seo_analyzer::services::logging::init_logging;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = ServerConfig::parse();
    let settings = AnalyzerSettings::default();

    let client =
        HttpPageClient::new(&settings.user_agent).context("Failed to build HTTP client")?;
    let state = AppState::new(Analyzer::new(Arc::new(client), settings));

    serve(config, state).await
}
