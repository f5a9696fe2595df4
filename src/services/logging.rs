// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Tracing setup and log sanitization helpers.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use url::Url;

const DEFAULT_FILTER: &str = "seo_analyzer=info";

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides the default filter. Setting `LOG_FORMAT=json` switches
/// to one JSON object per line for log shippers.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false).json())
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false).compact())
            .init();
    }
}

/// Strip credentials, query and fragment from a URL for logging.
/// "https://user:pw@example.com/a?token=x#top" becomes "https://example.com/a"
pub fn redact_url(url: &Url) -> String {
    let mut clean = url.clone();
    clean.set_query(None);
    clean.set_fragment(None);
    // Both setters only fail for cannot-be-a-base URLs, which carry no credentials
    let _ = clean.set_username("");
    let _ = clean.set_password(None);
    clean.to_string()
}
