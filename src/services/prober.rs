// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Existence probes for well-known site files.

use crate::models::fetch::ExistenceOutcome;
use crate::services::fetcher::PageClient;
use crate::services::logging::redact_url;
use std::time::Duration;
use url::Url;

pub const ROBOTS_TXT_PATH: &str = "/robots.txt";
pub const SITEMAP_XML_PATH: &str = "/sitemap.xml";

/// Build `<scheme>://<host>[:port]<path>` from the analyzed page URL.
/// Credentials in the page URL are not forwarded.
pub fn well_known_url(base: &Url, path: &str) -> Option<Url> {
    let mut target = base.join(path).ok()?;
    let _ = target.set_username("");
    let _ = target.set_password(None);
    Some(target)
}

/// Probe `path` on the site of `base`.
///
/// Never fails: non-200 answers resolve to `Missing` and transport errors
/// to `Unreachable`.
pub async fn probe(
    client: &dyn PageClient,
    base: &Url,
    path: &str,
    timeout: Duration,
) -> ExistenceOutcome {
    let Some(target) = well_known_url(base, path) else {
        return ExistenceOutcome::Unreachable {
            reason: format!("cannot derive {path} from {}", redact_url(base)),
        };
    };

    let outcome = match client.head(&target, timeout).await {
        Ok(200) => ExistenceOutcome::Found,
        Ok(status) => ExistenceOutcome::Missing { status },
        Err(reason) => ExistenceOutcome::Unreachable { reason },
    };

    tracing::debug!(url = %redact_url(&target), ?outcome, "probed");
    outcome
}
