// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Classification of raw page signals into verdicts and recommendations.
//!
//! Each check is independent: a function takes one signal and returns an
//! [`Evaluation`]. A recommendation is attached to every warning and failure
//! and never to a pass.

use crate::models::check::{CheckName, CheckStatus, CheckVerdict};
use crate::models::fetch::{ExistenceOutcome, FetchOutcome};

pub const FAST_LOAD_MILLIS: u64 = 1000;
pub const SLOW_LOAD_MILLIS: u64 = 3000;

pub const TITLE_MIN_CHARS: usize = 30;
pub const TITLE_MAX_CHARS: usize = 60;

pub const DESCRIPTION_MIN_CHARS: usize = 120;
pub const DESCRIPTION_MAX_CHARS: usize = 160;

/// Detail used for every content check when the page could not be fetched.
pub const UNREACHABLE_CONTENT: &str = "Could not retrieve page content";

/// A verdict plus the remediation hint that goes with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub verdict: CheckVerdict,
    pub recommendation: Option<String>,
}

impl Evaluation {
    fn pass(verdict: CheckVerdict) -> Self {
        debug_assert_eq!(verdict.status, CheckStatus::Pass);
        Self {
            verdict,
            recommendation: None,
        }
    }

    fn flagged(verdict: CheckVerdict, recommendation: impl Into<String>) -> Self {
        debug_assert_ne!(verdict.status, CheckStatus::Pass);
        Self {
            verdict,
            recommendation: Some(recommendation.into()),
        }
    }
}

pub fn evaluate_page_load(outcome: &FetchOutcome) -> Evaluation {
    let (http_status, elapsed) = match outcome {
        FetchOutcome::Failure { reason } => {
            return Evaluation::flagged(
                CheckVerdict::fail(format!("Could not load the page: {reason}")),
                format!("Make sure the page is reachable ({reason})"),
            );
        }
        FetchOutcome::Success {
            http_status,
            elapsed_millis,
            ..
        } => (*http_status, *elapsed_millis),
    };

    if http_status != 200 {
        return Evaluation::flagged(
            CheckVerdict::fail(format!(
                "Page responded with HTTP {http_status} in {elapsed}ms"
            )),
            format!("Serve the page with HTTP 200 (received {http_status})"),
        );
    }

    if elapsed < FAST_LOAD_MILLIS {
        Evaluation::pass(CheckVerdict::pass(format!("Page loaded in {elapsed}ms")))
    } else if elapsed < SLOW_LOAD_MILLIS {
        Evaluation::flagged(
            CheckVerdict::warning(format!(
                "Page loaded in {elapsed}ms, aim for under {FAST_LOAD_MILLIS}ms"
            )),
            format!(
                "Improve page load time from {elapsed}ms to under {FAST_LOAD_MILLIS}ms by compressing and caching assets"
            ),
        )
    } else {
        Evaluation::flagged(
            CheckVerdict::fail(format!(
                "Page loaded in {elapsed}ms, which is {SLOW_LOAD_MILLIS}ms or more"
            )),
            format!(
                "Page load time of {elapsed}ms is too slow; reduce it to under {FAST_LOAD_MILLIS}ms"
            ),
        )
    }
}

pub fn evaluate_title(title: &str) -> Evaluation {
    if title.is_empty() {
        return Evaluation::flagged(
            CheckVerdict::fail("No title tag found"),
            format!(
                "Add a <title> tag of {TITLE_MIN_CHARS}-{TITLE_MAX_CHARS} characters to the page head"
            ),
        );
    }

    let len = title.chars().count();
    let bounds = format!("{TITLE_MIN_CHARS}-{TITLE_MAX_CHARS}");

    if (TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&len) {
        Evaluation::pass(
            CheckVerdict::pass(format!("Title length is {len} characters")).with_content(title),
        )
    } else if len < TITLE_MIN_CHARS {
        Evaluation::flagged(
            CheckVerdict::warning(format!("Title is too short ({len} characters)"))
                .with_content(title),
            format!("Lengthen the title to {bounds} characters (currently {len})"),
        )
    } else {
        Evaluation::flagged(
            CheckVerdict::warning(format!("Title is too long ({len} characters)"))
                .with_content(title),
            format!("Shorten the title to {bounds} characters (currently {len})"),
        )
    }
}

pub fn evaluate_description(description: Option<&str>) -> Evaluation {
    let bounds = format!("{DESCRIPTION_MIN_CHARS}-{DESCRIPTION_MAX_CHARS}");

    let Some(description) = description else {
        return Evaluation::flagged(
            CheckVerdict::fail("No meta description found"),
            format!("Add a meta description of {bounds} characters"),
        );
    };

    let len = description.chars().count();

    if (DESCRIPTION_MIN_CHARS..=DESCRIPTION_MAX_CHARS).contains(&len) {
        Evaluation::pass(
            CheckVerdict::pass(format!("Meta description length is {len} characters"))
                .with_content(description),
        )
    } else if len < DESCRIPTION_MIN_CHARS {
        Evaluation::flagged(
            CheckVerdict::warning(format!("Meta description is too short ({len} characters)"))
                .with_content(description),
            format!("Lengthen the meta description to {bounds} characters (currently {len})"),
        )
    } else {
        Evaluation::flagged(
            CheckVerdict::warning(format!("Meta description is too long ({len} characters)"))
                .with_content(description),
            format!("Shorten the meta description to {bounds} characters (currently {len})"),
        )
    }
}

pub fn evaluate_viewport(has_viewport: bool) -> Evaluation {
    if has_viewport {
        Evaluation::pass(CheckVerdict::pass("Viewport meta tag is present"))
    } else {
        Evaluation::flagged(
            CheckVerdict::warning("No viewport meta tag found"),
            r#"Add <meta name="viewport" content="width=device-width, initial-scale=1"> for mobile devices"#,
        )
    }
}

pub fn evaluate_robots(outcome: &ExistenceOutcome) -> Evaluation {
    match outcome {
        ExistenceOutcome::Found => Evaluation::pass(CheckVerdict::pass("robots.txt found")),
        ExistenceOutcome::Missing { status } => Evaluation::flagged(
            CheckVerdict::warning(format!("robots.txt not found (HTTP {status})")),
            "Add a robots.txt file at the site root to guide crawlers",
        ),
        // The transport reason stays in the logs
        ExistenceOutcome::Unreachable { .. } => Evaluation::flagged(
            CheckVerdict::fail("robots.txt could not be checked"),
            "Make robots.txt reachable at the site root",
        ),
    }
}

pub fn evaluate_sitemap(outcome: &ExistenceOutcome) -> Evaluation {
    match outcome {
        ExistenceOutcome::Found => Evaluation::pass(CheckVerdict::pass("sitemap.xml found")),
        ExistenceOutcome::Missing { status } => Evaluation::flagged(
            CheckVerdict::fail(format!("sitemap.xml not found (HTTP {status})")),
            "Add a sitemap.xml file at the site root to help search engines discover pages",
        ),
        ExistenceOutcome::Unreachable { .. } => Evaluation::flagged(
            CheckVerdict::fail("sitemap.xml could not be checked"),
            "Make sitemap.xml reachable at the site root",
        ),
    }
}

/// A check that reads the page body and cannot run without it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentCheck {
    Title,
    Description,
    Viewport,
}

impl ContentCheck {
    pub const ALL: [ContentCheck; 3] = [
        ContentCheck::Title,
        ContentCheck::Description,
        ContentCheck::Viewport,
    ];

    pub fn check_name(self) -> CheckName {
        match self {
            ContentCheck::Title => CheckName::MetaTitle,
            ContentCheck::Description => CheckName::MetaDescription,
            ContentCheck::Viewport => CheckName::MobileFriendly,
        }
    }

    fn subject(self) -> &'static str {
        match self {
            ContentCheck::Title => "title",
            ContentCheck::Description => "meta description",
            ContentCheck::Viewport => "viewport tag",
        }
    }
}

/// Forced failure for a content check when the page body is unavailable.
pub fn unreachable_content(check: ContentCheck) -> Evaluation {
    Evaluation::flagged(
        CheckVerdict::fail(UNREACHABLE_CONTENT),
        format!(
            "Make the page reachable so its {} can be checked",
            check.subject()
        ),
    )
}
