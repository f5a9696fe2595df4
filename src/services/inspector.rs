// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Extraction of head-level SEO signals from raw markup.

use scraper::{Html, Selector};

/// Signals read from a page's `<head>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSignals {
    /// Trimmed text of the first head `<title>`; empty when there is none
    pub title: String,
    /// `content` of `<meta name="description">`. `None` when the tag is
    /// missing, `Some("")` when the tag exists without content.
    pub description: Option<String>,
    pub has_viewport: bool,
}

/// Inspect `html` for title, description and viewport.
///
/// html5ever recovers from any malformed input, so this never fails; the
/// worst case is an all-empty `PageSignals`.
pub fn inspect(html: &str) -> PageSignals {
    let document = Html::parse_document(html);

    PageSignals {
        title: extract_title(&document),
        description: extract_description(&document),
        has_viewport: has_element(&document, r#"head meta[name="viewport"]"#),
    }
}

fn extract_title(document: &Html) -> String {
    let Ok(selector) = Selector::parse("head title") else {
        return String::new();
    };

    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

fn extract_description(document: &Html) -> Option<String> {
    let selector = Selector::parse(r#"head meta[name="description"]"#).ok()?;

    document
        .select(&selector)
        .next()
        .map(|el| el.value().attr("content").unwrap_or_default().to_string())
}

fn has_element(document: &Html, css: &str) -> bool {
    Selector::parse(css)
        .map(|selector| document.select(&selector).next().is_some())
        .unwrap_or(false)
}
