// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Check names, verdicts and the per-page report.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The six SEO checks, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum CheckName {
    PageLoadTime,
    MetaTitle,
    MetaDescription,
    MobileFriendly,
    RobotsTxt,
    SitemapXml,
}

impl CheckName {
    /// Every check, in the order they are evaluated and reported.
    pub const ALL: [CheckName; 6] = [
        CheckName::PageLoadTime,
        CheckName::MetaTitle,
        CheckName::MetaDescription,
        CheckName::MobileFriendly,
        CheckName::RobotsTxt,
        CheckName::SitemapXml,
    ];

    /// Wire name used as the report key.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckName::PageLoadTime => "pageLoadTime",
            CheckName::MetaTitle => "metaTitle",
            CheckName::MetaDescription => "metaDescription",
            CheckName::MobileFriendly => "mobileFriendly",
            CheckName::RobotsTxt => "robotsTxt",
            CheckName::SitemapXml => "sitemapXml",
        }
    }
}

impl std::fmt::Display for CheckName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tri-state classification of one signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warning,
    Fail,
}

/// Outcome of a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CheckVerdict {
    pub status: CheckStatus,
    /// Human-readable explanation of the verdict
    pub details: String,
    /// Extracted tag text (title and description checks only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Length of `content` in characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
}

impl CheckVerdict {
    pub fn new(status: CheckStatus, details: impl Into<String>) -> Self {
        Self {
            status,
            details: details.into(),
            content: None,
            length: None,
        }
    }

    pub fn pass(details: impl Into<String>) -> Self {
        Self::new(CheckStatus::Pass, details)
    }

    pub fn warning(details: impl Into<String>) -> Self {
        Self::new(CheckStatus::Warning, details)
    }

    pub fn fail(details: impl Into<String>) -> Self {
        Self::new(CheckStatus::Fail, details)
    }

    /// Attach the extracted text; length is derived from it.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        let content = content.into();
        self.length = Some(content.chars().count());
        self.content = Some(content);
        self
    }
}

/// Verdicts keyed by check name.
///
/// One typed slot per check so that iteration always follows
/// [`CheckName::ALL`] and serialization keeps the fixed key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_load_time: Option<CheckVerdict>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<CheckVerdict>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<CheckVerdict>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_friendly: Option<CheckVerdict>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub robots_txt: Option<CheckVerdict>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sitemap_xml: Option<CheckVerdict>,
}

impl Report {
    fn slot(&self, name: CheckName) -> &Option<CheckVerdict> {
        match name {
            CheckName::PageLoadTime => &self.page_load_time,
            CheckName::MetaTitle => &self.meta_title,
            CheckName::MetaDescription => &self.meta_description,
            CheckName::MobileFriendly => &self.mobile_friendly,
            CheckName::RobotsTxt => &self.robots_txt,
            CheckName::SitemapXml => &self.sitemap_xml,
        }
    }

    fn slot_mut(&mut self, name: CheckName) -> &mut Option<CheckVerdict> {
        match name {
            CheckName::PageLoadTime => &mut self.page_load_time,
            CheckName::MetaTitle => &mut self.meta_title,
            CheckName::MetaDescription => &mut self.meta_description,
            CheckName::MobileFriendly => &mut self.mobile_friendly,
            CheckName::RobotsTxt => &mut self.robots_txt,
            CheckName::SitemapXml => &mut self.sitemap_xml,
        }
    }

    pub fn get(&self, name: CheckName) -> Option<&CheckVerdict> {
        self.slot(name).as_ref()
    }

    pub fn insert(&mut self, name: CheckName, verdict: CheckVerdict) {
        *self.slot_mut(name) = Some(verdict);
    }

    /// Present verdicts in fixed check order.
    pub fn entries(&self) -> impl Iterator<Item = (CheckName, &CheckVerdict)> + '_ {
        CheckName::ALL
            .into_iter()
            .filter_map(move |name| self.get(name).map(|verdict| (name, verdict)))
    }
}
