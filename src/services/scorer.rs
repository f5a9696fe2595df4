// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::models::check::{CheckName, CheckStatus, Report};

/// Points awarded for `status` on `check`.
pub fn points(check: CheckName, status: CheckStatus) -> u32 {
    let (pass, warning) = match check {
        CheckName::PageLoadTime => (15, 5),
        CheckName::MetaTitle => (10, 3),
        CheckName::MetaDescription => (10, 3),
        CheckName::MobileFriendly => (5, 1),
        CheckName::RobotsTxt => (5, 2),
        CheckName::SitemapXml => (5, 0),
    };

    match status {
        CheckStatus::Pass => pass,
        CheckStatus::Warning => warning,
        CheckStatus::Fail => 0,
    }
}

pub fn max_points(check: CheckName) -> u32 {
    points(check, CheckStatus::Pass)
}

/// Normalized 0-100 score over the checks present in `report`.
///
/// Missing checks add to neither side of the ratio; an empty report scores 0.
pub fn score(report: &Report) -> u8 {
    let (earned, max) = report
        .entries()
        .fold((0u32, 0u32), |(earned, max), (name, verdict)| {
            (earned + points(name, verdict.status), max + max_points(name))
        });

    if max == 0 {
        return 0;
    }

    let ratio = (100.0 * f64::from(earned) / f64::from(max)).round();
    ratio.clamp(0.0, 100.0) as u8
}
