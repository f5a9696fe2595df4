// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

/// Outcome of fetching the analyzed page.
///
/// Any HTTP response counts as `Success`, whatever its status code; only
/// transport-level problems (DNS, refused connection, timeout, unreadable
/// body) produce `Failure`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Success {
        body: String,
        http_status: u16,
        elapsed_millis: u64,
    },
    Failure {
        reason: String,
    },
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success { .. })
    }
}

/// Outcome of probing a well-known path such as `/robots.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExistenceOutcome {
    /// The server answered 200
    Found,
    /// The server answered with any other status
    Missing { status: u16 },
    /// No HTTP answer at all
    Unreachable { reason: String },
}

impl ExistenceOutcome {
    pub fn found(&self) -> bool {
        matches!(self, ExistenceOutcome::Found)
    }
}
