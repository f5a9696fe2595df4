// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

pub mod analyzer;
pub mod evaluator;
pub mod fetcher;
pub mod inspector;
pub mod logging;
pub mod prober;
pub mod scorer;
