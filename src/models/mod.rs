// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

pub mod analysis;
pub mod check;
pub mod config;
pub mod fetch;
pub mod version;
