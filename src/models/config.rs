// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Upper bound for fetching the analyzed page
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Upper bound for robots.txt / sitemap.xml probes
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

pub const DEFAULT_PORT: u16 = 3000;

/// Process-level server configuration, built once in `main`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seo-analyzer",
    version = env!("SEO_VERSION"),
    about = "Single-page SEO analysis service"
)]
pub struct ServerConfig {
    /// Interface to bind
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

/// Knobs of a single analysis run.
#[derive(Debug, Clone)]
pub struct AnalyzerSettings {
    pub fetch_timeout: Duration,
    pub probe_timeout: Duration,
    /// Sent as the User-Agent header on every outbound request
    pub user_agent: String,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            fetch_timeout: FETCH_TIMEOUT,
            probe_timeout: PROBE_TIMEOUT,
            user_agent: format!("seo-analyzer/{}", env!("SEO_VERSION")),
        }
    }
}
