// src/fetch/proxy.rs
use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::consts::{DEV_PROXY_BASE, RELAY_PREFIX, UPSTREAM_ORIGIN};

// Same unreserved set as JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// How report requests are routed to the statistics host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProxyMode {
    /// Straight to the upstream URL.
    Direct,
    /// Upstream origin swapped for a local reverse proxy that forwards to it.
    SameOrigin { base: String },
    /// Whole URL percent-encoded behind a public relay prefix.
    Relay { prefix: String },
}

impl ProxyMode {
    pub fn dev() -> Self {
        ProxyMode::SameOrigin { base: s!(DEV_PROXY_BASE) }
    }

    pub fn relay() -> Self {
        ProxyMode::Relay { prefix: s!(RELAY_PREFIX) }
    }

    /// Debug builds go through the local dev proxy, release builds through
    /// the public relay.
    pub fn for_build() -> Self {
        if cfg!(debug_assertions) { Self::dev() } else { Self::relay() }
    }

    /// `direct` | `dev` | `relay`
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Some(ProxyMode::Direct),
            "dev" | "same-origin" => Some(Self::dev()),
            "relay" => Some(Self::relay()),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ProxyMode::Direct => "direct",
            ProxyMode::SameOrigin { .. } => "dev",
            ProxyMode::Relay { .. } => "relay",
        }
    }

    /// Final request URL for an (already season-substituted) report URL.
    pub fn route(&self, url: &str) -> String {
        match self {
            ProxyMode::Direct => s!(url),
            ProxyMode::SameOrigin { base } => match url.strip_prefix(UPSTREAM_ORIGIN) {
                Some(path) => format!("{}{}", base.trim_end_matches('/'), path),
                // Not an upstream URL; nothing to proxy.
                None => s!(url),
            },
            ProxyMode::Relay { prefix } => {
                format!("{}{}", prefix, utf8_percent_encode(url, URI_COMPONENT))
            }
        }
    }
}

impl fmt::Display for ProxyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
