// src/fetch/client.rs
use std::time::Duration;

use serde_json::Value;

use super::{FetchError, ProxyMode, substitute_season};
use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::table::StatsRow;

/// Status line + body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Reason phrase ("Internal Server Error").
    pub reason: String,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self { status: 200, reason: s!("OK"), body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP GET seam. Implementations only fail for transport-level problems;
/// a non-2xx status is still a response.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

/// Blocking reqwest client; run it off the UI thread.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::transport(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let resp = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(|e| FetchError::transport(e.to_string()))?;

        let status = resp.status();
        let reason = s!(status.canonical_reason().unwrap_or(""));
        let body = resp.text().map_err(|e| FetchError::transport(e.to_string()))?;

        Ok(HttpResponse { status: status.as_u16(), reason, body })
    }
}

/// Fetch one report's rows for `season`.
///
/// The URL gets its season substituted, then routed through `proxy`.
pub fn fetch_report_data(
    transport: &dyn Transport,
    proxy: &ProxyMode,
    url: &str,
    season: u16,
) -> Result<Vec<StatsRow>, FetchError> {
    let seasoned = substitute_season(url, season);
    let target = proxy.route(&seasoned);
    logd!("Fetch: GET {} (proxy={})", target, proxy);

    let resp = transport.get(&target)?;
    if !resp.is_success() {
        return Err(FetchError::Status { code: resp.status, reason: resp.reason });
    }
    parse_rows(&resp.body)
}

/// Body must be a JSON array. Object elements become rows (key order kept);
/// anything else becomes an empty row.
pub fn parse_rows(body: &str) -> Result<Vec<StatsRow>, FetchError> {
    let value: Value = serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;
    let Value::Array(items) = value else {
        return Err(FetchError::Parse(s!("expected a JSON array of rows")));
    };

    let mut odd = 0usize;
    let rows: Vec<StatsRow> = items
        .into_iter()
        .map(|item| match item {
            Value::Object(map) => map,
            _ => {
                odd += 1;
                StatsRow::new()
            }
        })
        .collect();

    if odd > 0 {
        logw!("Fetch: {} non-object row(s) rendered empty", odd);
    }
    Ok(rows)
}
