// src/core/net.rs
//
// One blocking HTTPS GET per page. No retries, no backoff.

use chrono::{DateTime, Utc};
use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::error::{GdpError, Result};

/// Page markup as fetched, with its retrieval time.
#[derive(Clone, Debug, PartialEq)]
pub struct RawPage {
    pub url: String,
    pub markup: String,
    pub fetched_at: DateTime<Utc>,
}

impl RawPage {
    pub fn new(url: impl Into<String>, markup: impl Into<String>) -> Self {
        Self { url: url.into(), markup: markup.into(), fetched_at: Utc::now() }
    }
}

/// Anything that can turn a URL into a page. The HTTP client is the only
/// production implementation; tests serve fixtures.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<RawPage>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .gzip(true)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<RawPage> {
        logd!("Net: GET {url}");
        let resp = self.client.get(url).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GdpError::Fetch { url: s!(url), reason: format!("HTTP {status}") });
        }

        let markup = resp.text()?;
        logd!("Net: {} bytes from {url}", markup.len());
        Ok(RawPage::new(url, markup))
    }
}
