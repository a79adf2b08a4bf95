// src/core/net.rs
//
// Blocking HTTP GET for the rankings report.
// The `Fetch` trait is the seam the scrape layer depends on, so runs can be
// driven from captured pages in tests.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::QueryParams;
use crate::config::consts::{BASE_URL, HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::core::query::build_url;
use crate::error::{Error, Result};

pub trait Fetch: Sync {
    /// Return the report page (HTML) for one parameter set.
    fn fetch(&self, params: &QueryParams) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
    base: String,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        Self::with_base(BASE_URL)
    }

    pub fn with_base(base: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| Error::Http { url: s!(base), source })?;
        Ok(Self { client, base: s!(base) })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, params: &QueryParams) -> Result<String> {
        let url = build_url(&self.base, params)?;
        let url_str = s!(url.as_str());
        debug!(url = %url_str, "GET");

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|source| Error::Http { url: url_str.clone(), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { url: url_str, status });
        }

        // `text()` honours the charset from Content-Type (the site is not UTF-8).
        resp.text().map_err(|source| Error::Http { url: url_str, source })
    }
}
