// src/core/net.rs
// Blocking HTTPS GET. One client per run; no cookies kept between requests.

use std::{thread, time::Duration};

use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};

use crate::config::consts::{ACCEPT_LANGUAGE as LANG, USER_AGENT};
use crate::error::{Result, ScrapeError};

/// Anything that can turn a URL into page markup.
/// The crawl only needs this; tests swap in canned pages.
pub trait Fetch: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(LANG));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| ScrapeError::transport("<client>", e))?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        debug!("GET {url}");
        let resp = self.client.get(url).send().map_err(|e| ScrapeError::transport(url, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::transport(url, format!("HTTP {status}")));
        }
        resp.text().map_err(|e| ScrapeError::transport(url, e))
    }
}

/// Fetch with a bounded number of attempts and a fixed pause between them.
/// Only transport failures are retried.
pub fn fetch_with_attempts(
    fetcher: &dyn Fetch,
    url: &str,
    attempts: u32,
    pause: Duration,
) -> Result<String> {
    let attempts = attempts.max(1);
    let mut tried = 0;
    loop {
        tried += 1;
        match fetcher.fetch(url) {
            Ok(body) => return Ok(body),
            Err(e @ ScrapeError::Transport { .. }) if tried < attempts => {
                warn!("Attempt {tried}/{attempts} failed: {e}");
                thread::sleep(pause);
            }
            Err(e) => return Err(e),
        }
    }
}
