// tests/common/mod.rs
//
// Offline fixtures: captured-style markup and a fetcher that serves it.
//
#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use job_scrape::core::net::Fetch;
use job_scrape::error::{Result, ScrapeError};

pub const ORIGIN: &str = "https://uk.indeed.com";

/// One results-page card in the tapItem layout.
pub fn card(jk: &str, title: &str, posted: &str) -> String {
    format!(
        r#"<a class="tapItem fs-unmask result job_{jk}" href="/rc/clk?jk={jk}" data-jk="{jk}">
  <div class="job_seen_beacon">
    <h2 class="jobTitle"><span title="{title}">{title}</span></h2>
    <span class="companyName">Somebody Ltd</span>
    <span class="date"><span class="visually-hidden">Posted</span>{posted}</span>
  </div>
</a>"#
    )
}

/// A card whose date marker is missing, like a sponsored listing.
pub fn card_without_date(jk: &str) -> String {
    format!(
        r#"<a class="tapItem fs-unmask result sponsoredJob" href="/pagead/clk?jk={jk}">
  <h2 class="jobTitle"><span>Sponsored role</span></h2>
  <span class="sponsoredGray">Sponsored</span>
</a>"#
    )
}

pub fn results_page(cards: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><title>Junior Data Jobs in London</title></head>
<body><div id="mosaic-provider-jobcards">
{}
</div><nav role="navigation"><a href="/jobs?q=junior+data&start=10">Next</a></nav></body></html>"#,
        cards.join("\n")
    )
}

pub fn detail_url(jk: &str) -> String {
    format!("{ORIGIN}/rc/clk?jk={jk}")
}

/// Full detail page, every field present.
pub fn detail_page(title: &str, company: &str, location: &str, salary: &str, description: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><body>
<div class="jobsearch-JobInfoHeader-title-container"><h1 class="jobsearch-JobInfoHeader-title">{title}</h1></div>
<div class="jobsearch-CompanyInfoContainer">
  <div class="icl-u-xs-mt--xs icl-u-textColor--secondary jobsearch-JobInfoHeader-subtitle jobsearch-DesktopStickyContainer-subtitle">
    <div class="jobsearch-InlineCompanyRating icl-u-xs-mt--xs jobsearch-DesktopStickyContainer-companyrating">
      <div class="icl-u-lg-mr--sm icl-u-xs-mr--xs">{company}</div>
      <div class="icl-Ratings-count">4.1</div>
    </div>
    <div>{location}</div>
  </div>
</div>
<div id="salaryInfoAndJobType"><span class="icl-u-xs-mr--xs attribute_snippet">{salary}</span></div>
<div id="jobDescriptionText" class="jobsearch-jobDescriptionText">{description}</div>
</body></html>"#
    )
}

/// Canned pages keyed by URL. Unknown URLs fail like a 404.
#[derive(Default)]
pub struct CannedFetcher {
    pages: HashMap<String, (String, Duration)>,
    calls: Mutex<Vec<String>>,
}

impl CannedFetcher {
    pub fn new() -> Self { Self::default() }

    pub fn page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.insert(url.into(), (html.into(), Duration::ZERO));
        self
    }

    /// Serve `html` only after `delay`, to shuffle completion order.
    pub fn slow_page(mut self, url: impl Into<String>, html: impl Into<String>, delay: Duration) -> Self {
        self.pages.insert(url.into(), (html.into(), delay));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Fetch for CannedFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        self.calls.lock().unwrap().push(url.to_string());
        match self.pages.get(url) {
            Some((html, delay)) => {
                std::thread::sleep(*delay);
                Ok(html.clone())
            }
            None => Err(ScrapeError::transport(url, "HTTP 404 Not Found")),
        }
    }
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("job_scrape_{}", name));
    let _ = std::fs::remove_dir_all(&p);
    std::fs::create_dir_all(&p).unwrap();
    p
}
