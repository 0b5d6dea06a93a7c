// src/scrape.rs
use std::{
    thread, time::Duration,
    sync::{ mpsc, atomic::{ AtomicUsize, Ordering }},
};

use log::{debug, warn};
use url::Url;

use crate::{
    config::consts::{ ORIGIN, RESULTS_PAGE_ATTEMPTS, RETRY_PAUSE_MS },
    config::options::ScrapeOptions,
    core::net::{ fetch_with_attempts, Fetch },
    error::{ Result, ScrapeError },
    paginate,
    progress::Progress,
    specs::{ detail::DetailParser, results::{ ListingStub, ResultsParser }, selectors::SelectorTable },
    store::{ Aggregator, ResultSet, RunContext },
};

/// A detail page that never became a record.
#[derive(Debug)]
pub struct DetailFailure {
    /// Results page offset and position of the listing on that page.
    pub offset: u32,
    pub position: usize,
    pub url: String,
    pub error: ScrapeError,
}

/// A results page whose listings could not be paired; none of them were fetched.
#[derive(Debug)]
pub struct PageFailure {
    pub offset: u32,
    pub url: String,
    pub error: ScrapeError,
}

#[derive(Debug)]
pub struct CrawlOutcome {
    pub records: ResultSet,
    pub failures: Vec<DetailFailure>,
    pub page_failures: Vec<PageFailure>,
    pub pages: usize,
}

pub struct Crawler<'f> {
    fetcher: &'f dyn Fetch,
    results: ResultsParser,
    detail: DetailParser,
    workers: usize,
    attempts: u32,
    retry_pause: Duration,
}

impl<'f> Crawler<'f> {
    pub fn new(fetcher: &'f dyn Fetch, table: &SelectorTable, workers: usize) -> Result<Self> {
        let base = Url::parse(ORIGIN)
            .map_err(|e| ScrapeError::InvalidConfig(format!("bad origin {ORIGIN}: {e}")))?;
        Ok(Self {
            fetcher,
            results: ResultsParser::new(base, table)?,
            detail: DetailParser::new(table)?,
            workers: workers.max(1),
            attempts: RESULTS_PAGE_ATTEMPTS,
            retry_pause: Duration::from_millis(RETRY_PAUSE_MS),
        })
    }

    pub fn with_retry(mut self, attempts: u32, pause: Duration) -> Self {
        self.attempts = attempts;
        self.retry_pause = pause;
        self
    }

    /// Walk every results page, then every listing on it, in order.
    /// A results page that cannot be fetched aborts the crawl. One that fails
    /// to parse consistently is skipped whole; detail-page failures are collected.
    pub fn crawl(
        &self,
        scrape: &ScrapeOptions,
        ctx: &RunContext,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<CrawlOutcome> {
        let offsets = paginate::offsets(scrape.query.pages)?;
        if let Some(p) = progress.as_deref_mut() {
            p.begin(offsets.len());
        }

        let mut agg = Aggregator::new(ctx);
        let mut failures = Vec::new();
        let mut page_failures = Vec::new();

        for &offset in &offsets {
            let page_url = paginate::search_url(&scrape.query, offset);
            let stubs = match self.listings(&page_url) {
                Ok(stubs) => stubs,
                Err(error) if error.is_parse_inconsistency() => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.page_failed(offset, &error.to_string());
                    }
                    page_failures.push(PageFailure { offset, url: page_url, error });
                    continue;
                }
                Err(error) => return Err(error),
            };
            if let Some(p) = progress.as_deref_mut() {
                p.page_done(offset, stubs.len());
            }

            let bodies = self.fetch_details(&stubs);
            for (position, (stub, body)) in stubs.into_iter().zip(bodies).enumerate() {
                match body {
                    Ok(html) => {
                        let url = stub.url.clone();
                        let id = agg.push(stub, self.detail.parse(&html));
                        if let Some(p) = progress.as_deref_mut() {
                            p.item_done(id, &url);
                        }
                    }
                    Err(error) => {
                        if let Some(p) = progress.as_deref_mut() {
                            p.item_failed(&stub.url, &error.to_string());
                        }
                        failures.push(DetailFailure { offset, position, url: stub.url, error });
                    }
                }
            }
        }

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        Ok(CrawlOutcome { records: agg.finish(), failures, page_failures, pages: offsets.len() })
    }

    fn listings(&self, page_url: &str) -> Result<Vec<ListingStub>> {
        let html = fetch_with_attempts(self.fetcher, page_url, self.attempts, self.retry_pause)?;
        let stubs = self.results.parse(page_url, &html)?;
        if stubs.is_empty() {
            let title = self.results.page_title(&html).unwrap_or_default();
            warn!("No listings on {page_url} (title: {title:?})");
        }
        Ok(stubs)
    }

    /// Fetch every detail page of one results page on a small worker pool.
    /// Output is in stub order whatever order the fetches finish in.
    fn fetch_details(&self, stubs: &[ListingStub]) -> Vec<Result<String>> {
        if stubs.is_empty() {
            return Vec::new();
        }

        let fetcher = self.fetcher;
        let next = AtomicUsize::new(0);
        let (res_tx, res_rx) = mpsc::channel::<(usize, Result<String>)>();
        let workers = self.workers.min(stubs.len());

        thread::scope(|scope| {
            for _ in 0..workers {
                let tx = res_tx.clone();
                let next = &next;
                scope.spawn(move || {
                    loop {
                        let i = next.fetch_add(1, Ordering::Relaxed);
                        if i >= stubs.len() {
                            break;
                        }
                        let _ = tx.send((i, fetcher.fetch(&stubs[i].url)));
                    }
                });
            }
        });
        drop(res_tx); // workers are joined; only queued results remain

        let mut slots: Vec<Option<Result<String>>> = (0..stubs.len()).map(|_| None).collect();
        for (i, res) in res_rx {
            debug!("detail {i} done");
            slots[i] = Some(res);
        }

        slots
            .into_iter()
            .zip(stubs)
            .map(|(slot, stub)| {
                slot.unwrap_or_else(|| Err(ScrapeError::transport(&stub.url, "worker exited early")))
            })
            .collect()
    }
}
