// src/progress.rs
/// Lightweight progress reporting for a crawl.
/// Frontends implement this to surface status; every method has a no-op default.
pub trait Progress {
    /// Called at the start with the number of results pages to walk.
    fn begin(&mut self, _pages: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A results page was parsed into `listings` stubs.
    fn page_done(&mut self, _offset: u32, _listings: usize) {}

    /// A results page was dropped because its listings did not line up.
    fn page_failed(&mut self, _offset: u32, _reason: &str) {}

    /// A detail page became record `id`.
    fn item_done(&mut self, _id: u32, _url: &str) {}

    /// A detail page could not be fetched; the run carries on.
    fn item_failed(&mut self, _url: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Progress as log lines, used by the CLI.
#[derive(Default)]
pub struct LogProgress {
    pages: usize,
    pages_done: usize,
    items: usize,
    failed: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, pages: usize) {
        self.pages = pages;
        log::info!("Crawling {pages} results page(s)");
    }
    fn log(&mut self, msg: &str) {
        log::info!("{msg}");
    }
    fn page_done(&mut self, offset: u32, listings: usize) {
        self.pages_done += 1;
        log::info!("Page {}/{} (start={offset}): {listings} listings", self.pages_done, self.pages);
    }
    fn page_failed(&mut self, offset: u32, reason: &str) {
        self.pages_done += 1;
        log::warn!("Page {}/{} (start={offset}) dropped: {reason}", self.pages_done, self.pages);
    }
    fn item_done(&mut self, id: u32, url: &str) {
        self.items += 1;
        log::debug!("#{id} {url}");
    }
    fn item_failed(&mut self, url: &str, reason: &str) {
        self.failed += 1;
        log::warn!("Skipped {url}: {reason}");
    }
    fn finish(&mut self) {
        log::info!("Crawl finished: {} records, {} skipped", self.items, self.failed);
    }
}
