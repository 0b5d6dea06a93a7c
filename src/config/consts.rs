// src/config/consts.rs

// Net config
pub const ORIGIN: &str = "https://uk.indeed.com";
pub const SEARCH_PATH: &str = "/jobs";
pub const REMOTE_SUFFIX: &str = "&remotejob=032b3046-06a3-4876-8dfd-474eb5e7ed11";
pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const ACCEPT_LANGUAGE: &str = "en-GB,en;q=0.9";

// Pagination
pub const PAGE_SIZE: u32 = 10;
/// The site stops serving results well before this.
pub const MAX_PAGES: u32 = 100;

// Search defaults
pub const DEFAULT_KEYWORD: &str = "Junior Data";
pub const DEFAULT_LOCATION: &str = "London";
pub const DEFAULT_PAGES: u32 = 3;

// Export
pub const DEFAULT_OUT_DIR: &str = "output_data";
pub const DEFAULT_SOURCE: &str = "uk_indeed";
pub const NOT_AVAILABLE: &str = "N/A";

// Concurrency
pub const WORKERS: usize = 4;
pub const RESULTS_PAGE_ATTEMPTS: u32 = 3;
pub const RETRY_PAUSE_MS: u64 = 500;
