// src/config/options.rs
use std::path::PathBuf;

use chrono::{DateTime, Local};

use super::consts::*;
use crate::error::{Result, ScrapeError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Reject anything that would make the run pointless before touching the network.
    pub fn validate(&self) -> Result<()> {
        self.scrape.validate()?;
        self.export.validate()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    Relevance,
    #[default]
    Date,
}

impl SortOrder {
    pub fn as_query(&self) -> &'static str {
        match self { SortOrder::Relevance => "relevance", SortOrder::Date => "date" }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relevance" => Ok(SortOrder::Relevance),
            "date" => Ok(SortOrder::Date),
            other => Err(ScrapeError::InvalidConfig(format!("unknown sort order: {other}"))),
        }
    }
}

/// What to search for and how many result pages to walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: String,
    pub location: String,
    pub sort: SortOrder,
    pub remote_only: bool,
    pub pages: u32,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            keyword: s!(DEFAULT_KEYWORD),
            location: s!(DEFAULT_LOCATION),
            sort: SortOrder::Date,
            remote_only: false,
            pages: DEFAULT_PAGES,
        }
    }
}

impl SearchQuery {
    pub fn validate(&self) -> Result<()> {
        if self.keyword.trim().is_empty() {
            return Err(ScrapeError::InvalidConfig(s!("keyword must not be empty")));
        }
        if self.pages == 0 || self.pages > MAX_PAGES {
            return Err(ScrapeError::InvalidConfig(format!("page count must be 1..={MAX_PAGES}")));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub query: SearchQuery,
    pub workers: usize,
    /// JSON file overriding the built-in selector table.
    pub selectors: Option<PathBuf>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self { query: SearchQuery::default(), workers: WORKERS, selectors: None }
    }
}

impl ScrapeOptions {
    pub fn validate(&self) -> Result<()> {
        self.query.validate()?;
        if self.workers == 0 {
            return Err(ScrapeError::InvalidConfig(s!("worker count must be at least 1")));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    /// Prefix of the file name, e.g. `uk_indeed`.
    pub source: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR), source: s!(DEFAULT_SOURCE) }
    }
}

impl ExportOptions {
    pub fn validate(&self) -> Result<()> {
        if self.source.trim().is_empty() {
            return Err(ScrapeError::InvalidConfig(s!("source name must not be empty")));
        }
        Ok(())
    }

    /// `<out_dir>/<source>_job_data_<YYYY_MM_DD>.csv`
    pub fn out_path(&self, started_at: &DateTime<Local>) -> PathBuf {
        let date = started_at.format("%Y_%m_%d").to_string();
        self.out_dir.join(join!(&self.source, "_job_data_", &date, ".csv"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn zero_pages_is_rejected() {
        let q = SearchQuery { pages: 0, ..SearchQuery::default() };
        assert!(matches!(q.validate(), Err(ScrapeError::InvalidConfig(_))));
    }

    #[test]
    fn page_count_above_cap_is_rejected() {
        let ok = SearchQuery { pages: MAX_PAGES, ..SearchQuery::default() };
        assert!(ok.validate().is_ok());
        let q = SearchQuery { pages: MAX_PAGES + 1, ..SearchQuery::default() };
        assert!(matches!(q.validate(), Err(ScrapeError::InvalidConfig(_))));
    }

    #[test]
    fn blank_keyword_is_rejected() {
        let q = SearchQuery { keyword: s!("   "), ..SearchQuery::default() };
        assert!(matches!(q.validate(), Err(ScrapeError::InvalidConfig(_))));
    }

    #[test]
    fn zero_workers_is_rejected() {
        let opts = ScrapeOptions { workers: 0, ..ScrapeOptions::default() };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn sort_order_parses_case_insensitively() {
        assert_eq!("DATE".parse::<SortOrder>().unwrap(), SortOrder::Date);
        assert_eq!("relevance".parse::<SortOrder>().unwrap(), SortOrder::Relevance);
        assert!("newest".parse::<SortOrder>().is_err());
    }

    #[test]
    fn out_path_is_dated() {
        let export = ExportOptions::default();
        let t = Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 0).unwrap();
        let p = export.out_path(&t);
        assert_eq!(p, PathBuf::from("output_data").join("uk_indeed_job_data_2024_03_07.csv"));
    }
}
