// src/paginate.rs
// Result-page offsets and search URLs.

use crate::config::consts::{MAX_PAGES, ORIGIN, PAGE_SIZE, REMOTE_SUFFIX, SEARCH_PATH};
use crate::config::options::SearchQuery;
use crate::core::sanitize::{query_term, query_value};
use crate::error::{Result, ScrapeError};

/// `[0, 10, 20, …]`, one per requested page, at most `MAX_PAGES` of them.
pub fn offsets(pages: u32) -> Result<Vec<u32>> {
    if pages == 0 || pages > MAX_PAGES {
        return Err(ScrapeError::InvalidConfig(format!("page count must be 1..={MAX_PAGES}")));
    }
    (0..pages)
        .map(|p| {
            p.checked_mul(PAGE_SIZE)
                .ok_or_else(|| ScrapeError::InvalidConfig(format!("offset overflow at page {p}")))
        })
        .collect()
}

/// `{origin}/jobs?q=…&l=…&sort=…[&remotejob=…]&start=…`
pub fn search_url(query: &SearchQuery, offset: u32) -> String {
    let remote = if query.remote_only { REMOTE_SUFFIX } else { "" };
    format!(
        "{ORIGIN}{SEARCH_PATH}?q={}&l={}&sort={}{remote}&start={offset}",
        query_term(&query.keyword),
        query_value(&query.location),
        query.sort.as_query(),
    )
}
