// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::AppOptions,
    core::net::Fetch,
    error::Result,
    file,
    progress::Progress,
    scrape::{ Crawler, DetailFailure, PageFailure },
    specs::selectors::SelectorTable,
    store::{ ResultSet, RunContext },
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub pages: usize,
    pub records: ResultSet,
    pub failures: Vec<DetailFailure>,
    pub page_failures: Vec<PageFailure>,
    pub file_written: PathBuf,
}

/// Top-level runner: validate, crawl, export.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &AppOptions,
    fetcher: &dyn Fetch,
    ctx: &RunContext,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    // Before any network activity
    opts.validate()?;
    let table = SelectorTable::resolve(opts.scrape.selectors.as_deref())?;
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Selector table: {}", table.version));
    }

    let crawler = Crawler::new(fetcher, &table, opts.scrape.workers)?;
    let outcome = crawler.crawl(&opts.scrape, ctx, progress)?;

    let file_written = file::export(&opts.export, ctx, &outcome.records)?;

    Ok(RunSummary {
        pages: outcome.pages,
        records: outcome.records,
        failures: outcome.failures,
        page_failures: outcome.page_failures,
        file_written,
    })
}
