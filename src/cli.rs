// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::config::consts::*;
use crate::config::options::{AppOptions, ExportOptions, ScrapeOptions, SearchQuery, SortOrder};
use crate::core::net::HttpFetcher;
use crate::error::Result;
use crate::progress::LogProgress;
use crate::runner::{self, RunSummary};
use crate::store::RunContext;

/// Scrape Indeed UK search results into a dated CSV file.
#[derive(Debug, Parser)]
#[command(name = "job_scrape", version, about)]
pub struct Args {
    /// Search keyword(s)
    #[arg(short = 'q', long, default_value = DEFAULT_KEYWORD)]
    pub keyword: String,

    /// Location to search in
    #[arg(short = 'l', long, default_value = DEFAULT_LOCATION)]
    pub location: String,

    /// Result ordering: relevance | date
    #[arg(short, long, default_value = "date")]
    pub sort: SortOrder,

    /// Only remote jobs
    #[arg(long)]
    pub remote: bool,

    /// Number of results pages to crawl (10 listings each)
    #[arg(short, long, default_value_t = DEFAULT_PAGES)]
    pub pages: u32,

    /// Output directory
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// File name prefix, e.g. uk_indeed → uk_indeed_job_data_<date>.csv
    #[arg(long, default_value = DEFAULT_SOURCE)]
    pub source: String,

    /// JSON file overriding the built-in selector table
    #[arg(long)]
    pub selectors: Option<PathBuf>,

    /// Parallel detail page fetches
    #[arg(short, long, default_value_t = WORKERS)]
    pub workers: usize,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn into_options(self) -> AppOptions {
        AppOptions {
            scrape: ScrapeOptions {
                query: SearchQuery {
                    keyword: self.keyword,
                    location: self.location,
                    sort: self.sort,
                    remote_only: self.remote,
                    pages: self.pages,
                },
                workers: self.workers,
                selectors: self.selectors,
            },
            export: ExportOptions { out_dir: self.out_dir, source: self.source },
        }
    }
}

/// Parse args, crawl over HTTP, export.
pub fn run() -> Result<RunSummary> {
    let args = Args::parse();
    crate::log::init(args.verbose);
    let opts = args.into_options();

    let ctx = RunContext::now();
    let fetcher = HttpFetcher::new()?;
    let mut progress = LogProgress::default();
    let summary = runner::run(&opts, &fetcher, &ctx, Some(&mut progress))?;

    println!(
        "Wrote {} records from {} page(s) to {}",
        summary.records.len(),
        summary.pages,
        summary.file_written.display()
    );
    if !summary.page_failures.is_empty() {
        println!("Dropped {} results page(s) that did not parse cleanly:", summary.page_failures.len());
        for f in &summary.page_failures {
            println!("  start={} {}: {}", f.offset, f.url, f.error);
        }
    }
    if !summary.failures.is_empty() {
        println!("Skipped {} listing(s) that could not be fetched:", summary.failures.len());
        for f in &summary.failures {
            println!("  start={} #{} {}: {}", f.offset, f.position + 1, f.url, f.error);
        }
    }
    Ok(summary)
}
