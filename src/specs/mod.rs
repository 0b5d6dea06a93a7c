// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific extraction for the job site. Each spec is constrained to one
//! kind of page and encodes *where the data lives in the HTML* and *how to
//! read it tolerantly*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of already-fetched markup (no network, no files).
//! - **Selectors**, all of them, in [`selectors::SelectorTable`].
//! - **Small result shapes**: [`results::ListingStub`], [`detail::JobDetail`].
//!
//! ## What does **not** live here
//! - Fetching, retries, worker pools → `scrape`.
//! - Ids, run timestamps, merging → `store`.
//! - Rendering absent fields as `N/A`, CSV → `csv` / `file`.
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::crawl → net::fetch → specs::results::parse
//!                        ↘ net::fetch → specs::detail::parse → store::Aggregator
//! ```
//!
//! ## Conventions & invariants
//! - Results pages either yield one stub per listing card, in document order,
//!   or fail. They never return a list where links and dates disagree.
//! - Detail fields are independent; a missing field is `None`, never an error.
//! - Specs are testable offline against inline fixtures.
pub mod detail;
pub mod results;
pub mod selectors;
