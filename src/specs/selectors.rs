// src/specs/selectors.rs
//! Field selector table.
//!
//! Every CSS selector the specs use lives here so a markup change on the site
//! is a data fix, not a code fix. The built-in table targets Indeed UK; a JSON
//! file with any subset of the keys overrides it:
//!
//! ```json
//! { "version": "2024-05", "salary": "div#salaryInfoAndJobType span" }
//! ```

use std::{fs, path::Path};

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScrapeError};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorTable {
    /// Free-form label, logged at startup so runs can be traced to a table.
    pub version: String,

    /* results page */
    /// One element per listing. Link and posted time are looked up inside it.
    pub card: String,
    /// Job link; may be the card itself.
    pub link: String,
    pub posted: String,
    /// Page heading logged when a results page has no listings.
    pub page_title: String,

    /* detail page */
    pub title: String,
    pub salary: String,
    pub company: String,
    /// Subtitle block holding commute type, rating, location…
    pub location_container: String,
    /// Tokens inside the subtitle block; location is the last one.
    pub location_token: String,
    pub description: String,
}

impl Default for SelectorTable {
    fn default() -> Self {
        Self::indeed_uk()
    }
}

impl SelectorTable {
    pub fn indeed_uk() -> Self {
        Self {
            version: s!("indeed-uk-builtin"),
            card: s!("a[class^=tapItem]"),
            link: s!("a[class^=tapItem]"),
            posted: s!(r#"span[class*="date"]"#),
            page_title: s!("title"),
            title: s!("h1"),
            salary: s!("span.icl-u-xs-mr--xs"),
            company: s!("div.icl-u-lg-mr--sm.icl-u-xs-mr--xs"),
            location_container: s!("div.jobsearch-JobInfoHeader-subtitle"),
            location_token: s!("div"),
            description: s!("div#jobDescriptionText"),
        }
    }

    /// Built-in table with the keys present in `path` overridden.
    pub fn load(path: &Path) -> Result<Self> {
        let err = |reason: String| ScrapeError::SelectorTable { path: path.to_path_buf(), reason };
        let text = fs::read_to_string(path).map_err(|e| err(e.to_string()))?;
        let table: SelectorTable = serde_json::from_str(&text).map_err(|e| err(e.to_string()))?;
        info!("Loaded selector table '{}' from {}", table.version, path.display());
        Ok(table)
    }

    /// Built-in table unless an override file is given.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::indeed_uk()),
        }
    }
}
