// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Everything a run can fail with. Absent detail fields are not errors;
/// they surface as `None` on [`crate::specs::detail::JobDetail`].
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("fetch failed for {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("results page {url}: {cards} listing cards, {links} job links, {times} posted times")]
    ParseInconsistency { url: String, cards: usize, links: usize, times: usize },

    #[error("results page {url}: listing #{index} has no {missing}")]
    IncompleteListing { url: String, index: usize, missing: &'static str },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("bad selector for {field}: {selector:?}")]
    Selector { field: &'static str, selector: String },

    #[error("could not load selector table {path}: {reason}")]
    SelectorTable { path: PathBuf, reason: String },

    #[error("export to {path} failed: {reason}")]
    Export { path: PathBuf, reason: String },
}

impl ScrapeError {
    pub fn transport(url: &str, reason: impl ToString) -> Self {
        Self::Transport { url: s!(url), reason: reason.to_string() }
    }

    pub fn export(path: &std::path::Path, reason: impl ToString) -> Self {
        Self::Export { path: path.to_path_buf(), reason: reason.to_string() }
    }

    /// Results-page level problems that must not produce rows.
    pub fn is_parse_inconsistency(&self) -> bool {
        matches!(self, Self::ParseInconsistency { .. } | Self::IncompleteListing { .. })
    }
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
