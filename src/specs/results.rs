// src/specs/results.rs
//! Search results page → ordered listing stubs.
//!
//! Link and posted time are read from inside the same listing card, so a
//! sponsored card without a date can never shift every later date by one.
//! The flat counts are still cross-checked and any disagreement fails the page.

use log::debug;
use scraper::{Html, Selector};
use url::Url;

use crate::core::html::{compile, first, fragments, matches, text_of};
use crate::error::{Result, ScrapeError};
use crate::specs::selectors::SelectorTable;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingStub {
    /// Absolute detail page URL.
    pub url: String,
    /// As shown by the site, e.g. "3 days ago".
    pub posted: String,
}

pub struct ResultsParser {
    base: Url,
    card: Selector,
    link: Selector,
    posted: Selector,
    title: Selector,
}

impl ResultsParser {
    pub fn new(base: Url, table: &SelectorTable) -> Result<Self> {
        Ok(Self {
            base,
            card: compile("card", &table.card)?,
            link: compile("link", &table.link)?,
            posted: compile("posted", &table.posted)?,
            title: compile("page_title", &table.page_title)?,
        })
    }

    /// `page_url` is only used in error messages.
    pub fn parse(&self, page_url: &str, html: &str) -> Result<Vec<ListingStub>> {
        let doc = Html::parse_document(html);

        let cards = doc.select(&self.card).count();
        let links = doc.select(&self.link).count();
        let times = doc.select(&self.posted).count();
        debug!("{page_url}: {cards} cards, {links} links, {times} dates");

        if cards != links || links != times {
            return Err(ScrapeError::ParseInconsistency { url: s!(page_url), cards, links, times });
        }

        let mut stubs = Vec::with_capacity(cards);
        for (index, card) in doc.select(&self.card).enumerate() {
            let incomplete = |missing| ScrapeError::IncompleteListing { url: s!(page_url), index, missing };

            let link_el = if matches(card, &self.link) {
                Some(card)
            } else {
                card.select(&self.link).next()
            };
            let href = link_el
                .and_then(|a| a.value().attr("href"))
                .ok_or_else(|| incomplete("link"))?;
            let url = self.base.join(href).map_err(|_| incomplete("resolvable link"))?;

            let date_el = card.select(&self.posted).next().ok_or_else(|| incomplete("posted time"))?;
            let posted = posted_text(&fragments(date_el)).ok_or_else(|| incomplete("posted time"))?;

            stubs.push(ListingStub { url: url.to_string(), posted });
        }
        Ok(stubs)
    }

    /// Title of the results page, handy for debugging empty pages.
    pub fn page_title(&self, html: &str) -> Option<String> {
        let doc = Html::parse_document(html);
        first(&doc, &self.title).and_then(text_of)
    }
}

/// The date element reads like `Posted` + `3 days ago`; the label comes first.
fn posted_text(parts: &[&str]) -> Option<String> {
    match parts {
        [] => None,
        [only] => Some(s!(*only)),
        [_, second, ..] => Some(s!(*second)),
    }
}
