// src/specs/detail.rs
//! Job detail page → five independently optional fields.
//!
//! Each field is looked up on its own; a missing salary chip says nothing about
//! the company name. Absence stays `None` here and is only rendered as `N/A`
//! at export time.

use scraper::{Html, Selector};

use crate::core::html::{compile, first, last_within, text_of};
use crate::error::Result;
use crate::specs::selectors::SelectorTable;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobDetail {
    pub title: Option<String>,
    pub salary: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl JobDetail {
    /// Field values in export column order.
    pub fn fields(&self) -> [Option<&str>; 5] {
        [
            self.title.as_deref(),
            self.salary.as_deref(),
            self.company.as_deref(),
            self.location.as_deref(),
            self.description.as_deref(),
        ]
    }
}

pub struct DetailParser {
    title: Selector,
    salary: Selector,
    company: Selector,
    location_container: Selector,
    location_token: Selector,
    description: Selector,
}

impl DetailParser {
    pub fn new(table: &SelectorTable) -> Result<Self> {
        Ok(Self {
            title: compile("title", &table.title)?,
            salary: compile("salary", &table.salary)?,
            company: compile("company", &table.company)?,
            location_container: compile("location_container", &table.location_container)?,
            location_token: compile("location_token", &table.location_token)?,
            description: compile("description", &table.description)?,
        })
    }

    pub fn parse(&self, html: &str) -> JobDetail {
        let doc = Html::parse_document(html);
        JobDetail {
            title: self.first_text(&doc, &self.title),
            salary: self.first_text(&doc, &self.salary),
            company: self.first_text(&doc, &self.company),
            location: self.location(&doc),
            description: self.first_text(&doc, &self.description),
        }
    }

    fn first_text(&self, doc: &Html, sel: &Selector) -> Option<String> {
        first(doc, sel).and_then(text_of)
    }

    // The subtitle holds several tokens (company, rating, commute type…);
    // location is conventionally the last nested one.
    fn location(&self, doc: &Html) -> Option<String> {
        let container = first(doc, &self.location_container)?;
        last_within(container, &self.location_token).and_then(text_of)
    }
}
