// src/core/html.rs
// Thin helpers over `scraper` so specs stay about *which* element, not *how* to read it.

use scraper::{ElementRef, Html, Selector};

use crate::core::sanitize::non_blank;
use crate::error::{Result, ScrapeError};

/// Compile one selector, tagging failures with the field it was meant for.
pub fn compile(field: &'static str, selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|_| ScrapeError::Selector { field, selector: s!(selector) })
}

/// All text nodes of `el` concatenated, trimmed. Blank → `None`.
pub fn text_of(el: ElementRef<'_>) -> Option<String> {
    non_blank(&el.text().collect::<String>())
}

/// Non-blank text fragments of `el`, in document order.
pub fn fragments(el: ElementRef<'_>) -> Vec<&str> {
    el.text().map(str::trim).filter(|t| !t.is_empty()).collect()
}

/// First match anywhere in the document.
pub fn first<'a>(doc: &'a Html, sel: &Selector) -> Option<ElementRef<'a>> {
    doc.select(sel).next()
}

/// Last descendant of `el` matching `sel` (never `el` itself).
pub fn last_within<'a>(el: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    el.select(sel).last()
}

/// Does `el` itself match? `ElementRef::select` only looks at descendants.
pub fn matches(el: ElementRef<'_>, sel: &Selector) -> bool {
    sel.matches(&el)
}
