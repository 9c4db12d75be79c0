//! Ordered fallback lookup of a single field in a parsed page.
//!
//! Storefront markup varies between page variants and changes often, so each
//! field is described by a list of [`Strategy`] candidates, most specific
//! first. [`locate`] walks the list and returns the first non-empty value.

use scraper::{ElementRef, Html, Selector};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// One way of reading a value out of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Trimmed text of the first element matching a CSS selector.
    Text(&'static str),
    /// Raw value of an attribute on the first element matching a selector.
    Attr {
        selector: &'static str,
        attr: &'static str,
    },
    /// An attribute holding a JSON object keyed by URL (e.g.
    /// `{"https://…/big.jpg":[1500,1500],"https://…/small.jpg":[500,500]}`).
    /// The first key is taken.
    EmbeddedMap {
        selector: &'static str,
        attr: &'static str,
    },
}

impl Strategy {
    pub fn selector(&self) -> &'static str {
        match self {
            Self::Text(selector)
            | Self::Attr { selector, .. }
            | Self::EmbeddedMap { selector, .. } => *selector,
        }
    }

    fn apply(&self, document: &Html) -> Option<String> {
        let selector = match Selector::parse(self.selector()) {
            Ok(selector) => selector,
            Err(e) => {
                warn!(selector = self.selector(), error = %e, "skipping unparseable selector");
                return None;
            }
        };
        let element = document.select(&selector).next()?;

        let value = match self {
            Self::Text(_) => element_text(element),
            Self::Attr { attr, .. } => element.value().attr(attr)?.trim().to_string(),
            Self::EmbeddedMap { attr, .. } => first_map_key(element.value().attr(attr)?)?,
        };

        (!value.is_empty()).then_some(value)
    }
}

/// Returns the value produced by the first candidate that yields non-empty
/// text, or `None` when no candidate matches.
pub fn locate(document: &Html, candidates: &[Strategy]) -> Option<String> {
    locate_match(document, candidates).map(|(_, value)| value)
}

/// Like [`locate`], also returning the candidate that matched.
pub fn locate_match<'a>(
    document: &Html,
    candidates: &'a [Strategy],
) -> Option<(&'a Strategy, String)> {
    candidates.iter().find_map(|candidate| {
        let value = candidate.apply(document)?;
        debug!(selector = candidate.selector(), "candidate matched");
        Some((candidate, value))
    })
}

/// Text content of an element with runs of whitespace collapsed.
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn first_map_key(raw: &str) -> Option<String> {
    match serde_json::from_str::<Map<String, Value>>(raw) {
        Ok(map) => map.keys().next().map(|key| key.trim().to_string()),
        Err(e) => {
            warn!(error = %e, "embedded image map is not a JSON object");
            None
        }
    }
}
