use std::sync::LazyLock;

use chrono::Utc;
use regex::Regex;
use scraper::Html;
use tracing::{debug, info, warn};

use crate::discount::{parse_discount_text, resolve_discount};
use crate::locator::{Strategy, locate, locate_match};
use crate::models::ProductSnapshot;
use crate::price::normalize_price;
use crate::selectors;

static PRODUCT_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/(?:dp|gp/product)/([A-Za-z0-9]{10})(?:[/?#]|$)").expect("valid product id regex")
});

/// Builds a [`ProductSnapshot`] from an already-fetched product page.
///
/// Every field is read independently; a field that cannot be found is left
/// empty and extraction carries on. This never produces an `error`, which is
/// reserved for transport failures detected by the caller.
pub fn extract(html: &str, source_url: &str) -> ProductSnapshot {
    let doc = Html::parse_document(html);

    let title = locate(&doc, selectors::TITLE);
    if title.is_none() {
        debug!("title not found");
    }

    let image_url = locate(&doc, selectors::IMAGE);
    if image_url.is_none() {
        warn!("product image not found");
    }

    let current_price_text = locate_price(&doc, selectors::CURRENT_PRICE, "current");
    let original_price_text = locate_price(&doc, selectors::ORIGINAL_PRICE, "original");

    let current_price = normalize_price(current_price_text.as_deref());
    let original_price = normalize_price(original_price_text.as_deref());
    let derived = resolve_discount(original_price, current_price);

    let scraped = locate(&doc, selectors::DISCOUNT).and_then(|text| parse_discount_text(&text));
    let discount_percent = match (scraped, derived) {
        (Some(scraped), Some(derived)) => {
            if scraped != derived {
                warn!(scraped, derived, "page discount disagrees with prices; keeping page value");
            }
            Some(scraped)
        }
        // A badge without a valid price pair cannot be trusted.
        (Some(scraped), None) => {
            debug!(scraped, "discount badge ignored without a lower current price");
            None
        }
        (None, derived) => derived,
    };

    let rating = locate(&doc, selectors::RATING);
    let review_count = locate(&doc, selectors::REVIEW_COUNT);
    let product_id = extract_product_id(source_url);

    ProductSnapshot {
        title,
        image_url,
        current_price_text,
        original_price_text,
        current_price,
        original_price,
        discount_percent,
        rating,
        review_count,
        product_id,
        error: None,
        fetched_at: Utc::now(),
    }
}

fn locate_price(doc: &Html, candidates: &[Strategy], kind: &str) -> Option<String> {
    let (strategy, price) = locate_match(doc, candidates)?;
    info!(kind, %price, selector = strategy.selector(), "price found");
    Some(price)
}

/// Whether the page is a robot check rather than a product page.
pub fn is_blocked_page(html: &str) -> bool {
    let doc = Html::parse_document(html);
    locate(&doc, selectors::BLOCKED_PAGE).is_some()
}

/// Extracts the 10-character product identifier following `/dp/` or
/// `/gp/product/` in a product URL.
pub fn extract_product_id(url: &str) -> Option<String> {
    PRODUCT_ID_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Canonical product link carrying an affiliate tag.
pub fn affiliate_link(store_base_url: &str, product_id: &str, tag: &str) -> String {
    format!(
        "{}/dp/{}?tag={}",
        store_base_url.trim_end_matches('/'),
        product_id,
        tag
    )
}
