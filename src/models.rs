use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Normalized view of one product page at fetch time.
///
/// When `error` is set every other field is meaningless; check it first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub current_price_text: Option<String>,
    pub original_price_text: Option<String>,
    pub current_price: Option<Decimal>,
    pub original_price: Option<Decimal>,
    /// Present only when both prices are present and `original > current`.
    pub discount_percent: Option<u32>,
    pub rating: Option<String>,
    pub review_count: Option<String>,
    pub product_id: Option<String>,
    pub error: Option<String>,
    pub fetched_at: DateTime<Utc>,
}

impl ProductSnapshot {
    /// A snapshot for a page that could not be retrieved or was unusable.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            title: None,
            image_url: None,
            current_price_text: None,
            original_price_text: None,
            current_price: None,
            original_price: None,
            discount_percent: None,
            rating: None,
            review_count: None,
            product_id: None,
            error: Some(error.into()),
            fetched_at: Utc::now(),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Whether the snapshot may be published: no error and a current price.
    pub fn is_postable(&self) -> bool {
        self.error.is_none() && self.current_price_text.is_some()
    }
}
