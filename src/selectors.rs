//! Candidate lists for every field read from a product page.
//!
//! Order matters: page variants expose the same price in several places at
//! once, and the first entry reflects the layout that takes precedence.
//! Update these lists when the storefront markup changes.

use crate::locator::Strategy;

pub const TITLE: &[Strategy] = &[Strategy::Text("span#productTitle")];

pub const IMAGE: &[Strategy] = &[
    Strategy::EmbeddedMap {
        selector: "img#landingImage",
        attr: "data-a-dynamic-image",
    },
    Strategy::Attr {
        selector: "img#landingImage",
        attr: "src",
    },
];

/// Current price, broadest selector last.
pub const CURRENT_PRICE: &[Strategy] = &[
    Strategy::Text("#corePrice_feature_div .a-offscreen"),
    Strategy::Text("#snsPrice .a-offscreen"),
    Strategy::Text("#priceblock_ourprice"),
    Strategy::Text("#priceblock_dealprice"),
    Strategy::Text(".priceToPay .a-offscreen"),
    Strategy::Text(".a-price.a-text-price .a-offscreen"),
];

/// Strike-through "from" price.
pub const ORIGINAL_PRICE: &[Strategy] = &[
    Strategy::Text(r#"span[data-a-strike="true"] .a-offscreen"#),
    Strategy::Text(".basisPrice .a-offscreen"),
    Strategy::Text(".a-text-strike"),
];

/// Discount badge printed by the page itself (`-25%`).
pub const DISCOUNT: &[Strategy] = &[
    Strategy::Text("#corePriceDisplay_desktop_feature_div .savingsPercentage"),
    Strategy::Text(".reinventPriceSavingsPercentageMargin"),
    Strategy::Text(".savingsPercentage"),
];

pub const RATING: &[Strategy] = &[
    Strategy::Text(r#"span[data-hook="rating-out-of-text"]"#),
    Strategy::Text("#acrPopover .a-icon-alt"),
];

pub const REVIEW_COUNT: &[Strategy] = &[Strategy::Text("span#acrCustomerReviewText")];

/// Markers of a robot-check page served in place of the product.
pub const BLOCKED_PAGE: &[Strategy] = &[
    Strategy::Attr {
        selector: r#"form[action="/errors/validateCaptcha"]"#,
        attr: "action",
    },
    Strategy::Attr {
        selector: "input#captchacharacters",
        attr: "id",
    },
];
