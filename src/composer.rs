//! Rendering of a [`ProductSnapshot`] into the channel post.
//!
//! The output uses Telegram's legacy Markdown: `*bold*` and `~strike~`.

use crate::models::ProductSnapshot;

pub const TITLE_NOT_FOUND: &str = "Título não encontrado";
pub const NO_RATING: &str = "Sem avaliações";
const HEADLINE: &str = "🔥 OFERTA IMPERDÍVEL 🔥";
const DISCLAIMER: &str = "🛒 Estoque limitado! Preços podem mudar a qualquer momento.";

/// Renders the post for `snapshot`, linking to `purchase_link`.
///
/// A failed snapshot yields a private diagnostic and a snapshot without a
/// current price yields an "unavailable" notice; neither contains the link
/// and neither should be published (see [`ProductSnapshot::is_postable`]).
pub fn compose(snapshot: &ProductSnapshot, purchase_link: &str) -> String {
    if snapshot.is_failed() {
        let error = snapshot.error.as_deref().unwrap_or_default();
        return format!("Ocorreu um erro: {error}");
    }

    let title = snapshot.title.as_deref().unwrap_or(TITLE_NOT_FOUND);
    let Some(current) = &snapshot.current_price_text else {
        return format!("Produto '{title}' parece estar indisponível.");
    };

    let mut lines = vec![
        HEADLINE.to_string(),
        String::new(),
        format!("🏷️ *Produto:* {title}"),
        String::new(),
    ];
    if let Some(original) = &snapshot.original_price_text {
        lines.push(format!("❌ De: ~{original}~"));
    }
    lines.push(format!("✅ *Por: {current}*"));
    if let Some(pct) = snapshot.discount_percent {
        lines.push(format!("🤑 *{pct}% OFF de desconto!* 🔥"));
    }

    let rating = snapshot.rating.as_deref().unwrap_or(NO_RATING);
    lines.push(String::new());
    lines.push(match snapshot.review_count.as_deref() {
        Some(reviews) => format!("⭐ *Avaliação:* {rating} ({reviews})"),
        None => format!("⭐ *Avaliação:* {rating}"),
    });
    lines.push(String::new());
    lines.push("🔗 *Compre aqui com seu desconto:*".to_string());
    lines.push(purchase_link.to_string());
    lines.push(String::new());
    lines.push(DISCLAIMER.to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn snapshot() -> ProductSnapshot {
        let mut s = ProductSnapshot::failed("");
        s.error = None;
        s.title = Some("Kindle 11ª Geração".into());
        s.current_price_text = Some("R$ 499,00".into());
        s.original_price_text = Some("R$ 599,00".into());
        s.current_price = Some(Decimal::from(499));
        s.original_price = Some(Decimal::from(599));
        s.discount_percent = Some(17);
        s.rating = Some("4,7 de 5".into());
        s.review_count = Some("8.901 avaliações".into());
        s
    }

    #[test]
    fn renders_full_post_in_order() {
        let msg = compose(&snapshot(), "https://amzn.to/abc");
        let expected = "🔥 OFERTA IMPERDÍVEL 🔥\n\n\
                        🏷️ *Produto:* Kindle 11ª Geração\n\n\
                        ❌ De: ~R$ 599,00~\n\
                        ✅ *Por: R$ 499,00*\n\
                        🤑 *17% OFF de desconto!* 🔥\n\
                        \n⭐ *Avaliação:* 4,7 de 5 (8.901 avaliações)\n\n\
                        🔗 *Compre aqui com seu desconto:*\nhttps://amzn.to/abc\n\n\
                        🛒 Estoque limitado! Preços podem mudar a qualquer momento.";
        assert_eq!(msg, expected);
    }

    #[test]
    fn omits_optional_lines() {
        let mut s = snapshot();
        s.original_price_text = None;
        s.original_price = None;
        s.discount_percent = None;
        let msg = compose(&s, "https://x/y");
        assert!(!msg.contains("❌ De:"));
        assert!(!msg.contains("OFF"));
        assert!(msg.contains("✅ *Por: R$ 499,00*"));
    }

    #[test]
    fn error_message_has_no_link() {
        let s = ProductSnapshot::failed("timeout");
        let msg = compose(&s, "https://x/y");
        assert!(msg.contains("timeout"));
        assert!(!msg.contains("https://x/y"));
        assert!(!msg.contains("Compre aqui"));
    }

    #[test]
    fn failed_snapshot_wins_over_prices() {
        let mut s = snapshot();
        s.error = Some("robot check".into());
        let msg = compose(&s, "https://x/y");
        assert_eq!(msg, "Ocorreu um erro: robot check");
    }

    #[test]
    fn unavailable_message_names_product() {
        let mut s = snapshot();
        s.title = Some("Widget".into());
        s.current_price_text = None;
        let msg = compose(&s, "https://x/y");
        assert!(msg.contains("Widget"));
        assert!(msg.contains("indisponível"));
        assert!(!msg.contains("R$"));
    }

    #[test]
    fn sentinels_fill_missing_fields() {
        let mut s = snapshot();
        s.title = None;
        s.rating = None;
        s.review_count = None;
        let msg = compose(&s, "https://x/y");
        assert!(msg.contains(TITLE_NOT_FOUND));
        assert!(msg.contains("⭐ *Avaliação:* Sem avaliações\n"));
    }
}
