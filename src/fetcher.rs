use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::redirect;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::OfferError;
use crate::models::ProductSnapshot;
use crate::parser;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";
const MAX_REDIRECTS: usize = 10;

/// A product page body together with the URL it was finally served from.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: String,
    pub html: String,
}

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: &Config) -> Result<Self, OfferError> {
        // Short links (amzn.to) redirect to the product page.
        let redirect_policy = redirect::Policy::custom(|attempt| {
            if attempt.previous().len() >= MAX_REDIRECTS {
                attempt.error(format!("too many redirects (>{MAX_REDIRECTS})"))
            } else {
                attempt.follow()
            }
        });

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("pt-BR,pt;q=0.9,en-US;q=0.8,en;q=0.7"),
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8",
            ),
        );

        let client = Client::builder()
            .redirect(redirect_policy)
            .default_headers(headers)
            .timeout(config.fetch_timeout)
            .build()?;

        Ok(Self { client })
    }

    /// Fetches a product page, following redirects.
    ///
    /// # Errors
    ///
    /// Returns [`OfferError::UnexpectedStatus`] on a non-2xx response and
    /// [`OfferError::Blocked`] when the storefront serves a robot check.
    pub fn fetch_page(&self, url: &str) -> Result<FetchedPage, OfferError> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        let final_url = resp.url().to_string();
        if !status.is_success() {
            return Err(OfferError::UnexpectedStatus {
                status: status.as_u16(),
                url: final_url,
            });
        }

        let html = resp.text()?;
        if parser::is_blocked_page(&html) {
            return Err(OfferError::Blocked { url: final_url });
        }

        Ok(FetchedPage {
            url: final_url,
            html,
        })
    }

    /// Downloads the product image for posting alongside the message.
    pub fn fetch_image(&self, url: &str) -> Result<Vec<u8>, OfferError> {
        let resp = self.client.get(url).send()?.error_for_status()?;
        let bytes = resp.bytes()?;
        info!(url, size = bytes.len(), "downloaded product image");
        Ok(bytes.to_vec())
    }
}

/// Fetches and extracts a product page. Any transport failure becomes a
/// failed snapshot rather than an error.
pub fn fetch_snapshot(fetcher: &Fetcher, url: &str) -> ProductSnapshot {
    match fetcher.fetch_page(url) {
        Ok(page) => parser::extract(&page.html, &page.url),
        Err(e) => {
            warn!(url, error = %e, "product page fetch failed");
            ProductSnapshot::failed(format!("Falha ao acessar a URL. Detalhes: {e}"))
        }
    }
}
