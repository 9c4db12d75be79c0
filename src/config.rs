use std::time::Duration;

use crate::error::OfferError;

const DEFAULT_CHANNEL_ID: &str = "@ofertasdopit";
const DEFAULT_STORE_BASE_URL: &str = "https://www.amazon.com.br";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;

/// Process configuration read from the environment.
///
/// Only the fetch and delivery collaborators take this; extraction needs none.
#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: Option<String>,
    pub channel_id: String,
    pub affiliate_tag: Option<String>,
    pub store_base_url: String,
    pub fetch_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, OfferError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, OfferError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let fetch_timeout = match non_empty("FETCH_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| OfferError::InvalidConfig {
                    key: "FETCH_TIMEOUT_SECS",
                    reason: e.to_string(),
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        };

        Ok(Self {
            bot_token: non_empty("TELEGRAM_BOT_TOKEN"),
            channel_id: non_empty("TELEGRAM_CHANNEL_ID")
                .unwrap_or_else(|| DEFAULT_CHANNEL_ID.to_string()),
            affiliate_tag: non_empty("AFFILIATE_TAG"),
            store_base_url: non_empty("STORE_BASE_URL")
                .unwrap_or_else(|| DEFAULT_STORE_BASE_URL.to_string()),
            fetch_timeout,
        })
    }

    /// The bot token, required only when posting to the channel.
    pub fn require_bot_token(&self) -> Result<&str, OfferError> {
        self.bot_token
            .as_deref()
            .ok_or(OfferError::MissingConfig {
                key: "TELEGRAM_BOT_TOKEN",
            })
    }
}
