use thiserror::Error;

#[derive(Debug, Error)]
pub enum OfferError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("page at {url} is a robot check, not a product page")]
    Blocked { url: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("missing configuration value {key}")]
    MissingConfig { key: &'static str },

    #[error("invalid configuration value for {key}: {reason}")]
    InvalidConfig { key: &'static str, reason: String },

    #[error("\"{link}\" is not a valid link")]
    InvalidLink { link: String },

    #[error("Telegram API rejected {method}: {description}")]
    Delivery { method: &'static str, description: String },
}
