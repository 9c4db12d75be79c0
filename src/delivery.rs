//! Sinks that publish a composed post.

use reqwest::blocking::Client;
use reqwest::blocking::multipart::{Form, Part};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::error::OfferError;

const TELEGRAM_API: &str = "https://api.telegram.org";

pub trait Delivery {
    fn send_text(&self, text: &str) -> Result<(), OfferError>;
    fn send_photo(&self, photo: Vec<u8>, caption: &str) -> Result<(), OfferError>;
}

/// Posts to a Telegram channel through the Bot API using Markdown parsing.
pub struct TelegramDelivery {
    client: Client,
    token: String,
    chat_id: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    description: Option<String>,
}

impl TelegramDelivery {
    pub fn new(token: impl Into<String>, chat_id: impl Into<String>) -> Result<Self, OfferError> {
        Ok(Self {
            client: Client::builder().build()?,
            token: token.into(),
            chat_id: chat_id.into(),
        })
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{TELEGRAM_API}/bot{}/{method}", self.token)
    }
}

impl Delivery for TelegramDelivery {
    fn send_text(&self, text: &str) -> Result<(), OfferError> {
        let body = json!({
            "chat_id": self.chat_id,
            "text": text,
            "parse_mode": "Markdown",
        });
        let resp: ApiResponse = self
            .client
            .post(self.endpoint("sendMessage"))
            .json(&body)
            .send()?
            .json()?;
        check_response("sendMessage", resp)?;
        info!(chat_id = %self.chat_id, "posted text message");
        Ok(())
    }

    fn send_photo(&self, photo: Vec<u8>, caption: &str) -> Result<(), OfferError> {
        let form = Form::new()
            .text("chat_id", self.chat_id.clone())
            .text("caption", caption.to_string())
            .text("parse_mode", "Markdown")
            .part("photo", Part::bytes(photo).file_name("imagem_produto.jpg"));
        let resp: ApiResponse = self
            .client
            .post(self.endpoint("sendPhoto"))
            .multipart(form)
            .send()?
            .json()?;
        check_response("sendPhoto", resp)?;
        info!(chat_id = %self.chat_id, "posted photo with caption");
        Ok(())
    }
}

fn check_response(method: &'static str, resp: ApiResponse) -> Result<(), OfferError> {
    if resp.ok {
        Ok(())
    } else {
        Err(OfferError::Delivery {
            method,
            description: resp
                .description
                .unwrap_or_else(|| "no description".to_string()),
        })
    }
}

/// Prints posts to stdout instead of publishing them.
pub struct StdoutDelivery;

impl Delivery for StdoutDelivery {
    fn send_text(&self, text: &str) -> Result<(), OfferError> {
        println!("{text}");
        Ok(())
    }

    fn send_photo(&self, photo: Vec<u8>, caption: &str) -> Result<(), OfferError> {
        println!("[imagem: {} bytes]\n{caption}", photo.len());
        Ok(())
    }
}
