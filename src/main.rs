use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use amazon_offer_poster::delivery::{Delivery, StdoutDelivery, TelegramDelivery};
use amazon_offer_poster::fetcher::{self, Fetcher};
use amazon_offer_poster::{Config, OfferError, ProductSnapshot, archiver, compose, parser};

#[derive(Debug, Parser)]
#[command(name = "amazon_offer_poster")]
#[command(about = "Turns an Amazon product link into a promotional channel post")]
struct Cli {
    /// Product URL or short link (amzn.to/...)
    url: String,

    /// Purchase link to print in the post; defaults to the affiliate link
    /// when AFFILIATE_TAG is set, otherwise to the input URL
    #[arg(long)]
    link: Option<String>,

    /// Publish to the Telegram channel instead of printing
    #[arg(long)]
    post: bool,

    /// Write the extracted snapshot as JSON to this path
    #[arg(long)]
    archive: Option<PathBuf>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("loading configuration")?;

    if !cli.url.starts_with("http") {
        return Err(OfferError::InvalidLink { link: cli.url }.into());
    }

    let fetcher = Fetcher::new(&config).context("building HTTP client")?;
    info!(url = %cli.url, "processing link");
    let snapshot = fetcher::fetch_snapshot(&fetcher, &cli.url);

    if let Some(path) = &cli.archive {
        archiver::save_snapshot(&snapshot, path)
            .with_context(|| format!("archiving snapshot to {}", path.display()))?;
    }

    let link = purchase_link(&cli, &config, &snapshot);
    let message = compose(&snapshot, &link);

    // Failures and unavailable items only go back to the requester.
    if !snapshot.is_postable() {
        eprintln!("{message}");
        return Ok(());
    }

    let delivery: Box<dyn Delivery> = if cli.post {
        Box::new(TelegramDelivery::new(
            config.require_bot_token()?,
            config.channel_id.clone(),
        )?)
    } else {
        Box::new(StdoutDelivery)
    };

    publish(&fetcher, delivery.as_ref(), &snapshot, &message)?;
    if cli.post {
        info!(channel = %config.channel_id, "offer posted");
        eprintln!("✅ Oferta postada com sucesso no seu canal!");
    }
    Ok(())
}

fn purchase_link(cli: &Cli, config: &Config, snapshot: &ProductSnapshot) -> String {
    if let Some(link) = &cli.link {
        return link.clone();
    }
    match (&config.affiliate_tag, &snapshot.product_id) {
        (Some(tag), Some(id)) => parser::affiliate_link(&config.store_base_url, id, tag),
        _ => cli.url.clone(),
    }
}

/// Sends the post with its product image, or text-only when the image is
/// missing or cannot be downloaded.
fn publish(
    fetcher: &Fetcher,
    delivery: &dyn Delivery,
    snapshot: &ProductSnapshot,
    message: &str,
) -> Result<()> {
    let photo = snapshot
        .image_url
        .as_deref()
        .and_then(|url| match fetcher.fetch_image(url) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!(url, error = %e, "image download failed");
                None
            }
        });

    match photo {
        Some(bytes) => delivery.send_photo(bytes, message)?,
        None => {
            eprintln!("Não consegui baixar a imagem do produto, postarei apenas o texto.");
            delivery.send_text(message)?;
        }
    }
    Ok(())
}
