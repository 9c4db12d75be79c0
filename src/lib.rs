pub mod archiver;
pub mod composer;
pub mod config;
pub mod delivery;
pub mod discount;
pub mod error;
pub mod fetcher;
pub mod locator;
pub mod models;
pub mod parser;
pub mod price;
pub mod selectors;

pub use composer::compose;
pub use config::Config;
pub use error::OfferError;
pub use models::ProductSnapshot;
pub use parser::extract;
