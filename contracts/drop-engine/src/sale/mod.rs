mod presale;
pub(crate) mod pricing;
mod public_sale;
mod types;
mod views;

pub use types::{DutchAuctionConfig, PresaleConfig};
