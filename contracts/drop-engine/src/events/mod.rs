mod builder;

mod contract;
mod fairness;
mod fusion;
mod nep171;
mod relic;
mod sale;

pub use contract::*;
pub use fairness::*;
pub use fusion::*;
pub use relic::*;
pub use sale::*;

pub(crate) const STANDARD: &str = "drop_engine";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const SALE: &str = "SALE_UPDATE";
pub(crate) const FAIRNESS: &str = "FAIRNESS_UPDATE";
pub(crate) const FUSION: &str = "FUSION_UPDATE";
pub(crate) const CLAIM: &str = "CLAIM_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
