use near_sdk::json_types::U128;
use near_sdk::store::{IterableMap, IterableSet, LookupMap, LookupSet};
use near_sdk::{AccountId, NearToken, PanicOnDefault, Promise, PublicKey, env, near};

pub mod constants;
mod errors;
mod guards;
mod storage;

mod events;

mod claims;
mod fairness;
mod fusion;
mod ledger;
mod relic;
mod sale;
mod voucher;

mod payout;
mod royalties;

mod admin;


pub use claims::ClaimBook;
pub use constants::*;
pub use errors::IssuanceError;
pub use ledger::{InputBook, OwnershipOracle, TokenLedger};
pub use payout::{PayeeSplit, WithdrawAccess};
pub use sale::{DutchAuctionConfig, PresaleConfig};
pub use storage::StorageKey;

/// Which of the three hosted collections a token id refers to.
#[near(serializers = [borsh, json])]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Collection {
    Genesis,
    Chimera,
    Relic,
}

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,
    pub owner_id: AccountId,

    /// Off-chain voucher authority. Vouchers are rejected until this is set.
    pub trusted_signer: Option<PublicKey>,

    pub presale_config: PresaleConfig,
    pub auction_config: DutchAuctionConfig,
    /// Gate for the relic claim phase; open-ended, bounded only by source supply.
    pub mint_active: bool,

    pub presale_minted: u32,
    pub reserved_count: u32,

    pub genesis: TokenLedger,
    pub chimeras: TokenLedger,
    pub relics: TokenLedger,
    /// Ownership facts for enabled external input collections.
    pub inputs: InputBook,

    /// One-shot consumption records; monotonic for the contract lifetime.
    pub claims: ClaimBook,

    pub provenance_hash: Option<[u8; 32]>,
    pub randomized_start_index: u32,
    pub index_rolled: bool,
    pub randomized_seed: u64,
    pub seed_set: bool,

    pub payees: Vec<PayeeSplit>,
    pub withdraw_access: WithdrawAccess,
    /// Sale revenue held for the payee split. Exact prices only; overpayment
    /// is refunded in the same call and never lands here.
    pub proceeds: u128,

    pub royalty_recipient: AccountId,
    pub royalty_bps: u16,

    pub base_uri: String,
    pub default_chimera_uri: String,
    pub(crate) chimera_uris: LookupMap<u64, String>,
    pub relic_unrevealed_uri: String,
    pub relic_outcome_uris: Vec<String>,
}
