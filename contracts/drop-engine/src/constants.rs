use near_sdk::NearToken;

pub const BASIS_POINTS: u16 = 10_000; // 100%
pub const DEFAULT_ROYALTY_BPS: u16 = 750; // 7.5%
pub const MAX_ROYALTY_BPS: u16 = 5_000; // 50%

/// Ceiling on owner reservations across the contract lifetime, independent of
/// the paid-sale supply limits.
pub const MAX_OWNER_RESERVE: u32 = 101;

pub const MAX_BATCH_CLAIM: usize = 100;

/// Weighted outcome buckets for relic classification, in basis points of the
/// total weight. One entry per outcome artwork.
pub const OUTCOME_WEIGHTS: [u16; 4] = [100, 1_500, 3_000, 5_400];
pub const TOTAL_OUTCOME_WEIGHT: u64 = 10_000;

/// Domain tag mixed into every voucher hash, together with the issuing
/// contract's own account id, to block cross-contract and cross-network replay.
pub const VOUCHER_DOMAIN_NAME: &str = "drop-engine";
pub const VOUCHER_DOMAIN_VERSION: &str = "1";

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);
