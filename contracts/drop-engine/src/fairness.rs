//! One-shot fairness commitments.
//!
//! Two independent write-once instances: a commit-reveal randomized start
//! index for genesis metadata assignment, and a randomized seed that maps
//! each relic token to a weighted outcome bucket. Both mix committed or
//! contract state with `env::random_seed()`. That entropy comes from block
//! production and can be influenced by whoever produces the block at reveal
//! time, within a bounded window; this is a known limitation of on-chain
//! reveal schemes, not something this module tries to paper over.

use crate::*;

#[near]
impl Contract {
    /// Commits the provenance hash (hex-encoded 32 bytes). May be re-set
    /// while uncommitted-to; frozen permanently once the index is rolled.
    #[payable]
    #[handle_result]
    pub fn set_provenance(&mut self, hash: String) -> Result<(), IssuanceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if self.index_rolled {
            return Err(IssuanceError::AlreadyRolled(
                "Provenance is immutable once the start index is rolled".into(),
            ));
        }
        let bytes = hex::decode(&hash)
            .map_err(|_| IssuanceError::InvalidInput("Provenance hash must be hex".into()))?;
        let hash_bytes: [u8; 32] = bytes.as_slice().try_into().map_err(|_| {
            IssuanceError::InvalidInput("Provenance hash must be 32 bytes".into())
        })?;
        self.provenance_hash = Some(hash_bytes);
        events::emit_provenance_set(&self.owner_id, &hash);
        Ok(())
    }

    /// Reveals the randomized start index in `[1, supply_limit]`. Requires a
    /// committed provenance hash and a closed sale window, and succeeds at
    /// most once.
    #[payable]
    #[handle_result]
    pub fn roll_start_index(&mut self) -> Result<u32, IssuanceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        let provenance = self.provenance_hash.ok_or_else(|| {
            IssuanceError::ProvenanceNotSet("Provenance hash not set".into())
        })?;
        if self.index_rolled {
            return Err(IssuanceError::AlreadyRolled("Index already set".into()));
        }
        if env::block_timestamp() < self.auction_config.bottom_time {
            return Err(IssuanceError::TooEarly(
                "Too early to roll start index".into(),
            ));
        }

        let mut entropy = Vec::with_capacity(64);
        entropy.extend_from_slice(&provenance);
        entropy.extend_from_slice(&env::random_seed_array());
        let roll = digest_to_u64(&env::sha256_array(&entropy));

        self.randomized_start_index = (roll % self.auction_config.supply_limit as u64) as u32 + 1;
        self.index_rolled = true;
        events::emit_start_index_rolled(&self.owner_id, self.randomized_start_index);
        Ok(self.randomized_start_index)
    }

    /// Reveals the relic outcome seed. One-shot; from this point every relic
    /// token id has a stable weighted classification.
    #[payable]
    #[handle_result]
    pub fn set_randomized_seed(&mut self) -> Result<(), IssuanceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if self.seed_set {
            return Err(IssuanceError::AlreadySet("Seed already set".into()));
        }

        let mut entropy = Vec::with_capacity(40);
        entropy.extend_from_slice(&env::random_seed_array());
        entropy.extend_from_slice(&env::block_height().to_le_bytes());

        self.randomized_seed = digest_to_u64(&env::sha256_array(&entropy));
        self.seed_set = true;
        events::emit_seed_set(&self.owner_id, self.randomized_seed);
        Ok(())
    }
}

fn digest_to_u64(digest: &[u8; 32]) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(word)
}

/// Deterministic weighted bucket for a token id under a revealed seed.
/// `sha256(seed || token_id) mod total weight`, matched against cumulative
/// bucket boundaries.
pub(crate) fn outcome_bucket(seed: u64, token_id: u64) -> usize {
    let mut data = [0u8; 16];
    data[..8].copy_from_slice(&seed.to_le_bytes());
    data[8..].copy_from_slice(&token_id.to_le_bytes());
    let mut roll = digest_to_u64(&env::sha256_array(&data)) % TOTAL_OUTCOME_WEIGHT;
    for (bucket, weight) in OUTCOME_WEIGHTS.iter().enumerate() {
        if roll < *weight as u64 {
            return bucket;
        }
        roll -= *weight as u64;
    }
    OUTCOME_WEIGHTS.len() - 1
}
