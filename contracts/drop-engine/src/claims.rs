use crate::*;

/// One-shot consumption records for every scarce key the engine guards:
/// a wallet's voucher allowance, a source token's use as fusion input, an
/// external input token's use, and a source token's claim into the relic
/// collection. Counters only increment and flags only flip to used; nothing
/// here is ever reset.
///
/// Each key is validated and recorded individually; callers rely on the
/// surrounding call aborting (and the runtime reverting state) when a later
/// key in a batch fails.
#[near(serializers = [borsh])]
pub struct ClaimBook {
    presale_minted_per_wallet: LookupMap<AccountId, u32>,
    used_sources: LookupSet<u64>,
    used_inputs: LookupSet<String>,
    claimed_sources: LookupSet<u64>,
}

impl ClaimBook {
    pub fn new(
        wallets_key: StorageKey,
        sources_key: StorageKey,
        inputs_key: StorageKey,
        claims_key: StorageKey,
    ) -> Self {
        Self {
            presale_minted_per_wallet: LookupMap::new(wallets_key),
            used_sources: LookupSet::new(sources_key),
            used_inputs: LookupSet::new(inputs_key),
            claimed_sources: LookupSet::new(claims_key),
        }
    }

    pub fn presale_minted_for(&self, wallet: &AccountId) -> u32 {
        self.presale_minted_per_wallet
            .get(wallet)
            .copied()
            .unwrap_or(0)
    }

    /// Counter-style key: fails if the post-increment count would exceed the
    /// voucher's signed limit.
    pub fn consume_allowance(
        &mut self,
        wallet: &AccountId,
        count: u32,
        limit: u32,
    ) -> Result<(), IssuanceError> {
        let minted = self.presale_minted_for(wallet);
        if minted + count > limit {
            return Err(IssuanceError::LimitExceeded(format!(
                "Mint limit exceeded: minted {}, requesting {}, limit {}",
                minted, count, limit
            )));
        }
        self.presale_minted_per_wallet
            .insert(wallet.clone(), minted + count);
        Ok(())
    }

    pub fn is_source_used(&self, token_id: u64) -> bool {
        self.used_sources.contains(&token_id)
    }

    pub fn consume_source(&mut self, token_id: u64) -> Result<(), IssuanceError> {
        if !self.used_sources.insert(token_id) {
            return Err(IssuanceError::source_already_used(token_id));
        }
        Ok(())
    }

    pub fn is_input_used(&self, collection: &AccountId, token_id: u64) -> bool {
        self.used_inputs
            .contains(&crate::guards::input_key(collection, token_id))
    }

    pub fn consume_input(
        &mut self,
        collection: &AccountId,
        token_id: u64,
    ) -> Result<(), IssuanceError> {
        if !self
            .used_inputs
            .insert(crate::guards::input_key(collection, token_id))
        {
            return Err(IssuanceError::input_already_used(collection, token_id));
        }
        Ok(())
    }

    pub fn is_claimed(&self, token_id: u64) -> bool {
        self.claimed_sources.contains(&token_id)
    }

    pub fn consume_claim(&mut self, token_id: u64) -> Result<(), IssuanceError> {
        if !self.claimed_sources.insert(token_id) {
            return Err(IssuanceError::source_already_claimed(token_id));
        }
        Ok(())
    }
}
