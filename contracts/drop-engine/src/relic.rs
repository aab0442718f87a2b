//! Relic claim phase: one free relic per genesis source, ever.

use crate::*;

#[near]
impl Contract {
    /// Claims one relic per listed genesis source. Ids are processed in
    /// order; the first failing id aborts the call and reverts the claims
    /// recorded before it.
    #[handle_result]
    pub fn claim_from(&mut self, source_ids: Vec<u64>) -> Result<Vec<u64>, IssuanceError> {
        let caller = env::predecessor_account_id();

        if !self.mint_active {
            return Err(IssuanceError::mint_not_active());
        }
        if source_ids.is_empty() {
            return Err(IssuanceError::InvalidInput(
                "At least one source token is required".into(),
            ));
        }
        if source_ids.len() > MAX_BATCH_CLAIM {
            return Err(IssuanceError::TransactionLimitExceeded(format!(
                "At most {} claims per call",
                MAX_BATCH_CLAIM
            )));
        }

        let mut minted = Vec::with_capacity(source_ids.len());
        for source_id in source_ids {
            // A spent claim is spent for everyone; report that before any
            // ownership question.
            if self.claims.is_claimed(source_id) {
                return Err(IssuanceError::source_already_claimed(source_id));
            }
            match self.genesis.owner_of(source_id) {
                Some(owner) if *owner == caller => {}
                _ => {
                    return Err(IssuanceError::NotOwner(format!(
                        "Caller does not own source token {}",
                        source_id
                    )));
                }
            }
            self.claims.consume_claim(source_id)?;
            minted.push(self.relics.mint(&caller));
        }

        events::emit_relic_claim(&caller, &minted);
        Ok(minted)
    }

    /// Per-id claim eligibility, positionally aligned with the input.
    pub fn can_claim(&self, source_ids: Vec<u64>) -> Vec<bool> {
        source_ids
            .iter()
            .map(|source_id| !self.claims.is_claimed(*source_id))
            .collect()
    }

    #[payable]
    #[handle_result]
    pub fn toggle_mint_active(&mut self) -> Result<bool, IssuanceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        self.mint_active = !self.mint_active;
        events::emit_mint_active_toggled(&self.owner_id, self.mint_active);
        Ok(self.mint_active)
    }
}

impl Contract {
    /// Relic metadata URI: the shared unrevealed URI until the seed is set,
    /// then the weighted outcome URI for this token id.
    pub(crate) fn relic_uri(&self, token_id: u64) -> String {
        if !self.seed_set {
            return self.relic_unrevealed_uri.clone();
        }
        let bucket = crate::fairness::outcome_bucket(self.randomized_seed, token_id);
        self.relic_outcome_uris
            .get(bucket)
            .cloned()
            .unwrap_or_else(|| self.relic_unrevealed_uri.clone())
    }
}
