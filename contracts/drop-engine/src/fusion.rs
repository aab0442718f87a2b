//! Voucher-gated fusion of a genesis source with an external input token.

use crate::*;
use crate::ledger::OwnershipOracle as _;
use near_sdk::json_types::Base64VecU8;

#[near]
impl Contract {
    /// Consumes one genesis source and one enabled external input to mint a
    /// chimera. Both keys are one-shot; either having been used before fails
    /// the whole call. `result_uri` is signed into the voucher, so metadata
    /// cannot be swapped after signing. An empty `result_uri` is valid and
    /// means the result is still being prepared off-chain.
    #[payable]
    #[handle_result]
    pub fn recombine(
        &mut self,
        source_id: u64,
        input_collection: AccountId,
        input_id: u64,
        result_uri: String,
        signature: Base64VecU8,
    ) -> Result<u64, IssuanceError> {
        let caller = env::predecessor_account_id();

        if !self.inputs.is_enabled(&input_collection) {
            return Err(IssuanceError::InputDisabled(format!(
                "Input collection {} is not enabled",
                input_collection
            )));
        }
        if self.claims.is_source_used(source_id) {
            return Err(IssuanceError::source_already_used(source_id));
        }
        if self.claims.is_input_used(&input_collection, input_id) {
            return Err(IssuanceError::input_already_used(&input_collection, input_id));
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
        match self.inputs.owner_of(&input_collection, input_id) {
            Some(owner) if owner == caller => {}
            _ => {
                return Err(IssuanceError::NotOwner(format!(
                    "Caller does not own input token {}:{}",
                    input_collection, input_id
                )));
            }
        }

        crate::voucher::verify_fusion_voucher(
            self.trusted_signer.as_ref(),
            &caller,
            source_id,
            &input_collection,
            input_id,
            &result_uri,
            &signature.0,
        )?;

        self.claims.consume_source(source_id)?;
        self.claims.consume_input(&input_collection, input_id)?;

        let chimera_id = self.chimeras.mint(&caller);
        if result_uri.is_empty() {
            events::emit_chimera_incubating(&caller, chimera_id, source_id);
        } else {
            self.chimera_uris.insert(chimera_id, result_uri);
            events::emit_chimera_created(&caller, chimera_id, source_id);
        }
        Ok(chimera_id)
    }

    pub fn is_source_used(&self, source_id: u64) -> bool {
        self.claims.is_source_used(source_id)
    }

    pub fn is_input_used(&self, input_collection: AccountId, input_id: u64) -> bool {
        self.claims.is_input_used(&input_collection, input_id)
    }

    /// Backfills a chimera's metadata once off-chain preparation finishes.
    #[payable]
    #[handle_result]
    pub fn set_chimera_uri(&mut self, token_id: u64, uri: String) -> Result<(), IssuanceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if self.chimeras.owner_of(token_id).is_none() {
            return Err(IssuanceError::NotFound(format!(
                "Token {} not found",
                token_id
            )));
        }
        self.chimera_uris.insert(token_id, uri);
        Ok(())
    }
}
