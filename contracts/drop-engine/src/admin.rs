//! Contract initialization and owner-gated configuration.
//!
//! Every mutation here requires the contract owner plus an attached deposit
//! of exactly 1 yoctoNEAR, so a full-access key is needed to call them.

use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(
        owner_id: AccountId,
        base_uri: String,
        payees: Vec<PayeeSplit>,
        presale_config: PresaleConfig,
        auction_config: DutchAuctionConfig,
    ) -> Self {
        if let Err(e) = presale_config.validate() {
            env::panic_str(&e.to_string());
        }
        if let Err(e) = auction_config.validate() {
            env::panic_str(&e.to_string());
        }
        if let Err(e) = crate::payout::validate_payees(&payees) {
            env::panic_str(&e.to_string());
        }

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            royalty_recipient: owner_id.clone(),
            owner_id,
            trusted_signer: None,
            presale_config,
            auction_config,
            mint_active: false,
            presale_minted: 0,
            reserved_count: 0,
            genesis: TokenLedger::new(StorageKey::GenesisOwners, StorageKey::GenesisBalances),
            chimeras: TokenLedger::new(StorageKey::ChimeraOwners, StorageKey::ChimeraBalances),
            relics: TokenLedger::new(StorageKey::RelicOwners, StorageKey::RelicBalances),
            inputs: InputBook::new(StorageKey::EnabledInputs, StorageKey::InputOwners),
            claims: ClaimBook::new(
                StorageKey::PresaleMintedPerWallet,
                StorageKey::UsedSources,
                StorageKey::UsedInputs,
                StorageKey::ClaimedSources,
            ),
            provenance_hash: None,
            randomized_start_index: 0,
            index_rolled: false,
            randomized_seed: 0,
            seed_set: false,
            payees,
            withdraw_access: WithdrawAccess::Anyone,
            proceeds: 0,
            royalty_bps: DEFAULT_ROYALTY_BPS,
            base_uri,
            default_chimera_uri: String::new(),
            chimera_uris: LookupMap::new(StorageKey::ChimeraUris),
            relic_unrevealed_uri: String::new(),
            relic_outcome_uris: Vec::new(),
        }
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), IssuanceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        events::emit_ownership_transferred(&self.owner_id, &new_owner);
        self.owner_id = new_owner;
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn set_trusted_signer(&mut self, public_key: PublicKey) -> Result<(), IssuanceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if public_key.curve_type() != near_sdk::CurveType::ED25519 {
            return Err(IssuanceError::InvalidInput(
                "Trusted signer must be an ed25519 key".into(),
            ));
        }
        self.trusted_signer = Some(public_key);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn configure_presale(&mut self, config: PresaleConfig) -> Result<(), IssuanceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        config.validate()?;
        self.presale_config = config;
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn configure_dutch_auction(
        &mut self,
        config: DutchAuctionConfig,
    ) -> Result<(), IssuanceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        config.validate()?;
        self.auction_config = config;
        Ok(())
    }

    /// Mints genesis tokens to `to` without payment, against a lifetime
    /// reserve ceiling that is independent of the paid-sale phases.
    #[payable]
    #[handle_result]
    pub fn reserve(&mut self, to: AccountId, count: u32) -> Result<Vec<u64>, IssuanceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if count == 0 {
            return Err(IssuanceError::InvalidInput(
                "Count must be at least 1".into(),
            ));
        }
        if self.reserved_count + count > MAX_OWNER_RESERVE {
            return Err(IssuanceError::SupplyExceeded(format!(
                "Owner reserve is capped at {}",
                MAX_OWNER_RESERVE
            )));
        }
        if self.genesis.total_minted() + count > self.auction_config.supply_limit {
            return Err(IssuanceError::not_enough_remaining("reserve"));
        }
        let token_ids = self.genesis.mint_batch(&to, count);
        self.reserved_count += count;
        events::emit_reserve(&self.owner_id, &to, &token_ids);
        Ok(token_ids)
    }

    #[payable]
    #[handle_result]
    pub fn enable_input_collection(
        &mut self,
        collection: AccountId,
    ) -> Result<(), IssuanceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        self.inputs.enable(&collection)?;
        events::emit_input_collection_toggled(&self.owner_id, &collection, true);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn disable_input_collection(
        &mut self,
        collection: AccountId,
    ) -> Result<(), IssuanceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        self.inputs.disable(&collection)?;
        events::emit_input_collection_toggled(&self.owner_id, &collection, false);
        Ok(())
    }

    /// Ownership fact push from an enabled input collection. The predecessor
    /// must be the collection contract itself; no other account can assert
    /// who owns its tokens.
    #[handle_result]
    pub fn record_input_owner(
        &mut self,
        token_id: u64,
        owner: AccountId,
    ) -> Result<(), IssuanceError> {
        let collection = env::predecessor_account_id();
        if !self.inputs.is_enabled(&collection) {
            return Err(IssuanceError::InputDisabled(format!(
                "Input collection {} is not enabled",
                collection
            )));
        }
        self.inputs.record(&collection, token_id, owner);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn set_base_uri(&mut self, base_uri: String) -> Result<(), IssuanceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        self.base_uri = base_uri;
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn set_default_chimera_uri(&mut self, uri: String) -> Result<(), IssuanceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        self.default_chimera_uri = uri;
        Ok(())
    }

    /// Sets the unrevealed URI and the per-outcome URIs. The outcome list
    /// must cover every weighted bucket.
    #[payable]
    #[handle_result]
    pub fn set_relic_uris(
        &mut self,
        unrevealed_uri: String,
        outcome_uris: Vec<String>,
    ) -> Result<(), IssuanceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if outcome_uris.len() != OUTCOME_WEIGHTS.len() {
            return Err(IssuanceError::InvalidInput(format!(
                "Expected {} outcome URIs",
                OUTCOME_WEIGHTS.len()
            )));
        }
        self.relic_unrevealed_uri = unrevealed_uri;
        self.relic_outcome_uris = outcome_uris;
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_version(&self) -> &String {
        &self.version
    }

    pub fn get_trusted_signer(&self) -> Option<&PublicKey> {
        self.trusted_signer.as_ref()
    }
}
