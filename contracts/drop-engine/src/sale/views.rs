use crate::*;

#[near]
impl Contract {
    /// Current Dutch-auction unit price.
    pub fn current_price(&self) -> U128 {
        U128(crate::sale::pricing::auction_price(
            &self.auction_config,
            env::block_timestamp(),
        ))
    }

    pub fn presale_config(&self) -> &PresaleConfig {
        &self.presale_config
    }

    pub fn dutch_auction_config(&self) -> &DutchAuctionConfig {
        &self.auction_config
    }

    pub fn total_supply(&self, collection: Collection) -> u32 {
        self.ledger_for(collection).total_minted()
    }

    pub fn presale_minted(&self) -> u32 {
        self.presale_minted
    }

    pub fn reserved_count(&self) -> u32 {
        self.reserved_count
    }

    pub fn owner_of(&self, collection: Collection, token_id: u64) -> Option<&AccountId> {
        self.ledger_for(collection).owner_of(token_id)
    }

    pub fn balance_of(&self, collection: Collection, account_id: AccountId) -> u32 {
        self.ledger_for(collection).balance_of(&account_id)
    }

    /// Ascending token ids of the genesis tokens held by `account_id`.
    pub fn tokens_owned_by(&self, account_id: AccountId) -> Vec<u64> {
        self.genesis.tokens_owned_by(&account_id)
    }

    #[handle_result]
    pub fn token_uri(
        &self,
        collection: Collection,
        token_id: u64,
    ) -> Result<String, IssuanceError> {
        if self.ledger_for(collection).owner_of(token_id).is_none() {
            return Err(IssuanceError::NotFound(format!(
                "Token {} not found",
                token_id
            )));
        }
        Ok(match collection {
            Collection::Genesis => format!("{}{}", self.base_uri, token_id),
            Collection::Chimera => self
                .chimera_uris
                .get(&token_id)
                .cloned()
                .unwrap_or_else(|| self.default_chimera_uri.clone()),
            Collection::Relic => self.relic_uri(token_id),
        })
    }

    pub fn enabled_input_collections(&self) -> Vec<&AccountId> {
        self.inputs.enabled_collections()
    }

    pub fn proceeds(&self) -> U128 {
        U128(self.proceeds)
    }

    pub fn payees(&self) -> &Vec<PayeeSplit> {
        &self.payees
    }

    pub fn withdraw_access(&self) -> WithdrawAccess {
        self.withdraw_access
    }

    pub fn provenance(&self) -> Option<String> {
        self.provenance_hash.map(hex::encode)
    }

    pub fn randomized_start_index(&self) -> u32 {
        self.randomized_start_index
    }

    pub fn randomized_seed(&self) -> u64 {
        self.randomized_seed
    }

    pub fn is_mint_active(&self) -> bool {
        self.mint_active
    }
}

impl Contract {
    pub(crate) fn ledger_for(&self, collection: Collection) -> &TokenLedger {
        match collection {
            Collection::Genesis => &self.genesis,
            Collection::Chimera => &self.chimeras,
            Collection::Relic => &self.relics,
        }
    }
}
