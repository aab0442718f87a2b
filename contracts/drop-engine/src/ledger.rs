use crate::*;

/// Narrow capability seam for cross-collection ownership checks. The core
/// never embeds another collection's internal representation; it only asks
/// who owns `(collection, token_id)` right now.
pub trait OwnershipOracle {
    fn owner_of(&self, collection: &AccountId, token_id: u64) -> Option<AccountId>;
}

/// Minimal ownership/supply bookkeeping for one hosted collection.
///
/// Token ids are sequential from 1; supply only grows. Transfer and burn are
/// deliberately absent: issuance is the only mutation this engine performs,
/// everything else belongs to the surrounding ledger component.
#[near(serializers = [borsh])]
pub struct TokenLedger {
    owners: IterableMap<u64, AccountId>,
    balances: LookupMap<AccountId, u32>,
    total: u32,
}

impl TokenLedger {
    pub fn new(owners_key: StorageKey, balances_key: StorageKey) -> Self {
        Self {
            owners: IterableMap::new(owners_key),
            balances: LookupMap::new(balances_key),
            total: 0,
        }
    }

    pub fn total_minted(&self) -> u32 {
        self.total
    }

    pub fn owner_of(&self, token_id: u64) -> Option<&AccountId> {
        self.owners.get(&token_id)
    }

    pub fn balance_of(&self, account_id: &AccountId) -> u32 {
        self.balances.get(account_id).copied().unwrap_or(0)
    }

    /// Mints the next sequential token id to `to` and returns it.
    pub fn mint(&mut self, to: &AccountId) -> u64 {
        self.total += 1;
        let token_id = self.total as u64;
        self.owners.insert(token_id, to.clone());
        let balance = self.balances.get(to).copied().unwrap_or(0);
        self.balances.insert(to.clone(), balance + 1);
        token_id
    }

    pub fn mint_batch(&mut self, to: &AccountId, count: u32) -> Vec<u64> {
        (0..count).map(|_| self.mint(to)).collect()
    }

    /// Ascending token ids owned by `account_id`. View-only; walks the
    /// insertion-ordered owner map.
    pub fn tokens_owned_by(&self, account_id: &AccountId) -> Vec<u64> {
        self.owners
            .iter()
            .filter(|(_, owner)| *owner == account_id)
            .map(|(token_id, _)| *token_id)
            .collect()
    }
}

/// Ownership facts for enabled external input collections.
///
/// NEAR has no synchronous cross-contract reads, so each enabled collection
/// pushes its transfers here (`record_input_owner`, gated on the predecessor
/// being that collection). The oracle trait keeps the admission paths
/// ignorant of where the facts come from.
#[near(serializers = [borsh])]
pub struct InputBook {
    enabled: IterableSet<AccountId>,
    owners: LookupMap<String, AccountId>,
}

impl InputBook {
    pub fn new(enabled_key: StorageKey, owners_key: StorageKey) -> Self {
        Self {
            enabled: IterableSet::new(enabled_key),
            owners: LookupMap::new(owners_key),
        }
    }

    pub fn is_enabled(&self, collection: &AccountId) -> bool {
        self.enabled.contains(collection)
    }

    pub fn enable(&mut self, collection: &AccountId) -> Result<(), IssuanceError> {
        if self.enabled.contains(collection) {
            return Err(IssuanceError::AlreadySet(format!(
                "Input collection {} already enabled",
                collection
            )));
        }
        self.enabled.insert(collection.clone());
        Ok(())
    }

    pub fn disable(&mut self, collection: &AccountId) -> Result<(), IssuanceError> {
        if !self.enabled.remove(collection) {
            return Err(IssuanceError::InputDisabled(format!(
                "Input collection {} not enabled",
                collection
            )));
        }
        Ok(())
    }

    pub fn enabled_collections(&self) -> Vec<&AccountId> {
        self.enabled.iter().collect()
    }

    pub fn record(&mut self, collection: &AccountId, token_id: u64, owner: AccountId) {
        self.owners
            .insert(crate::guards::input_key(collection, token_id), owner);
    }
}

impl OwnershipOracle for InputBook {
    fn owner_of(&self, collection: &AccountId, token_id: u64) -> Option<AccountId> {
        self.owners
            .get(&crate::guards::input_key(collection, token_id))
            .cloned()
    }
}
