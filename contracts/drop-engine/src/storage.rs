use near_sdk::BorshStorageKey;
use near_sdk::near;

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    GenesisOwners,
    GenesisBalances,
    ChimeraOwners,
    ChimeraBalances,
    RelicOwners,
    RelicBalances,
    EnabledInputs,
    InputOwners,
    PresaleMintedPerWallet,
    UsedSources,
    UsedInputs,
    ClaimedSources,
    ChimeraUris,
}
