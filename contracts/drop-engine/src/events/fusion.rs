use near_sdk::AccountId;

use super::FUSION;
use super::builder::EventBuilder;
use super::nep171;
use super::sale::qualified_ids;

pub fn emit_chimera_created(owner_id: &AccountId, chimera_id: u64, source_id: u64) {
    EventBuilder::new(FUSION, "chimera_created", owner_id)
        .field("chimera_id", chimera_id)
        .field("source_id", source_id)
        .emit();
    nep171::emit_mint(owner_id.as_str(), &qualified_ids("chimera", &[chimera_id]), None);
}

/// Same mint, but the result metadata was not ready at fusion time.
pub fn emit_chimera_incubating(owner_id: &AccountId, chimera_id: u64, source_id: u64) {
    EventBuilder::new(FUSION, "chimera_incubating", owner_id)
        .field("chimera_id", chimera_id)
        .field("source_id", source_id)
        .emit();
    nep171::emit_mint(owner_id.as_str(), &qualified_ids("chimera", &[chimera_id]), None);
}
