use near_sdk::AccountId;

use super::CLAIM;
use super::builder::EventBuilder;
use super::nep171;
use super::sale::qualified_ids;

pub fn emit_relic_claim(owner_id: &AccountId, token_ids: &[u64]) {
    EventBuilder::new(CLAIM, "relic_claim", owner_id)
        .field("token_ids", token_ids)
        .emit();
    nep171::emit_mint(owner_id.as_str(), &qualified_ids("relic", token_ids), None);
}

pub fn emit_mint_active_toggled(actor_id: &AccountId, active: bool) {
    EventBuilder::new(CLAIM, "mint_active_toggled", actor_id)
        .field("active", active)
        .emit();
}
