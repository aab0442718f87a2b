use near_sdk::AccountId;
use near_sdk::json_types::U128;

use super::SALE;
use super::builder::EventBuilder;
use super::nep171;

// Token ids are numeric per collection; NEP-171 envelopes carry them
// collection-qualified so indexers see globally unique ids.
pub(crate) fn qualified_ids(collection: &str, token_ids: &[u64]) -> Vec<String> {
    token_ids
        .iter()
        .map(|id| format!("{}:{}", collection, id))
        .collect()
}

pub fn emit_presale_purchase(buyer_id: &AccountId, count: u32, total_price: U128, token_ids: &[u64]) {
    EventBuilder::new(SALE, "presale_purchase", buyer_id)
        .field("count", count)
        .field("total_price", total_price)
        .field("token_ids", token_ids)
        .emit();
    nep171::emit_mint(buyer_id.as_str(), &qualified_ids("genesis", token_ids), None);
}

pub fn emit_public_purchase(
    buyer_id: &AccountId,
    count: u32,
    unit_price: U128,
    total_price: U128,
    token_ids: &[u64],
) {
    EventBuilder::new(SALE, "public_purchase", buyer_id)
        .field("count", count)
        .field("unit_price", unit_price)
        .field("total_price", total_price)
        .field("token_ids", token_ids)
        .emit();
    nep171::emit_mint(buyer_id.as_str(), &qualified_ids("genesis", token_ids), None);
}

pub fn emit_reserve(actor_id: &AccountId, receiver_id: &AccountId, token_ids: &[u64]) {
    EventBuilder::new(SALE, "reserve", actor_id)
        .field("receiver_id", receiver_id)
        .field("token_ids", token_ids)
        .emit();
    nep171::emit_mint(receiver_id.as_str(), &qualified_ids("genesis", token_ids), None);
}
