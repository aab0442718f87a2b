use near_sdk::AccountId;
use near_sdk::json_types::U128;

use super::CONTRACT;
use super::builder::EventBuilder;

pub fn emit_ownership_transferred(old_owner: &AccountId, new_owner: &AccountId) {
    EventBuilder::new(CONTRACT, "owner_transferred", old_owner)
        .field("old_owner", old_owner)
        .field("new_owner", new_owner)
        .emit();
}

pub fn emit_withdrawal(actor_id: &AccountId, amount: U128) {
    EventBuilder::new(CONTRACT, "withdrawal", actor_id)
        .field("amount", amount)
        .emit();
}

pub fn emit_input_collection_toggled(actor_id: &AccountId, collection: &AccountId, enabled: bool) {
    EventBuilder::new(CONTRACT, "input_collection_toggled", actor_id)
        .field("collection", collection)
        .field("enabled", enabled)
        .emit();
}
