use near_sdk::AccountId;

use super::FAIRNESS;
use super::builder::EventBuilder;

pub fn emit_provenance_set(actor_id: &AccountId, hash: &str) {
    EventBuilder::new(FAIRNESS, "provenance_set", actor_id)
        .field("hash", hash)
        .emit();
}

pub fn emit_start_index_rolled(actor_id: &AccountId, start_index: u32) {
    EventBuilder::new(FAIRNESS, "start_index_rolled", actor_id)
        .field("start_index", start_index)
        .emit();
}

pub fn emit_seed_set(actor_id: &AccountId, seed: u64) {
    EventBuilder::new(FAIRNESS, "seed_set", actor_id)
        .field("seed", seed.to_string())
        .emit();
}
