use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

const URI: &str = "ipfs://chimera/1";

/// Contract with the signer installed, bait collection enabled, genesis
/// source 1 owned by buyer(), bait token 10 owned by buyer().
fn fusion_fixture() -> Contract {
    let mut contract = new_contract_with_signer();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract.enable_input_collection(bait_collection()).unwrap();
    contract.reserve(buyer(), 1).unwrap();
    testing_env!(context(bait_collection()).build());
    contract.record_input_owner(10, buyer()).unwrap();
    contract
}

#[test]
fn recombine_mints_chimera_and_consumes_keys() {
    let mut contract = fusion_fixture();
    testing_env!(context(buyer()).build());
    let voucher = sign_fusion_voucher(&buyer(), 1, &bait_collection(), 10, URI);

    let chimera_id = contract
        .recombine(1, bait_collection(), 10, URI.to_string(), voucher)
        .unwrap();
    assert_eq!(chimera_id, 1);
    assert_eq!(contract.total_supply(Collection::Chimera), 1);
    assert_eq!(*contract.owner_of(Collection::Chimera, 1).unwrap(), buyer());
    assert!(contract.is_source_used(1));
    assert!(contract.is_input_used(bait_collection(), 10));
    assert_eq!(contract.token_uri(Collection::Chimera, 1).unwrap(), URI);
}

#[test]
fn recombine_source_reuse_fails() {
    let mut contract = fusion_fixture();
    testing_env!(context(bait_collection()).build());
    contract.record_input_owner(11, buyer()).unwrap();

    testing_env!(context(buyer()).build());
    let voucher = sign_fusion_voucher(&buyer(), 1, &bait_collection(), 10, URI);
    contract
        .recombine(1, bait_collection(), 10, URI.to_string(), voucher)
        .unwrap();

    // Fresh input, same source.
    let voucher = sign_fusion_voucher(&buyer(), 1, &bait_collection(), 11, URI);
    let err = contract
        .recombine(1, bait_collection(), 11, URI.to_string(), voucher)
        .unwrap_err();
    assert!(matches!(err, IssuanceError::AlreadyUsed(_)));
    assert_eq!(contract.total_supply(Collection::Chimera), 1);
}

#[test]
fn recombine_input_reuse_fails() {
    let mut contract = fusion_fixture();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract.reserve(buyer(), 1).unwrap(); // genesis id 2

    testing_env!(context(buyer()).build());
    let voucher = sign_fusion_voucher(&buyer(), 1, &bait_collection(), 10, URI);
    contract
        .recombine(1, bait_collection(), 10, URI.to_string(), voucher)
        .unwrap();

    // Fresh source, same input.
    let voucher = sign_fusion_voucher(&buyer(), 2, &bait_collection(), 10, URI);
    let err = contract
        .recombine(2, bait_collection(), 10, URI.to_string(), voucher)
        .unwrap_err();
    assert!(matches!(err, IssuanceError::AlreadyUsed(_)));
}

#[test]
fn recombine_requires_source_ownership() {
    let mut contract = fusion_fixture();
    testing_env!(context(bait_collection()).build());
    contract.record_input_owner(10, other_buyer()).unwrap();

    testing_env!(context(other_buyer()).build());
    let voucher = sign_fusion_voucher(&other_buyer(), 1, &bait_collection(), 10, URI);
    let err = contract
        .recombine(1, bait_collection(), 10, URI.to_string(), voucher)
        .unwrap_err();
    assert!(matches!(err, IssuanceError::NotOwner(_)));
}

#[test]
fn recombine_requires_input_ownership() {
    let mut contract = fusion_fixture();
    testing_env!(context(bait_collection()).build());
    contract.record_input_owner(10, other_buyer()).unwrap();

    testing_env!(context(buyer()).build());
    let voucher = sign_fusion_voucher(&buyer(), 1, &bait_collection(), 10, URI);
    let err = contract
        .recombine(1, bait_collection(), 10, URI.to_string(), voucher)
        .unwrap_err();
    assert!(matches!(err, IssuanceError::NotOwner(_)));
}

#[test]
fn recombine_requires_enabled_collection() {
    let mut contract = fusion_fixture();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract
        .disable_input_collection(bait_collection())
        .unwrap();

    testing_env!(context(buyer()).build());
    let voucher = sign_fusion_voucher(&buyer(), 1, &bait_collection(), 10, URI);
    let err = contract
        .recombine(1, bait_collection(), 10, URI.to_string(), voucher)
        .unwrap_err();
    assert!(matches!(err, IssuanceError::InputDisabled(_)));
}

#[test]
fn recombine_rejects_tampered_uri() {
    let mut contract = fusion_fixture();
    testing_env!(context(buyer()).build());
    let voucher = sign_fusion_voucher(&buyer(), 1, &bait_collection(), 10, URI);
    let err = contract
        .recombine(1, bait_collection(), 10, "ipfs://swapped".to_string(), voucher)
        .unwrap_err();
    assert!(matches!(err, IssuanceError::InvalidSignature(_)));
}

#[test]
fn empty_result_uri_falls_back_to_default() {
    let mut contract = fusion_fixture();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract
        .set_default_chimera_uri("ipfs://incubating".to_string())
        .unwrap();

    testing_env!(context(buyer()).build());
    let voucher = sign_fusion_voucher(&buyer(), 1, &bait_collection(), 10, "");
    let chimera_id = contract
        .recombine(1, bait_collection(), 10, String::new(), voucher)
        .unwrap();
    assert_eq!(
        contract.token_uri(Collection::Chimera, chimera_id).unwrap(),
        "ipfs://incubating"
    );

    // Backfill once the artwork is ready.
    testing_env!(context_with_deposit(owner(), 1).build());
    contract.set_chimera_uri(chimera_id, URI.to_string()).unwrap();
    assert_eq!(contract.token_uri(Collection::Chimera, chimera_id).unwrap(), URI);
}

#[test]
fn record_input_owner_gated_on_collection() {
    let mut contract = fusion_fixture();
    // An arbitrary wallet cannot assert ownership facts.
    testing_env!(context(buyer()).build());
    let err = contract.record_input_owner(99, buyer()).unwrap_err();
    assert!(matches!(err, IssuanceError::InputDisabled(_)));
}
