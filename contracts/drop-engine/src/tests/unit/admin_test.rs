use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U128;
use near_sdk::testing_env;

#[test]
fn init_sets_defaults() {
    let contract = new_contract();
    assert_eq!(*contract.get_owner(), owner());
    assert!(contract.get_trusted_signer().is_none());
    assert!(!contract.is_mint_active());
    assert_eq!(contract.total_supply(Collection::Genesis), 0);
    assert_eq!(contract.proceeds().0, 0);
    assert_eq!(contract.withdraw_access(), WithdrawAccess::Anyone);
}

#[test]
#[should_panic(expected = "Payee shares must sum")]
fn init_rejects_bad_split() {
    testing_env!(context(owner()).build());
    Contract::new(
        owner(),
        "https://meta.example/".to_string(),
        vec![PayeeSplit {
            account_id: payee_a(),
            share_bps: 9_999,
        }],
        default_presale_config(),
        default_auction_config(),
    );
}

#[test]
#[should_panic(expected = "start time must precede")]
fn init_rejects_inverted_presale_window() {
    testing_env!(context(owner()).build());
    let mut presale = default_presale_config();
    presale.end_time = presale.start_time;
    Contract::new(
        owner(),
        "https://meta.example/".to_string(),
        default_payees(),
        presale,
        default_auction_config(),
    );
}

#[test]
fn transfer_ownership_moves_control() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract.transfer_ownership(buyer()).unwrap();
    assert_eq!(*contract.get_owner(), buyer());

    // The old owner is locked out.
    let err = contract.toggle_mint_active().unwrap_err();
    assert!(matches!(err, IssuanceError::AccessDenied(_)));

    testing_env!(context_with_deposit(buyer(), 1).build());
    contract.toggle_mint_active().unwrap();
}

#[test]
fn set_trusted_signer_rejects_non_ed25519() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    let secp =
        near_sdk::PublicKey::from_parts(near_sdk::CurveType::SECP256K1, vec![1u8; 64]).unwrap();
    let err = contract.set_trusted_signer(secp).unwrap_err();
    assert!(matches!(err, IssuanceError::InvalidInput(_)));

    contract.set_trusted_signer(signer_public_key()).unwrap();
    assert!(contract.get_trusted_signer().is_some());
}

#[test]
fn configure_replaces_sale_windows() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    let mut presale = default_presale_config();
    presale.mint_price = U128(42);
    contract.configure_presale(presale).unwrap();
    assert_eq!(contract.presale_config().mint_price.0, 42);

    let mut auction = default_auction_config();
    auction.tx_limit = 0;
    let err = contract.configure_dutch_auction(auction).unwrap_err();
    assert!(matches!(err, IssuanceError::InvalidInput(_)));
}

// --- reserve ---

#[test]
fn reserve_mints_free_of_charge() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    let token_ids = contract.reserve(payee_a(), 5).unwrap();
    assert_eq!(token_ids.len(), 5);
    assert_eq!(contract.reserved_count(), 5);
    assert_eq!(contract.balance_of(Collection::Genesis, payee_a()), 5);
    assert_eq!(contract.proceeds().0, 0);
}

#[test]
fn reserve_ceiling_is_lifetime() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract.reserve(payee_a(), MAX_OWNER_RESERVE - 1).unwrap();
    let err = contract.reserve(payee_a(), 2).unwrap_err();
    assert!(matches!(err, IssuanceError::SupplyExceeded(_)));
    contract.reserve(payee_a(), 1).unwrap();
    assert_eq!(contract.reserved_count(), MAX_OWNER_RESERVE);
}

#[test]
fn reserve_requires_owner() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(buyer(), 1).build());
    let err = contract.reserve(buyer(), 1).unwrap_err();
    assert!(matches!(err, IssuanceError::AccessDenied(_)));
}

// --- input collections ---

#[test]
fn enable_twice_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract.enable_input_collection(bait_collection()).unwrap();
    let err = contract
        .enable_input_collection(bait_collection())
        .unwrap_err();
    assert!(matches!(err, IssuanceError::AlreadySet(_)));
    assert_eq!(contract.enabled_input_collections().len(), 1);
}

#[test]
fn disable_unknown_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    let err = contract
        .disable_input_collection(bait_collection())
        .unwrap_err();
    assert!(matches!(err, IssuanceError::InputDisabled(_)));
}

// --- metadata ---

#[test]
fn base_uri_drives_genesis_token_uri() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract.reserve(buyer(), 1).unwrap();
    assert_eq!(
        contract.token_uri(Collection::Genesis, 1).unwrap(),
        "https://meta.example/1"
    );
    contract.set_base_uri("ipfs://batch2/".to_string()).unwrap();
    assert_eq!(
        contract.token_uri(Collection::Genesis, 1).unwrap(),
        "ipfs://batch2/1"
    );
}

#[test]
fn token_uri_unknown_token_fails() {
    let contract = new_contract();
    let err = contract.token_uri(Collection::Genesis, 1).unwrap_err();
    assert!(matches!(err, IssuanceError::NotFound(_)));
}

#[test]
fn relic_uris_must_cover_every_outcome() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    let err = contract
        .set_relic_uris("ipfs://hidden".to_string(), vec!["a".to_string()])
        .unwrap_err();
    assert!(matches!(err, IssuanceError::InvalidInput(_)));
}
