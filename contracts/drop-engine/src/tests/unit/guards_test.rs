use crate::guards::*;
use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

// --- check_one_yocto ---

#[test]
fn check_one_yocto_exact() {
    let ctx = context_with_deposit(owner(), 1);
    testing_env!(ctx.build());
    assert!(check_one_yocto().is_ok());
}

#[test]
fn check_one_yocto_zero_fails() {
    let ctx = context_with_deposit(owner(), 0);
    testing_env!(ctx.build());
    let err = check_one_yocto().unwrap_err();
    assert!(matches!(err, IssuanceError::InsufficientDeposit(_)));
}

#[test]
fn check_one_yocto_too_much_fails() {
    let ctx = context_with_deposit(owner(), 2);
    testing_env!(ctx.build());
    let err = check_one_yocto().unwrap_err();
    assert!(matches!(err, IssuanceError::InsufficientDeposit(_)));
}

// --- check_contract_owner ---

#[test]
fn contract_owner_passes() {
    let contract = new_contract();
    assert!(contract.check_contract_owner(&owner()).is_ok());
}

#[test]
fn non_owner_fails() {
    let contract = new_contract();
    let err = contract.check_contract_owner(&buyer()).unwrap_err();
    assert!(matches!(err, IssuanceError::AccessDenied(_)));
}

// --- input_key ---

#[test]
fn input_key_is_collection_scoped() {
    let a = input_key(&bait_collection(), 7);
    let b = input_key(&buyer(), 7);
    assert_ne!(a, b);
    assert_eq!(a, format!("{}:7", bait_collection()));
}
