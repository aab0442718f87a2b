//! Off-chain-authorized admission vouchers.
//!
//! A voucher is signed off-process by the trusted signer over a payload hash
//! that mixes in a domain tag (engine name, version, and the issuing
//! contract's own account id, which is network-scoped on NEAR). Any change to
//! any signed field produces a different hash and fails verification; replay
//! of cumulative allowances is bounded by the claim book, not by the
//! signature.

use crate::*;
use near_sdk::CurveType;
use near_sdk::borsh;

#[near(serializers = [borsh])]
struct PresalePayload {
    buyer: AccountId,
    limit: u32,
}

#[near(serializers = [borsh])]
struct FusionPayload {
    buyer: AccountId,
    source_id: u64,
    input_collection: AccountId,
    input_id: u64,
    result_uri: String,
}

/// Domain-separated message bytes for a borsh-serialized payload.
pub(crate) fn signing_message(payload: &[u8]) -> Vec<u8> {
    let contract_id = env::current_account_id();
    let mut message = Vec::with_capacity(
        VOUCHER_DOMAIN_NAME.len()
            + VOUCHER_DOMAIN_VERSION.len()
            + contract_id.as_bytes().len()
            + payload.len()
            + 3,
    );
    message.extend_from_slice(VOUCHER_DOMAIN_NAME.as_bytes());
    message.push(0);
    message.extend_from_slice(VOUCHER_DOMAIN_VERSION.as_bytes());
    message.push(0);
    message.extend_from_slice(contract_id.as_bytes());
    message.push(0);
    message.extend_from_slice(payload);
    message
}

pub(crate) fn presale_message(buyer: &AccountId, limit: u32) -> Result<Vec<u8>, IssuanceError> {
    let payload = borsh::to_vec(&PresalePayload {
        buyer: buyer.clone(),
        limit,
    })
    .map_err(|_| IssuanceError::InvalidInput("Failed to serialize voucher payload".into()))?;
    Ok(signing_message(&payload))
}

pub(crate) fn fusion_message(
    buyer: &AccountId,
    source_id: u64,
    input_collection: &AccountId,
    input_id: u64,
    result_uri: &str,
) -> Result<Vec<u8>, IssuanceError> {
    let payload = borsh::to_vec(&FusionPayload {
        buyer: buyer.clone(),
        source_id,
        input_collection: input_collection.clone(),
        input_id,
        result_uri: result_uri.to_string(),
    })
    .map_err(|_| IssuanceError::InvalidInput("Failed to serialize voucher payload".into()))?;
    Ok(signing_message(&payload))
}

fn ed25519_key_bytes(public_key: &PublicKey) -> Result<[u8; 32], IssuanceError> {
    if public_key.curve_type() != CurveType::ED25519 {
        return Err(IssuanceError::InvalidSignature(
            "Only ed25519 signer keys are supported".into(),
        ));
    }
    // Skip the curve type prefix byte.
    public_key.as_bytes()[1..]
        .try_into()
        .map_err(|_| IssuanceError::InvalidSignature("Malformed signer key".into()))
}

fn verify(
    trusted_signer: Option<&PublicKey>,
    message: &[u8],
    signature: &[u8],
) -> Result<(), IssuanceError> {
    let signer = trusted_signer.ok_or_else(|| {
        IssuanceError::InvalidSignature("Trusted signer is not configured".into())
    })?;
    let signature: [u8; 64] = signature
        .try_into()
        .map_err(|_| IssuanceError::InvalidSignature("Signature must be 64 bytes".into()))?;
    let public_key = ed25519_key_bytes(signer)?;
    let message_hash = env::sha256_array(message);
    if !env::ed25519_verify(&signature, &message_hash, &public_key) {
        return Err(IssuanceError::InvalidSignature(
            "Signature does not match the trusted signer".into(),
        ));
    }
    Ok(())
}

pub(crate) fn verify_presale_voucher(
    trusted_signer: Option<&PublicKey>,
    buyer: &AccountId,
    limit: u32,
    signature: &[u8],
) -> Result<(), IssuanceError> {
    verify(trusted_signer, &presale_message(buyer, limit)?, signature)
}

pub(crate) fn verify_fusion_voucher(
    trusted_signer: Option<&PublicKey>,
    buyer: &AccountId,
    source_id: u64,
    input_collection: &AccountId,
    input_id: u64,
    result_uri: &str,
    signature: &[u8],
) -> Result<(), IssuanceError> {
    verify(
        trusted_signer,
        &fusion_message(buyer, source_id, input_collection, input_id, result_uri)?,
        signature,
    )
}
