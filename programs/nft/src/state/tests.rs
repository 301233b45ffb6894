use anchor_lang::prelude::*;

use crate::constants::{MAX_NAME_LEN, MAX_SYMBOL_LEN, MAX_URI_LEN};
use crate::errors::NftError;
use crate::state::{OperatorApproval, Registry, TokenRecord};
use crate::utils::validate_string;

fn registry(token_count: u64) -> Registry {
    Registry {
        authority: Pubkey::new_unique(),
        name: "Pata NFT".to_string(),
        symbol: "PAT".to_string(),
        token_count,
        bump: 255,
    }
}

fn token(registry: Pubkey, owner: Pubkey) -> TokenRecord {
    TokenRecord {
        registry,
        token_id: 1,
        owner,
        uri: "ipfs://QmToken".to_string(),
        bump: 254,
    }
}

fn grant(registry: Pubkey, owner: Pubkey, operator: Pubkey) -> OperatorApproval {
    OperatorApproval {
        registry,
        owner,
        operator,
        approved: true,
        bump: 253,
    }
}

fn assert_rejects<T: std::fmt::Debug>(result: Result<T>, expected: NftError) {
    match result {
        Err(err) => assert!(
            err.to_string().contains(&expected.name()),
            "expected {}, got {}",
            expected.name(),
            err
        ),
        Ok(value) => panic!("expected {}, got Ok({:?})", expected.name(), value),
    }
}

#[test]
fn test_account_sizes() {
    assert_eq!(Registry::SIZE, 32 + (4 + MAX_NAME_LEN) + (4 + MAX_SYMBOL_LEN) + 8 + 1);
    assert_eq!(TokenRecord::SIZE, 32 + 8 + 32 + (4 + MAX_URI_LEN) + 1);
    assert_eq!(OperatorApproval::SIZE, 98);
}

#[test]
fn test_token_ids_are_one_indexed() {
    assert_eq!(registry(0).next_token_id().unwrap(), 1);
    assert_eq!(registry(41).next_token_id().unwrap(), 42);
}

#[test]
fn test_token_counter_overflow() {
    assert_rejects(registry(u64::MAX).next_token_id(), NftError::MathOverflow);
}

#[test]
fn test_owner_can_transfer() {
    let owner = Pubkey::new_unique();
    let record = token(Pubkey::new_unique(), owner);

    assert!(record.assert_can_transfer(&owner, None).is_ok());
}

#[test]
fn test_stranger_cannot_transfer() {
    let record = token(Pubkey::new_unique(), Pubkey::new_unique());

    assert_rejects(
        record.assert_can_transfer(&Pubkey::new_unique(), None),
        NftError::NotAuthorized,
    );
}

#[test]
fn test_approved_operator_can_transfer() {
    let registry_key = Pubkey::new_unique();
    let owner = Pubkey::new_unique();
    let operator = Pubkey::new_unique();

    let record = token(registry_key, owner);
    let approval = grant(registry_key, owner, operator);

    assert!(record.assert_can_transfer(&operator, Some(&approval)).is_ok());
}

#[test]
fn test_revoked_operator_cannot_transfer() {
    let registry_key = Pubkey::new_unique();
    let owner = Pubkey::new_unique();
    let operator = Pubkey::new_unique();

    let record = token(registry_key, owner);
    let mut approval = grant(registry_key, owner, operator);
    approval.approved = false;

    assert_rejects(
        record.assert_can_transfer(&operator, Some(&approval)),
        NftError::NotAuthorized,
    );
}

#[test]
fn test_approval_is_scoped_to_registry() {
    let owner = Pubkey::new_unique();
    let operator = Pubkey::new_unique();

    // Approval granted in a different registry must not carry over.
    let record = token(Pubkey::new_unique(), owner);
    let approval = grant(Pubkey::new_unique(), owner, operator);

    assert_rejects(
        record.assert_can_transfer(&operator, Some(&approval)),
        NftError::NotAuthorized,
    );
}

#[test]
fn test_approval_is_scoped_to_owner() {
    let registry_key = Pubkey::new_unique();
    let operator = Pubkey::new_unique();

    // Approval from some other holder does not authorize moving this token.
    let record = token(registry_key, Pubkey::new_unique());
    let approval = grant(registry_key, Pubkey::new_unique(), operator);

    assert_rejects(
        record.assert_can_transfer(&operator, Some(&approval)),
        NftError::NotAuthorized,
    );
}

#[test]
fn test_string_validation() {
    assert!(validate_string("Pata NFT").is_ok());
    assert!(validate_string("ipfs://QmXoypizjW3WknFiJnKLwHCnL72vedxjQkDDP1mXWo6uco").is_ok());
    assert!(validate_string("emoji \u{1F389} uri").is_err());
    assert!(validate_string("line\nbreak").is_err());
}
