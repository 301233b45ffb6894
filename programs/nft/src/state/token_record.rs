use anchor_lang::prelude::*;

use crate::constants::MAX_URI_LEN;
use crate::errors::NftError;
use crate::state::OperatorApproval;

/// Ownership record for one token. The `owner` field is the single source
/// of truth for `ownerOf`; holders are enumerated off-chain.
#[account]
pub struct TokenRecord {
    pub registry: Pubkey,           // 32 bytes - parent registry PDA
    pub token_id: u64,              // 8 bytes - unique within the registry
    pub owner: Pubkey,              // 32 bytes
    pub uri: String,                // 4 + 200 bytes - metadata pointer
    pub bump: u8,                   // 1 byte
}

impl TokenRecord {
    pub const SIZE: usize = 32 + 8 + 32 + (4 + MAX_URI_LEN) + 1;

    /// A transfer is authorized for the owner, or for an operator the owner
    /// has approved for this registry.
    pub fn assert_can_transfer(
        &self,
        authority: &Pubkey,
        approval: Option<&OperatorApproval>,
    ) -> Result<()> {
        if self.owner == *authority {
            return Ok(());
        }

        let authorized = approval.map_or(false, |grant| {
            grant.registry == self.registry
                && grant.owner == self.owner
                && grant.operator == *authority
                && grant.approved
        });
        require!(authorized, NftError::NotAuthorized);

        Ok(())
    }
}
