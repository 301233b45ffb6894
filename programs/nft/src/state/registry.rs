use anchor_lang::prelude::*;

use crate::constants::{MAX_NAME_LEN, MAX_SYMBOL_LEN};
use crate::errors::NftError;

/// A token collection. Token ids are issued sequentially per registry,
/// starting at 1; 0 is never a valid id.
#[account]
pub struct Registry {
    pub authority: Pubkey,          // 32 bytes
    pub name: String,               // 4 + 32 bytes
    pub symbol: String,             // 4 + 10 bytes
    pub token_count: u64,           // 8 bytes - last issued token id
    pub bump: u8,                   // 1 byte
}

impl Registry {
    pub const SIZE: usize = 32 + (4 + MAX_NAME_LEN) + (4 + MAX_SYMBOL_LEN) + 8 + 1;

    pub fn next_token_id(&self) -> Result<u64> {
        self.token_count
            .checked_add(1)
            .ok_or(NftError::MathOverflow.into())
    }
}
