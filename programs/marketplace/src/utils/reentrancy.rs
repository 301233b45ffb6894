use anchor_lang::prelude::*;

use crate::errors::MarketplaceError;

/// Per-listing lock held for the duration of a settlement. The runtime
/// already serializes transactions writing the same listing; the guard
/// additionally rejects reentrant invocations within one transaction, so
/// the check-transfer-pay sequence can never be observed half-applied.
#[account]
pub struct ReentrancyGuard {
    pub is_locked: bool,            // 1 byte
    pub bump: u8,                   // 1 byte
}

impl ReentrancyGuard {
    pub const SIZE: usize = 1 + 1;

    pub fn lock(&mut self) -> Result<()> {
        require!(!self.is_locked, MarketplaceError::ReentrancyLocked);
        self.is_locked = true;
        Ok(())
    }

    pub fn unlock(&mut self) -> Result<()> {
        self.is_locked = false;
        Ok(())
    }
}
