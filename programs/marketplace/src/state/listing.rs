use anchor_lang::prelude::*;

use crate::errors::MarketplaceError;
use crate::state::ExcessPolicy;

#[account]
pub struct Listing {
    pub item_id: u64,               // 8 bytes - 1-indexed, never reused
    pub token_registry: Pubkey,     // 32 bytes - registry the token lives in
    pub token_id: u64,              // 8 bytes - id within that registry
    pub price: u64,                 // 8 bytes - asking price, excludes fee
    pub seller: Pubkey,             // 32 bytes - receives proceeds
    pub sold: bool,                 // 1 byte - terminal once set
    pub bump: u8,                   // 1 byte
}

impl Listing {
    pub const SIZE: usize = 8 + 32 + 8 + 8 + 32 + 1 + 1;

    /// Purchase preconditions, in a fixed order so each failure mode is
    /// distinct: id range, payment floor, terminal state, excess policy.
    pub fn ensure_purchasable(
        &self,
        item_count: u64,
        payment_amount: u64,
        total_price: u64,
        policy: ExcessPolicy,
    ) -> Result<()> {
        require!(
            self.item_id >= 1 && self.item_id <= item_count,
            MarketplaceError::ItemNotFound
        );
        require!(
            payment_amount >= total_price,
            MarketplaceError::InsufficientPayment
        );
        require!(!self.sold, MarketplaceError::AlreadySold);
        if policy == ExcessPolicy::Reject {
            require!(
                payment_amount == total_price,
                MarketplaceError::ExcessPayment
            );
        }
        Ok(())
    }

    /// `sold` is monotonic: false -> true, exactly once.
    pub fn mark_sold(&mut self) -> Result<()> {
        require!(!self.sold, MarketplaceError::AlreadySold);
        self.sold = true;
        Ok(())
    }
}
