use anchor_lang::prelude::*;

use crate::errors::MarketplaceError;
use crate::utils::{calculate_fee, safe_add};

/// What to do with payment above the fee-inclusive total. The engine never
/// absorbs buyer funds silently: either the overpayment is rejected, or only
/// the exact total is drawn and the excess stays with the buyer.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ExcessPolicy {
    /// Payment must match the fee-inclusive total exactly.
    #[default]
    Reject,
    /// Payment above the total is accepted; only the total is drawn.
    Refund,
}

#[account]
pub struct Marketplace {
    pub fee_account: Pubkey,        // 32 bytes - receives every fee
    pub fee_percent: u16,           // 2 bytes - whole percent of listing price
    pub excess_policy: ExcessPolicy, // 1 byte
    pub item_count: u64,            // 8 bytes - last issued item id
    pub bump: u8,                   // 1 byte
}

/// Amounts disbursed by one purchase, computed as a unit before any
/// transfer is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    pub seller_proceeds: u64,
    pub fee: u64,
    pub total: u64,
}

impl Marketplace {
    pub const SIZE: usize = 32 + 2 + 1 + 8 + 1;

    pub fn fee_amount(&self, price: u64) -> Result<u64> {
        calculate_fee(price, self.fee_percent)
    }

    /// Fee-inclusive amount a buyer must pay for a listing at `price`.
    pub fn total_price(&self, price: u64) -> Result<u64> {
        safe_add(price, self.fee_amount(price)?)
    }

    /// The fee is always computed from the listing price, never from the
    /// amount paid, so an overpayment cannot inflate it.
    pub fn settlement(&self, price: u64) -> Result<Settlement> {
        let fee = self.fee_amount(price)?;
        Ok(Settlement {
            seller_proceeds: price,
            fee,
            total: safe_add(price, fee)?,
        })
    }

    pub fn next_item_id(&self) -> Result<u64> {
        self.item_count
            .checked_add(1)
            .ok_or(MarketplaceError::MathOverflow.into())
    }
}
