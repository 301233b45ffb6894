pub mod reentrancy;

pub use reentrancy::*;

use anchor_lang::prelude::*;

use crate::errors::MarketplaceError;

pub fn safe_add(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).ok_or(MarketplaceError::MathOverflow.into())
}

pub fn safe_mul(a: u64, b: u64) -> Result<u64> {
    a.checked_mul(b).ok_or(MarketplaceError::MathOverflow.into())
}

pub fn safe_div(a: u64, b: u64) -> Result<u64> {
    if b == 0 {
        return Err(MarketplaceError::MathOverflow.into());
    }
    a.checked_div(b).ok_or(MarketplaceError::MathOverflow.into())
}

/// Marketplace fee for a listing price, in whole percent. Division
/// truncates toward zero, matching the settlement currency's smallest
/// indivisible unit.
pub fn calculate_fee(price: u64, fee_percent: u16) -> Result<u64> {
    safe_div(safe_mul(price, fee_percent as u64)?, 100)
}

pub fn validate_listing_price(price: u64) -> Result<()> {
    require!(price > 0, MarketplaceError::InvalidPrice);
    Ok(())
}
