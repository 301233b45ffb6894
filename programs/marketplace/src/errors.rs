use anchor_lang::prelude::*;

#[error_code]
pub enum MarketplaceError {
    #[msg("Listing price must be greater than zero")]
    InvalidPrice,

    #[msg("Item id is outside the range of issued listings")]
    ItemNotFound,

    #[msg("Payment is below the fee-inclusive total price")]
    InsufficientPayment,

    #[msg("Listing has already been sold")]
    AlreadySold,

    #[msg("Payment exceeds the fee-inclusive total price")]
    ExcessPayment,

    #[msg("Item id does not match the listing counter")]
    InvalidItemId,

    #[msg("Fee percent cannot exceed 100")]
    FeeTooHigh,

    #[msg("Listed token is not owned by the seller")]
    SellerMismatch,

    #[msg("Token record does not belong to the given registry")]
    WrongRegistry,

    #[msg("Token record does not match the listing")]
    WrongToken,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Operation locked due to reentrancy")]
    ReentrancyLocked,
}
