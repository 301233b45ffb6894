// Seeds
pub const MARKETPLACE_SEED: &[u8] = b"marketplace";
pub const LISTING_SEED: &[u8] = b"listing";
pub const REENTRANCY_SEED: &[u8] = b"reentrancy";

// Fees are whole percentages of the listing price
pub const MAX_FEE_PERCENT: u16 = 100;
