use anchor_lang::prelude::*;

/// Operator grant: `operator` may move any of `owner`'s tokens in
/// `registry` while `approved` is set.
#[account]
pub struct OperatorApproval {
    pub registry: Pubkey,           // 32 bytes
    pub owner: Pubkey,              // 32 bytes
    pub operator: Pubkey,           // 32 bytes
    pub approved: bool,             // 1 byte
    pub bump: u8,                   // 1 byte
}

impl OperatorApproval {
    pub const SIZE: usize = 32 + 32 + 32 + 1 + 1;
}
