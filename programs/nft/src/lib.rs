use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("E7D92vNoSj2rqB1PnuZihFZ9hDstnbJMwCFkxx9TxQBL");

#[program]
pub mod nft {
    use super::*;

    pub fn create_registry(
        ctx: Context<CreateRegistry>,
        name: String,
        symbol: String,
    ) -> Result<()> {
        instructions::create_registry::create_registry(ctx, name, symbol)
    }

    pub fn mint_token(ctx: Context<MintToken>, token_id: u64, uri: String) -> Result<u64> {
        instructions::mint_token::mint_token(ctx, token_id, uri)
    }

    pub fn set_approval_for_all(
        ctx: Context<SetApprovalForAll>,
        operator: Pubkey,
        approved: bool,
    ) -> Result<()> {
        instructions::set_approval_for_all::set_approval_for_all(ctx, operator, approved)
    }

    pub fn transfer_token(ctx: Context<TransferToken>) -> Result<()> {
        instructions::transfer_token::transfer_token(ctx)
    }
}
