use anchor_lang::prelude::*;

use crate::constants::{REGISTRY_SEED, TOKEN_SEED};
use crate::errors::NftError;
use crate::state::{OperatorApproval, Registry, TokenRecord};

#[derive(Accounts)]
pub struct TransferToken<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [REGISTRY_SEED, registry.authority.as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        mut,
        seeds = [
            TOKEN_SEED,
            registry.key().as_ref(),
            token_record.token_id.to_le_bytes().as_ref(),
        ],
        bump = token_record.bump,
        constraint = token_record.registry == registry.key() @ NftError::WrongRegistry,
    )]
    pub token_record: Account<'info, TokenRecord>,

    /// Present when the authority is an operator rather than the owner.
    pub approval: Option<Account<'info, OperatorApproval>>,

    /// CHECK: new owner, any address may receive a token
    pub to: UncheckedAccount<'info>,
}

pub fn transfer_token(ctx: Context<TransferToken>) -> Result<()> {
    let record = &mut ctx.accounts.token_record;
    record.assert_can_transfer(
        &ctx.accounts.authority.key(),
        ctx.accounts.approval.as_deref(),
    )?;

    let from = record.owner;
    record.owner = ctx.accounts.to.key();

    emit!(Transferred {
        registry: record.registry,
        token_id: record.token_id,
        from,
        to: record.owner,
    });

    msg!("Token {} transferred from {} to {}", record.token_id, from, record.owner);

    Ok(())
}

#[event]
pub struct Transferred {
    pub registry: Pubkey,
    pub token_id: u64,
    pub from: Pubkey,
    pub to: Pubkey,
}
