use anchor_lang::prelude::*;

use crate::constants::{MAX_URI_LEN, REGISTRY_SEED, TOKEN_SEED};
use crate::errors::NftError;
use crate::state::{Registry, TokenRecord};
use crate::utils::validate_string;

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct MintToken<'info> {
    #[account(mut)]
    pub minter: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED, registry.authority.as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        init,
        payer = minter,
        seeds = [TOKEN_SEED, registry.key().as_ref(), token_id.to_le_bytes().as_ref()],
        bump,
        space = 8 + TokenRecord::SIZE,
    )]
    pub token_record: Account<'info, TokenRecord>,

    pub system_program: Program<'info, System>,
}

pub fn mint_token(ctx: Context<MintToken>, token_id: u64, uri: String) -> Result<u64> {
    require!(uri.len() <= MAX_URI_LEN, NftError::UriTooLong);
    validate_string(&uri)?;

    // Ids are issued by the registry counter; the caller-supplied id only
    // addresses the PDA and must match the next value.
    let registry = &mut ctx.accounts.registry;
    require!(token_id == registry.next_token_id()?, NftError::InvalidTokenId);
    registry.token_count = token_id;

    let record = &mut ctx.accounts.token_record;
    record.registry = registry.key();
    record.token_id = token_id;
    record.owner = ctx.accounts.minter.key();
    record.uri = uri;
    record.bump = ctx.bumps.token_record;

    emit!(Minted {
        registry: record.registry,
        token_id,
        owner: record.owner,
        uri: record.uri.clone(),
    });

    msg!("Token {} minted to {}", token_id, record.owner);

    Ok(token_id)
}

#[event]
pub struct Minted {
    pub registry: Pubkey,
    pub token_id: u64,
    pub owner: Pubkey,
    pub uri: String,
}
