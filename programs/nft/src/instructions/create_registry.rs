use anchor_lang::prelude::*;

use crate::constants::{MAX_NAME_LEN, MAX_SYMBOL_LEN, REGISTRY_SEED};
use crate::errors::NftError;
use crate::state::Registry;
use crate::utils::validate_string;

#[derive(Accounts)]
pub struct CreateRegistry<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        seeds = [REGISTRY_SEED, authority.key().as_ref()],
        bump,
        space = 8 + Registry::SIZE,
    )]
    pub registry: Account<'info, Registry>,

    pub system_program: Program<'info, System>,
}

pub fn create_registry(ctx: Context<CreateRegistry>, name: String, symbol: String) -> Result<()> {
    require!(name.len() <= MAX_NAME_LEN, NftError::NameTooLong);
    require!(symbol.len() <= MAX_SYMBOL_LEN, NftError::SymbolTooLong);
    validate_string(&name)?;
    validate_string(&symbol)?;

    let registry = &mut ctx.accounts.registry;
    registry.authority = ctx.accounts.authority.key();
    registry.name = name;
    registry.symbol = symbol;
    registry.token_count = 0;
    registry.bump = ctx.bumps.registry;

    msg!("Registry {} ({}) created", registry.name, registry.symbol);

    Ok(())
}
