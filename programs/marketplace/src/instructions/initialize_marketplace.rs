use anchor_lang::prelude::*;

use crate::constants::{MARKETPLACE_SEED, MAX_FEE_PERCENT};
use crate::errors::MarketplaceError;
use crate::state::{ExcessPolicy, Marketplace};

#[derive(Accounts)]
pub struct InitializeMarketplace<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        seeds = [MARKETPLACE_SEED],
        bump,
        space = 8 + Marketplace::SIZE,
    )]
    pub marketplace: Account<'info, Marketplace>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_marketplace(
    ctx: Context<InitializeMarketplace>,
    fee_percent: u16,
    excess_policy: ExcessPolicy,
) -> Result<()> {
    require!(fee_percent <= MAX_FEE_PERCENT, MarketplaceError::FeeTooHigh);

    // The fee account is bound to the initializing identity and never
    // changes afterwards.
    let marketplace = &mut ctx.accounts.marketplace;
    marketplace.fee_account = ctx.accounts.authority.key();
    marketplace.fee_percent = fee_percent;
    marketplace.excess_policy = excess_policy;
    marketplace.item_count = 0;
    marketplace.bump = ctx.bumps.marketplace;

    msg!("Marketplace initialized with {}% fee", fee_percent);

    Ok(())
}
