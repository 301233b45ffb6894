use anchor_lang::prelude::*;

use crate::constants::{LISTING_SEED, MARKETPLACE_SEED};
use crate::state::{Listing, Marketplace};

#[derive(Accounts)]
#[instruction(item_id: u64)]
pub struct GetTotalPrice<'info> {
    #[account(seeds = [MARKETPLACE_SEED], bump = marketplace.bump)]
    pub marketplace: Account<'info, Marketplace>,

    #[account(
        seeds = [LISTING_SEED, item_id.to_le_bytes().as_ref()],
        bump = listing.bump,
    )]
    pub listing: Account<'info, Listing>,
}

/// Fee-inclusive amount a buyer must pay for the listing. Callers are
/// expected to use this immediately before a purchase.
pub fn get_total_price(ctx: Context<GetTotalPrice>, _item_id: u64) -> Result<u64> {
    ctx.accounts
        .marketplace
        .total_price(ctx.accounts.listing.price)
}
