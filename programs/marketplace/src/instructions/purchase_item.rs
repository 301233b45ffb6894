use anchor_lang::prelude::*;
use anchor_lang::system_program;
use nft::program::Nft;
use nft::state::{Registry, TokenRecord};

use crate::constants::{LISTING_SEED, MARKETPLACE_SEED, REENTRANCY_SEED};
use crate::errors::MarketplaceError;
use crate::state::{Listing, Marketplace};
use crate::utils::ReentrancyGuard;

#[derive(Accounts)]
#[instruction(item_id: u64)]
pub struct PurchaseItem<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        seeds = [MARKETPLACE_SEED],
        bump = marketplace.bump,
    )]
    pub marketplace: Account<'info, Marketplace>,

    #[account(
        mut,
        seeds = [LISTING_SEED, item_id.to_le_bytes().as_ref()],
        bump = listing.bump,
    )]
    pub listing: Account<'info, Listing>,

    /// CHECK: receives the listing price; pinned to the listing's seller
    #[account(
        mut,
        constraint = seller.key() == listing.seller @ MarketplaceError::SellerMismatch,
    )]
    pub seller: UncheckedAccount<'info>,

    /// CHECK: receives the fee; pinned to the configured fee account
    #[account(mut, address = marketplace.fee_account)]
    pub fee_account: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [REENTRANCY_SEED, listing.key().as_ref()],
        bump = reentrancy_guard.bump,
    )]
    pub reentrancy_guard: Account<'info, ReentrancyGuard>,

    pub registry: Account<'info, Registry>,

    #[account(
        mut,
        constraint = token_record.registry == listing.token_registry @ MarketplaceError::WrongRegistry,
        constraint = token_record.token_id == listing.token_id @ MarketplaceError::WrongToken,
    )]
    pub token_record: Account<'info, TokenRecord>,

    pub nft_program: Program<'info, Nft>,
    pub system_program: Program<'info, System>,
}

pub fn purchase_item(ctx: Context<PurchaseItem>, item_id: u64, payment_amount: u64) -> Result<()> {
    ctx.accounts.reentrancy_guard.lock()?;

    let marketplace = &ctx.accounts.marketplace;
    let listing = &ctx.accounts.listing;

    // The whole settlement is computed up front; nothing is transferred
    // until every precondition has passed.
    let settlement = marketplace.settlement(listing.price)?;
    listing.ensure_purchasable(
        marketplace.item_count,
        payment_amount,
        settlement.total,
        marketplace.excess_policy,
    )?;

    // Price to the seller. Both legs are drawn from the buyer; under the
    // refund policy any excess above the total never leaves the buyer.
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.seller.to_account_info(),
            },
        ),
        settlement.seller_proceeds,
    )?;

    // Fee to the fee account.
    if settlement.fee > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.buyer.to_account_info(),
                    to: ctx.accounts.fee_account.to_account_info(),
                },
            ),
            settlement.fee,
        )?;
    }

    // Release the token from custody to the buyer; the marketplace is the
    // owner of record while the listing is live.
    let bump = ctx.accounts.marketplace.bump;
    let marketplace_seeds: &[&[u8]] = &[MARKETPLACE_SEED, &[bump]];
    nft::cpi::transfer_token(CpiContext::new_with_signer(
        ctx.accounts.nft_program.to_account_info(),
        nft::cpi::accounts::TransferToken {
            authority: ctx.accounts.marketplace.to_account_info(),
            registry: ctx.accounts.registry.to_account_info(),
            token_record: ctx.accounts.token_record.to_account_info(),
            approval: None,
            to: ctx.accounts.buyer.to_account_info(),
        },
        &[marketplace_seeds],
    ))?;

    let listing = &mut ctx.accounts.listing;
    listing.mark_sold()?;

    emit!(Bought {
        item_id,
        token_registry: listing.token_registry,
        token_id: listing.token_id,
        price: listing.price,
        seller: listing.seller,
        buyer: ctx.accounts.buyer.key(),
    });

    msg!(
        "Item {} bought by {} for {} ({} to seller, {} fee)",
        item_id,
        ctx.accounts.buyer.key(),
        settlement.total,
        settlement.seller_proceeds,
        settlement.fee,
    );

    ctx.accounts.reentrancy_guard.unlock()?;

    Ok(())
}

#[event]
pub struct Bought {
    pub item_id: u64,
    pub token_registry: Pubkey,
    pub token_id: u64,
    pub price: u64,
    pub seller: Pubkey,
    pub buyer: Pubkey,
}
