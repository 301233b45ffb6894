use anchor_lang::prelude::*;
use nft::program::Nft;
use nft::state::{OperatorApproval, Registry, TokenRecord};

use crate::constants::{LISTING_SEED, MARKETPLACE_SEED, REENTRANCY_SEED};
use crate::errors::MarketplaceError;
use crate::state::{Listing, Marketplace};
use crate::utils::{validate_listing_price, ReentrancyGuard};

#[derive(Accounts)]
#[instruction(item_id: u64)]
pub struct MakeItem<'info> {
    #[account(mut)]
    pub seller: Signer<'info>,

    #[account(
        mut,
        seeds = [MARKETPLACE_SEED],
        bump = marketplace.bump,
    )]
    pub marketplace: Account<'info, Marketplace>,

    #[account(
        init,
        payer = seller,
        seeds = [LISTING_SEED, item_id.to_le_bytes().as_ref()],
        bump,
        space = 8 + Listing::SIZE,
    )]
    pub listing: Account<'info, Listing>,

    #[account(
        init,
        payer = seller,
        seeds = [REENTRANCY_SEED, listing.key().as_ref()],
        bump,
        space = 8 + ReentrancyGuard::SIZE,
    )]
    pub reentrancy_guard: Account<'info, ReentrancyGuard>,

    pub registry: Account<'info, Registry>,

    #[account(
        mut,
        constraint = token_record.registry == registry.key() @ MarketplaceError::WrongRegistry,
        constraint = token_record.owner == seller.key() @ MarketplaceError::SellerMismatch,
    )]
    pub token_record: Account<'info, TokenRecord>,

    /// Operator grant letting the marketplace pull the seller's token into
    /// custody; the registry enforces it during the transfer.
    pub approval: Account<'info, OperatorApproval>,

    pub nft_program: Program<'info, Nft>,
    pub system_program: Program<'info, System>,
}

pub fn make_item(ctx: Context<MakeItem>, item_id: u64, price: u64) -> Result<u64> {
    validate_listing_price(price)?;

    let marketplace = &ctx.accounts.marketplace;
    require!(
        item_id == marketplace.next_item_id()?,
        MarketplaceError::InvalidItemId
    );

    // Escrow: custody of the token moves to the marketplace itself, not a
    // mere approval. An unauthorized transfer is rejected by the registry
    // and surfaces to the caller unmasked.
    let bump = marketplace.bump;
    let marketplace_seeds: &[&[u8]] = &[MARKETPLACE_SEED, &[bump]];
    nft::cpi::transfer_token(CpiContext::new_with_signer(
        ctx.accounts.nft_program.to_account_info(),
        nft::cpi::accounts::TransferToken {
            authority: ctx.accounts.marketplace.to_account_info(),
            registry: ctx.accounts.registry.to_account_info(),
            token_record: ctx.accounts.token_record.to_account_info(),
            approval: Some(ctx.accounts.approval.to_account_info()),
            to: ctx.accounts.marketplace.to_account_info(),
        },
        &[marketplace_seeds],
    ))?;

    let marketplace = &mut ctx.accounts.marketplace;
    marketplace.item_count = item_id;

    let listing = &mut ctx.accounts.listing;
    listing.item_id = item_id;
    listing.token_registry = ctx.accounts.registry.key();
    listing.token_id = ctx.accounts.token_record.token_id;
    listing.price = price;
    listing.seller = ctx.accounts.seller.key();
    listing.sold = false;
    listing.bump = ctx.bumps.listing;

    let reentrancy_guard = &mut ctx.accounts.reentrancy_guard;
    reentrancy_guard.is_locked = false;
    reentrancy_guard.bump = ctx.bumps.reentrancy_guard;

    emit!(Offered {
        item_id,
        token_registry: listing.token_registry,
        token_id: listing.token_id,
        price,
        seller: listing.seller,
    });

    msg!("Item {} offered at {} by {}", item_id, price, listing.seller);

    Ok(item_id)
}

#[event]
pub struct Offered {
    pub item_id: u64,
    pub token_registry: Pubkey,
    pub token_id: u64,
    pub price: u64,
    pub seller: Pubkey,
}
