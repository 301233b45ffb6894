use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::ExcessPolicy;

declare_id!("BTNZP23sGbQsMwX1SBiyfTpDDqD8Sev7j78N45QBoYtv");

#[program]
pub mod marketplace {
    use super::*;

    pub fn initialize_marketplace(
        ctx: Context<InitializeMarketplace>,
        fee_percent: u16,
        excess_policy: ExcessPolicy,
    ) -> Result<()> {
        instructions::initialize_marketplace::initialize_marketplace(
            ctx,
            fee_percent,
            excess_policy,
        )
    }

    pub fn make_item(ctx: Context<MakeItem>, item_id: u64, price: u64) -> Result<u64> {
        instructions::make_item::make_item(ctx, item_id, price)
    }

    pub fn get_total_price(ctx: Context<GetTotalPrice>, item_id: u64) -> Result<u64> {
        instructions::get_total_price::get_total_price(ctx, item_id)
    }

    pub fn purchase_item(
        ctx: Context<PurchaseItem>,
        item_id: u64,
        payment_amount: u64,
    ) -> Result<()> {
        instructions::purchase_item::purchase_item(ctx, item_id, payment_amount)
    }
}
