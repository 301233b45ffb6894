use anchor_lang::prelude::*;

use crate::constants::{APPROVAL_SEED, REGISTRY_SEED};
use crate::state::{OperatorApproval, Registry};

#[derive(Accounts)]
#[instruction(operator: Pubkey)]
pub struct SetApprovalForAll<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [REGISTRY_SEED, registry.authority.as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        init_if_needed,
        payer = owner,
        seeds = [
            APPROVAL_SEED,
            registry.key().as_ref(),
            owner.key().as_ref(),
            operator.as_ref(),
        ],
        bump,
        space = 8 + OperatorApproval::SIZE,
    )]
    pub approval: Account<'info, OperatorApproval>,

    pub system_program: Program<'info, System>,
}

pub fn set_approval_for_all(
    ctx: Context<SetApprovalForAll>,
    operator: Pubkey,
    approved: bool,
) -> Result<()> {
    let approval = &mut ctx.accounts.approval;
    approval.registry = ctx.accounts.registry.key();
    approval.owner = ctx.accounts.owner.key();
    approval.operator = operator;
    approval.approved = approved;
    approval.bump = ctx.bumps.approval;

    emit!(ApprovalForAll {
        registry: approval.registry,
        owner: approval.owner,
        operator,
        approved,
    });

    msg!(
        "Operator {} {} for {}",
        operator,
        if approved { "approved" } else { "revoked" },
        approval.owner
    );

    Ok(())
}

#[event]
pub struct ApprovalForAll {
    pub registry: Pubkey,
    pub owner: Pubkey,
    pub operator: Pubkey,
    pub approved: bool,
}
