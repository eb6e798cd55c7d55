use crate::{events::HmtStaked, state::*};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};

#[derive(Accounts)]
pub struct StakeHmt<'info> {
    pub owner: Signer<'info>,

    #[account(
        seeds = [HumanUsd::PREFIX_SEED, human_usd.husd_mint.as_ref()],
        bump = human_usd.bump
    )]
    pub human_usd: Account<'info, HumanUsd>,

    #[account(
        mut,
        seeds = [StakePosition::PREFIX_SEED, human_usd.key().as_ref()],
        bump = stake_position.bump
    )]
    pub stake_position: Account<'info, StakePosition>,

    #[account(address = human_usd.hmt_mint)]
    pub hmt_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        token::mint = hmt_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_hmt: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = hmt_mint,
        associated_token::authority = stake_position,
        associated_token::token_program = token_program,
    )]
    pub stake_vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handler(ctx: Context<StakeHmt>, amount: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let human_usd = ctx.accounts.human_usd.key();
    ctx.accounts
        .human_usd
        .stake_hmt(&owner, &human_usd, amount, &mut *ctx.accounts.stake_position)?;

    token_interface::transfer_checked(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.owner_hmt.to_account_info(),
                mint: ctx.accounts.hmt_mint.to_account_info(),
                to: ctx.accounts.stake_vault.to_account_info(),
                authority: ctx.accounts.owner.to_account_info(),
            },
        ),
        amount,
        ctx.accounts.hmt_mint.decimals,
    )?;

    emit!(HmtStaked {
        human_usd,
        amount,
        staked_amount: ctx.accounts.stake_position.staked_amount,
    });

    Ok(())
}
